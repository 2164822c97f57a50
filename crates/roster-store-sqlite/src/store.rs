//! [`SqliteBackend`] and the tenant-scoped [`SqliteStore`] implementation of
//! [`RecordStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use roster_core::{
  applicant::{Applicant, ApplicantUpdate, NewApplicant},
  company::{Company, CompanyUpdate, NewCompany},
  employee::{Employee, EmployeeUpdate, NewEmployee},
  payroll::{NewPayrollEntry, PayrollEntry, PayrollUpdate},
  store::{RecordStore, StoreBackend},
  tenant::TenantId,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Collection keys ─────────────────────────────────────────────────────────

// The externally meaningful storage names; existing data is addressed by
// these exact strings.
const EMPLOYEES: &str = "employees";
const COMPANIES: &str = "companies";
const APPLICANTS: &str = "applicants";
const PAYROLL: &str = "payroll";

// ─── Backend ─────────────────────────────────────────────────────────────────

/// Owns the SQLite connection and hands out tenant-scoped stores.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteBackend {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteBackend {
  /// Open (or create) a database at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let backend = Self { conn };
    backend.init_schema().await?;
    Ok(backend)
  }

  /// Open an in-memory database — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let backend = Self { conn };
    backend.init_schema().await?;
    Ok(backend)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

impl StoreBackend for SqliteBackend {
  type Store = SqliteStore;

  fn tenant(&self, tenant: &TenantId) -> SqliteStore {
    SqliteStore {
      conn:   self.conn.clone(),
      tenant: tenant.clone(),
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// One tenant's view of the database. Every mutation loads, mutates, and
/// re-serializes the whole affected collection inside a single transaction
/// on the connection's dedicated thread — one atomic, serializable unit per
/// call.
#[derive(Clone)]
pub struct SqliteStore {
  conn:   tokio_rusqlite::Connection,
  tenant: TenantId,
}

impl SqliteStore {
  pub fn tenant_id(&self) -> &TenantId { &self.tenant }

  /// Read one collection. A missing row or malformed `data_json` degrades
  /// to an empty collection — the documented fallback, never an error.
  async fn load<T>(&self, collection: &'static str) -> Result<Vec<T>>
  where
    T: DeserializeOwned + Send + 'static,
  {
    let tenant = self.tenant.as_str().to_owned();
    let items = self
      .conn
      .call(move |conn| {
        let raw: Option<String> = conn
          .query_row(
            "SELECT data_json FROM collections
             WHERE tenant_id = ?1 AND collection = ?2",
            rusqlite::params![tenant, collection],
            |row| row.get(0),
          )
          .optional()?;
        Ok(decode_collection(&tenant, collection, raw))
      })
      .await?;
    Ok(items)
  }

  /// Load-mutate-store one collection as a single serializable unit.
  ///
  /// `mutate` runs against the decoded collection; the whole collection is
  /// then re-serialized and upserted under the tenant's key before the
  /// transaction commits.
  async fn with_collection<T, R, F>(
    &self,
    collection: &'static str,
    mutate: F,
  ) -> Result<R>
  where
    T: Serialize + DeserializeOwned + Send + 'static,
    R: Send + 'static,
    F: FnOnce(&mut Vec<T>) -> R + Send + 'static,
  {
    let tenant = self.tenant.as_str().to_owned();
    let outcome: std::result::Result<R, serde_json::Error> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let raw: Option<String> = tx
          .query_row(
            "SELECT data_json FROM collections
             WHERE tenant_id = ?1 AND collection = ?2",
            rusqlite::params![tenant, collection],
            |row| row.get(0),
          )
          .optional()?;

        let mut items: Vec<T> = decode_collection(&tenant, collection, raw);
        let result = mutate(&mut items);

        // Dropping the uncommitted transaction on the error path rolls the
        // read back; nothing is persisted.
        let data_json = match serde_json::to_string(&items) {
          Ok(json) => json,
          Err(e) => return Ok(Err(e)),
        };

        tx.execute(
          "INSERT INTO collections (tenant_id, collection, data_json, updated_at)
           VALUES (?1, ?2, ?3, ?4)
           ON CONFLICT (tenant_id, collection) DO UPDATE
             SET data_json  = excluded.data_json,
                 updated_at = excluded.updated_at",
          rusqlite::params![
            tenant,
            collection,
            data_json,
            Utc::now().to_rfc3339()
          ],
        )?;
        tx.commit()?;
        Ok(Ok(result))
      })
      .await?;
    Ok(outcome?)
  }

  // ── Generic CRUD over one collection ──────────────────────────────────

  async fn add_record<T>(&self, collection: &'static str, record: T) -> Result<T>
  where
    T: Clone + Serialize + DeserializeOwned + Send + 'static,
  {
    let stored = record.clone();
    self
      .with_collection(collection, move |items: &mut Vec<T>| {
        items.push(stored);
      })
      .await?;
    Ok(record)
  }

  async fn update_record<T, M, A>(
    &self,
    collection: &'static str,
    matches: M,
    apply: A,
  ) -> Result<Option<T>>
  where
    T: Clone + Serialize + DeserializeOwned + Send + 'static,
    M: Fn(&T) -> bool + Send + 'static,
    A: FnOnce(&mut T) + Send + 'static,
  {
    self
      .with_collection(collection, move |items: &mut Vec<T>| {
        match items.iter_mut().find(|item| matches(&**item)) {
          Some(item) => {
            apply(item);
            Some(item.clone())
          }
          None => None,
        }
      })
      .await
  }

  async fn remove_record<T, M>(
    &self,
    collection: &'static str,
    matches: M,
  ) -> Result<bool>
  where
    T: Serialize + DeserializeOwned + Send + 'static,
    M: Fn(&T) -> bool + Send + 'static,
  {
    self
      .with_collection(collection, move |items: &mut Vec<T>| {
        let before = items.len();
        items.retain(|item| !matches(item));
        items.len() != before
      })
      .await
  }
}

/// Decode a stored JSON array. Malformed data is the lossy-but-documented
/// case: warn and fall back to an empty collection rather than fail the
/// operation.
fn decode_collection<T: DeserializeOwned>(
  tenant: &str,
  collection: &'static str,
  raw: Option<String>,
) -> Vec<T> {
  let Some(raw) = raw else {
    return Vec::new();
  };
  match serde_json::from_str(&raw) {
    Ok(items) => items,
    Err(error) => {
      tracing::warn!(
        tenant,
        collection,
        %error,
        "stored collection is malformed; treating it as empty"
      );
      Vec::new()
    }
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  // ── Employees ─────────────────────────────────────────────────────────

  async fn add_employee(&self, new: NewEmployee) -> Result<Employee> {
    self
      .add_record(EMPLOYEES, new.into_employee(Uuid::new_v4()))
      .await
  }

  async fn get_employee(&self, id: Uuid) -> Result<Option<Employee>> {
    let items: Vec<Employee> = self.load(EMPLOYEES).await?;
    Ok(items.into_iter().find(|e| e.employee_id == id))
  }

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    self.load(EMPLOYEES).await
  }

  async fn update_employee(
    &self,
    id: Uuid,
    update: EmployeeUpdate,
  ) -> Result<Option<Employee>> {
    self
      .update_record(
        EMPLOYEES,
        move |e: &Employee| e.employee_id == id,
        |e| update.apply(e),
      )
      .await
  }

  async fn remove_employee(&self, id: Uuid) -> Result<bool> {
    self
      .remove_record(EMPLOYEES, move |e: &Employee| e.employee_id == id)
      .await
  }

  // ── Companies ─────────────────────────────────────────────────────────

  async fn add_company(&self, new: NewCompany) -> Result<Company> {
    self
      .add_record(COMPANIES, new.into_company(Uuid::new_v4()))
      .await
  }

  async fn get_company(&self, id: Uuid) -> Result<Option<Company>> {
    let items: Vec<Company> = self.load(COMPANIES).await?;
    Ok(items.into_iter().find(|c| c.company_id == id))
  }

  async fn list_companies(&self) -> Result<Vec<Company>> {
    self.load(COMPANIES).await
  }

  async fn update_company(
    &self,
    id: Uuid,
    update: CompanyUpdate,
  ) -> Result<Option<Company>> {
    self
      .update_record(
        COMPANIES,
        move |c: &Company| c.company_id == id,
        |c| update.apply(c),
      )
      .await
  }

  async fn remove_company(&self, id: Uuid) -> Result<bool> {
    self
      .remove_record(COMPANIES, move |c: &Company| c.company_id == id)
      .await
  }

  // ── Applicants ────────────────────────────────────────────────────────

  async fn add_applicant(&self, new: NewApplicant) -> Result<Applicant> {
    self
      .add_record(APPLICANTS, new.into_applicant(Uuid::new_v4()))
      .await
  }

  async fn get_applicant(&self, id: Uuid) -> Result<Option<Applicant>> {
    let items: Vec<Applicant> = self.load(APPLICANTS).await?;
    Ok(items.into_iter().find(|a| a.applicant_id == id))
  }

  async fn list_applicants(&self) -> Result<Vec<Applicant>> {
    self.load(APPLICANTS).await
  }

  async fn update_applicant(
    &self,
    id: Uuid,
    update: ApplicantUpdate,
  ) -> Result<Option<Applicant>> {
    self
      .update_record(
        APPLICANTS,
        move |a: &Applicant| a.applicant_id == id,
        |a| update.apply(a),
      )
      .await
  }

  async fn remove_applicant(&self, id: Uuid) -> Result<bool> {
    self
      .remove_record(APPLICANTS, move |a: &Applicant| a.applicant_id == id)
      .await
  }

  // ── Payroll entries ───────────────────────────────────────────────────

  async fn add_payroll_entry(
    &self,
    new: NewPayrollEntry,
  ) -> Result<PayrollEntry> {
    self.add_record(PAYROLL, new.into_entry(Uuid::new_v4())).await
  }

  async fn get_payroll_entry(&self, id: Uuid) -> Result<Option<PayrollEntry>> {
    let items: Vec<PayrollEntry> = self.load(PAYROLL).await?;
    Ok(items.into_iter().find(|p| p.entry_id == id))
  }

  async fn list_payroll_entries(&self) -> Result<Vec<PayrollEntry>> {
    self.load(PAYROLL).await
  }

  async fn update_payroll_entry(
    &self,
    id: Uuid,
    update: PayrollUpdate,
  ) -> Result<Option<PayrollEntry>> {
    self
      .update_record(
        PAYROLL,
        move |p: &PayrollEntry| p.entry_id == id,
        |p| update.apply(p),
      )
      .await
  }

  async fn remove_payroll_entry(&self, id: Uuid) -> Result<bool> {
    self
      .remove_record(PAYROLL, move |p: &PayrollEntry| p.entry_id == id)
      .await
  }
}
