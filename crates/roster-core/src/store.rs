//! The [`RecordStore`] trait and the tenant-scoped backend abstraction.
//!
//! The traits are implemented by storage backends (e.g.
//! `roster-store-sqlite`). Higher layers (`roster-api`, the server binary)
//! depend on these abstractions, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  applicant::{Applicant, ApplicantUpdate, NewApplicant},
  company::{Company, CompanyUpdate, NewCompany},
  employee::{Employee, EmployeeUpdate, NewEmployee},
  payroll::{NewPayrollEntry, PayrollEntry, PayrollUpdate},
  tenant::TenantId,
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over one tenant's record set: four parallel CRUD surfaces,
/// one per collection.
///
/// Each mutation executes as one atomic, serializable unit against its
/// collection and mirrors the whole updated collection to persistent
/// storage. Reads are plain snapshots with no query language — filtering is
/// the caller's responsibility. `update_*` and `remove_*` on an absent id
/// are silent no-ops (`None` / `false`), never errors.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Employees ─────────────────────────────────────────────────────────

  /// Assign a fresh unique id to `new` and append it to the collection.
  fn add_employee(
    &self,
    new: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Retrieve an employee by id. Returns `None` if not found.
  fn get_employee(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Snapshot of the whole employee collection.
  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Merge `update`'s provided fields into the matching record. Returns the
  /// updated record, or `None` (no-op) if the id is absent.
  fn update_employee(
    &self,
    id: Uuid,
    update: EmployeeUpdate,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Filter the matching record out. Returns `false` (no-op) if the id is
  /// absent. No cascading deletes.
  fn remove_employee(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Companies ─────────────────────────────────────────────────────────

  fn add_company(
    &self,
    new: NewCompany,
  ) -> impl Future<Output = Result<Company, Self::Error>> + Send + '_;

  fn get_company(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Company>, Self::Error>> + Send + '_;

  fn list_companies(
    &self,
  ) -> impl Future<Output = Result<Vec<Company>, Self::Error>> + Send + '_;

  fn update_company(
    &self,
    id: Uuid,
    update: CompanyUpdate,
  ) -> impl Future<Output = Result<Option<Company>, Self::Error>> + Send + '_;

  fn remove_company(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Applicants ────────────────────────────────────────────────────────

  fn add_applicant(
    &self,
    new: NewApplicant,
  ) -> impl Future<Output = Result<Applicant, Self::Error>> + Send + '_;

  fn get_applicant(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Applicant>, Self::Error>> + Send + '_;

  fn list_applicants(
    &self,
  ) -> impl Future<Output = Result<Vec<Applicant>, Self::Error>> + Send + '_;

  /// Writes the provided fields, including `stage`, with no side effects.
  /// Hire synthesis happens only through
  /// [`crate::pipeline::advance_applicant_stage`].
  fn update_applicant(
    &self,
    id: Uuid,
    update: ApplicantUpdate,
  ) -> impl Future<Output = Result<Option<Applicant>, Self::Error>> + Send + '_;

  fn remove_applicant(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Payroll entries ───────────────────────────────────────────────────

  /// Appends the entry with its derived totals computed exactly once, via
  /// [`NewPayrollEntry::into_entry`].
  fn add_payroll_entry(
    &self,
    new: NewPayrollEntry,
  ) -> impl Future<Output = Result<PayrollEntry, Self::Error>> + Send + '_;

  fn get_payroll_entry(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<PayrollEntry>, Self::Error>> + Send + '_;

  fn list_payroll_entries(
    &self,
  ) -> impl Future<Output = Result<Vec<PayrollEntry>, Self::Error>> + Send + '_;

  /// Merges the provided fields; the derived totals are never recomputed.
  fn update_payroll_entry(
    &self,
    id: Uuid,
    update: PayrollUpdate,
  ) -> impl Future<Output = Result<Option<PayrollEntry>, Self::Error>> + Send + '_;

  fn remove_payroll_entry(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

// ─── Backend ─────────────────────────────────────────────────────────────────

/// A backend that can produce a [`RecordStore`] handle scoped to one tenant.
///
/// Handles are cheap to create; the server resolves one per request from
/// the authenticated session, so no consumer ever touches another tenant's
/// namespace.
pub trait StoreBackend: Send + Sync {
  type Store: RecordStore;

  fn tenant(&self, tenant: &TenantId) -> Self::Store;
}
