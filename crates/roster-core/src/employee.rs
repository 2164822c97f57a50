//! Employee records.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employment status.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
  #[default]
  Active,
  Inactive,
  Terminated,
}

/// An employee on the roster — entered directly by an admin, or synthesized
/// by the hiring pipeline when an applicant reaches the hired stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
  pub employee_id:  Uuid,
  pub name:         String,
  pub email:        String,
  pub phone:        Option<String>,
  pub position:     String,
  pub department:   String,
  /// May dangle after the referenced company is removed; tolerated.
  pub company_id:   Option<Uuid>,
  pub salary:       f64,
  pub hired_on:     NaiveDate,
  pub status:       EmployeeStatus,
  /// Set when this record was synthesized from a hired applicant.
  /// Non-owning; traceability only.
  pub applicant_id: Option<Uuid>,
}

/// Input to [`RecordStore::add_employee`](crate::store::RecordStore).
/// The id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
  pub name:         String,
  pub email:        String,
  #[serde(default)]
  pub phone:        Option<String>,
  pub position:     String,
  pub department:   String,
  #[serde(default)]
  pub company_id:   Option<Uuid>,
  pub salary:       f64,
  /// Defaults to today (UTC) when omitted.
  #[serde(default)]
  pub hired_on:     Option<NaiveDate>,
  #[serde(default)]
  pub status:       EmployeeStatus,
  #[serde(default)]
  pub applicant_id: Option<Uuid>,
}

impl NewEmployee {
  /// Build the stored record under a store-assigned id.
  pub fn into_employee(self, employee_id: Uuid) -> Employee {
    Employee {
      employee_id,
      name: self.name,
      email: self.email,
      phone: self.phone,
      position: self.position,
      department: self.department,
      company_id: self.company_id,
      salary: self.salary,
      hired_on: self.hired_on.unwrap_or_else(|| Utc::now().date_naive()),
      status: self.status,
      applicant_id: self.applicant_id,
    }
  }
}

/// Partial update merged into an existing employee. `None` fields are left
/// unchanged; optional fields can be set but not cleared. The id and the
/// applicant back-reference are immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
  pub name:       Option<String>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub position:   Option<String>,
  pub department: Option<String>,
  pub company_id: Option<Uuid>,
  pub salary:     Option<f64>,
  pub hired_on:   Option<NaiveDate>,
  pub status:     Option<EmployeeStatus>,
}

impl EmployeeUpdate {
  pub fn apply(self, employee: &mut Employee) {
    if let Some(v) = self.name {
      employee.name = v;
    }
    if let Some(v) = self.email {
      employee.email = v;
    }
    if let Some(v) = self.phone {
      employee.phone = Some(v);
    }
    if let Some(v) = self.position {
      employee.position = v;
    }
    if let Some(v) = self.department {
      employee.department = v;
    }
    if let Some(v) = self.company_id {
      employee.company_id = Some(v);
    }
    if let Some(v) = self.salary {
      employee.salary = v;
    }
    if let Some(v) = self.hired_on {
      employee.hired_on = v;
    }
    if let Some(v) = self.status {
      employee.status = v;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn employee() -> Employee {
    NewEmployee {
      name:         "Ada Lovelace".into(),
      email:        "ada@example.com".into(),
      phone:        None,
      position:     "Engineer".into(),
      department:   "R&D".into(),
      company_id:   None,
      salary:       120_000.0,
      hired_on:     Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
      status:       EmployeeStatus::default(),
      applicant_id: None,
    }
    .into_employee(Uuid::new_v4())
  }

  #[test]
  fn update_merges_only_provided_fields() {
    let mut e = employee();
    let id = e.employee_id;

    EmployeeUpdate {
      salary: Some(130_000.0),
      status: Some(EmployeeStatus::Inactive),
      ..EmployeeUpdate::default()
    }
    .apply(&mut e);

    assert_eq!(e.employee_id, id);
    assert_eq!(e.name, "Ada Lovelace");
    assert_eq!(e.salary, 130_000.0);
    assert_eq!(e.status, EmployeeStatus::Inactive);
  }

  #[test]
  fn empty_update_is_identity() {
    let mut e = employee();
    let before = serde_json::to_value(&e).unwrap();
    EmployeeUpdate::default().apply(&mut e);
    assert_eq!(serde_json::to_value(&e).unwrap(), before);
  }

  #[test]
  fn hired_on_defaults_to_today() {
    let e = NewEmployee {
      name:         "Grace Hopper".into(),
      email:        "grace@example.com".into(),
      phone:        None,
      position:     "Engineer".into(),
      department:   "R&D".into(),
      company_id:   None,
      salary:       0.0,
      hired_on:     None,
      status:       EmployeeStatus::default(),
      applicant_id: None,
    }
    .into_employee(Uuid::new_v4());
    assert_eq!(e.hired_on, Utc::now().date_naive());
  }
}
