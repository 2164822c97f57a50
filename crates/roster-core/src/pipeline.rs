//! The hiring pipeline: stage transitions and the hire side effect.
//!
//! [`advance_applicant_stage`] is the single entry point that moves an
//! applicant between stages. The stage write itself is unconditional — the
//! field permits any transition — but the transition into
//! [`ApplicantStage::Hired`] additionally synthesizes one employee record
//! and one payroll entry from the applicant's data plus the fixed
//! compensation rule. The employee is persisted first so the payroll entry's
//! employee reference always resolves.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::{
  applicant::{Applicant, ApplicantStage, ApplicantUpdate},
  employee::{Employee, EmployeeStatus, NewEmployee},
  payroll::{Compensation, NewPayrollEntry, PayPeriod, PayrollEntry},
  store::RecordStore,
};

/// Department assigned to hires whose application did not specify one.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// The employee/payroll pair synthesized by a hire.
#[derive(Debug, Clone, Serialize)]
pub struct HireRecords {
  pub employee:      Employee,
  pub payroll_entry: PayrollEntry,
}

/// Outcome of a stage transition.
#[derive(Debug, Clone, Serialize)]
pub struct StageAdvance {
  /// The applicant after the stage write.
  pub applicant: Applicant,
  /// Present only when this call performed the transition into `Hired`.
  pub hired:     Option<HireRecords>,
}

/// Set the applicant's stage to `stage`, firing the hire side effect when
/// the applicant newly reaches [`ApplicantStage::Hired`].
///
/// Returns `Ok(None)` when no such applicant exists. Re-sending `Hired` to
/// an already-hired applicant rewrites the stage field but synthesizes
/// nothing — the hire side effect fires at most once per applicant.
pub async fn advance_applicant_stage<S: RecordStore>(
  store: &S,
  applicant_id: Uuid,
  stage: ApplicantStage,
) -> Result<Option<StageAdvance>, S::Error> {
  let Some(current) = store.get_applicant(applicant_id).await? else {
    return Ok(None);
  };
  let already_hired = current.stage == ApplicantStage::Hired;

  let update = ApplicantUpdate {
    stage: Some(stage),
    ..ApplicantUpdate::default()
  };
  let Some(applicant) = store.update_applicant(applicant_id, update).await?
  else {
    return Ok(None);
  };

  let hired = if stage == ApplicantStage::Hired && !already_hired {
    Some(synthesize_hire(store, &applicant).await?)
  } else {
    None
  };

  Ok(Some(StageAdvance { applicant, hired }))
}

/// Build and persist the records for a newly hired applicant.
async fn synthesize_hire<S: RecordStore>(
  store: &S,
  applicant: &Applicant,
) -> Result<HireRecords, S::Error> {
  let salary = applicant.expected_salary.unwrap_or(0.0);

  let employee = store
    .add_employee(NewEmployee {
      name:         applicant.name.clone(),
      email:        applicant.email.clone(),
      phone:        applicant.phone.clone(),
      position:     applicant.position.clone(),
      department:   applicant
        .department
        .clone()
        .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_owned()),
      company_id:   applicant.company_id,
      salary,
      hired_on:     Some(Utc::now().date_naive()),
      status:       EmployeeStatus::Active,
      applicant_id: Some(applicant.applicant_id),
    })
    .await?;

  let payroll_entry = store
    .add_payroll_entry(NewPayrollEntry::from_compensation(
      employee.employee_id,
      PayPeriod::current(),
      Compensation::standard(salary),
    ))
    .await?;

  Ok(HireRecords { employee, payroll_entry })
}
