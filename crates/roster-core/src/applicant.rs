//! Applicant records and the hiring-stage vocabulary.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Stage ───────────────────────────────────────────────────────────────────

/// Position of a candidate in the hiring pipeline.
///
/// The nominal order is applied → screening → interview → offer → hired,
/// with rejected reachable from any non-terminal stage. Transitions are not
/// validated: any stage may be assigned directly. Only the transition into
/// [`ApplicantStage::Hired`] carries a side effect (see [`crate::pipeline`]).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantStage {
  #[default]
  Applied,
  Screening,
  Interview,
  Offer,
  Hired,
  Rejected,
}

impl ApplicantStage {
  /// Hired and rejected end the pipeline.
  pub fn is_terminal(self) -> bool {
    matches!(self, Self::Hired | Self::Rejected)
  }
}

// ─── Rating ──────────────────────────────────────────────────────────────────

/// Integer applicant rating, 0–5 inclusive. Out-of-range values are rejected
/// at the serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
  pub const MAX: u8 = 5;

  pub fn new(value: u8) -> Result<Self> {
    if value > Self::MAX {
      return Err(Error::RatingOutOfRange(value));
    }
    Ok(Self(value))
  }

  pub fn value(self) -> u8 { self.0 }
}

impl TryFrom<u8> for Rating {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self> { Self::new(value) }
}

impl From<Rating> for u8 {
  fn from(rating: Rating) -> u8 { rating.0 }
}

// ─── Applicant ───────────────────────────────────────────────────────────────

/// A job candidate moving through the hiring pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
  pub applicant_id:    Uuid,
  pub name:            String,
  pub email:           String,
  pub phone:           Option<String>,
  pub position:        String,
  pub department:      Option<String>,
  pub company_id:      Option<Uuid>,
  pub expected_salary: Option<f64>,
  /// Opaque reference to an uploaded resume document.
  pub resume:          Option<String>,
  pub cover_letter:    Option<String>,
  pub stage:           ApplicantStage,
  pub applied_on:      NaiveDate,
  pub notes:           Option<String>,
  pub rating:          Option<Rating>,
}

/// Input to [`RecordStore::add_applicant`](crate::store::RecordStore).
#[derive(Debug, Clone, Deserialize)]
pub struct NewApplicant {
  pub name:            String,
  pub email:           String,
  #[serde(default)]
  pub phone:           Option<String>,
  pub position:        String,
  #[serde(default)]
  pub department:      Option<String>,
  #[serde(default)]
  pub company_id:      Option<Uuid>,
  #[serde(default)]
  pub expected_salary: Option<f64>,
  #[serde(default)]
  pub resume:          Option<String>,
  #[serde(default)]
  pub cover_letter:    Option<String>,
  #[serde(default)]
  pub stage:           ApplicantStage,
  /// Defaults to today (UTC) when omitted.
  #[serde(default)]
  pub applied_on:      Option<NaiveDate>,
  #[serde(default)]
  pub notes:           Option<String>,
  #[serde(default)]
  pub rating:          Option<Rating>,
}

impl NewApplicant {
  pub fn into_applicant(self, applicant_id: Uuid) -> Applicant {
    Applicant {
      applicant_id,
      name: self.name,
      email: self.email,
      phone: self.phone,
      position: self.position,
      department: self.department,
      company_id: self.company_id,
      expected_salary: self.expected_salary,
      resume: self.resume,
      cover_letter: self.cover_letter,
      stage: self.stage,
      applied_on: self.applied_on.unwrap_or_else(|| Utc::now().date_naive()),
      notes: self.notes,
      rating: self.rating,
    }
  }
}

/// Partial update merged into an existing applicant.
///
/// Setting `stage` here writes the field with no side effects; the hiring
/// pipeline ([`crate::pipeline::advance_applicant_stage`]) is the entry
/// point that also synthesizes hire records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicantUpdate {
  pub name:            Option<String>,
  pub email:           Option<String>,
  pub phone:           Option<String>,
  pub position:        Option<String>,
  pub department:      Option<String>,
  pub company_id:      Option<Uuid>,
  pub expected_salary: Option<f64>,
  pub resume:          Option<String>,
  pub cover_letter:    Option<String>,
  pub stage:           Option<ApplicantStage>,
  pub notes:           Option<String>,
  pub rating:          Option<Rating>,
}

impl ApplicantUpdate {
  pub fn apply(self, applicant: &mut Applicant) {
    if let Some(v) = self.name {
      applicant.name = v;
    }
    if let Some(v) = self.email {
      applicant.email = v;
    }
    if let Some(v) = self.phone {
      applicant.phone = Some(v);
    }
    if let Some(v) = self.position {
      applicant.position = v;
    }
    if let Some(v) = self.department {
      applicant.department = Some(v);
    }
    if let Some(v) = self.company_id {
      applicant.company_id = Some(v);
    }
    if let Some(v) = self.expected_salary {
      applicant.expected_salary = Some(v);
    }
    if let Some(v) = self.resume {
      applicant.resume = Some(v);
    }
    if let Some(v) = self.cover_letter {
      applicant.cover_letter = Some(v);
    }
    if let Some(v) = self.stage {
      applicant.stage = v;
    }
    if let Some(v) = self.notes {
      applicant.notes = Some(v);
    }
    if let Some(v) = self.rating {
      applicant.rating = Some(v);
    }
  }
}
