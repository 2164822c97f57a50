//! Payroll entries, pay periods, and the fixed compensation rule.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Pay period ──────────────────────────────────────────────────────────────

/// One payroll run, identified by calendar year and month.
/// Serialized as `"YYYY-MM"`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct PayPeriod {
  year:  i32,
  month: u32,
}

impl PayPeriod {
  pub fn new(year: i32, month: u32) -> Result<Self> {
    if !(1..=12).contains(&month) {
      return Err(Error::InvalidPayPeriod(format!("{year:04}-{month:02}")));
    }
    Ok(Self { year, month })
  }

  /// The period containing `date`.
  pub fn for_date(date: NaiveDate) -> Self {
    Self { year: date.year(), month: date.month() }
  }

  /// The period containing today (UTC).
  pub fn current() -> Self { Self::for_date(Utc::now().date_naive()) }

  pub fn year(self) -> i32 { self.year }

  pub fn month(self) -> u32 { self.month }
}

impl fmt::Display for PayPeriod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04}-{:02}", self.year, self.month)
  }
}

impl FromStr for PayPeriod {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let invalid = || Error::InvalidPayPeriod(s.to_owned());
    let (year, month) = s.split_once('-').ok_or_else(invalid)?;
    let year = year.parse().map_err(|_| invalid())?;
    let month = month.parse().map_err(|_| invalid())?;
    Self::new(year, month).map_err(|_| invalid())
  }
}

impl TryFrom<String> for PayPeriod {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<PayPeriod> for String {
  fn from(period: PayPeriod) -> String { period.to_string() }
}

// ─── Compensation rule ───────────────────────────────────────────────────────

/// Bonus share of base salary.
pub const BONUS_RATE: f64 = 0.10;
/// Tax share of base salary.
pub const TAX_RATE: f64 = 0.075;
/// Pension share of base salary.
pub const PENSION_RATE: f64 = 0.08;

/// The inputs a payroll entry's totals are derived from.
#[derive(Debug, Clone, Copy)]
pub struct Compensation {
  pub base_salary:       f64,
  pub overtime:          f64,
  pub bonuses:           f64,
  pub tax_deduction:     f64,
  pub pension_deduction: f64,
}

impl Compensation {
  /// The fixed rule applied on hire: 10% bonus, 7.5% tax, 8% pension,
  /// no overtime.
  pub fn standard(base_salary: f64) -> Self {
    Self {
      base_salary,
      overtime:          0.0,
      bonuses:           base_salary * BONUS_RATE,
      tax_deduction:     base_salary * TAX_RATE,
      pension_deduction: base_salary * PENSION_RATE,
    }
  }

  pub fn total_deductions(&self) -> f64 {
    self.tax_deduction + self.pension_deduction
  }

  pub fn net_pay(&self) -> f64 {
    self.base_salary + self.overtime + self.bonuses - self.total_deductions()
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// Processing status of a payroll entry.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
  #[default]
  Pending,
  Processed,
  Completed,
}

/// One employee's payroll entry for one pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollEntry {
  pub entry_id:          Uuid,
  pub employee_id:       Uuid,
  pub period:            PayPeriod,
  pub base_salary:       f64,
  pub overtime:          f64,
  pub bonuses:           f64,
  pub tax_deduction:     f64,
  pub pension_deduction: f64,
  /// Derived once at creation; never recomputed on later updates.
  pub total_deductions:  f64,
  /// Derived once at creation; never recomputed on later updates.
  pub net_pay:           f64,
  pub status:            PayrollStatus,
  pub processed_on:      Option<NaiveDate>,
}

/// Input to [`RecordStore::add_payroll_entry`](crate::store::RecordStore).
/// The derived totals are computed by [`NewPayrollEntry::into_entry`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewPayrollEntry {
  pub employee_id:       Uuid,
  pub period:            PayPeriod,
  pub base_salary:       f64,
  #[serde(default)]
  pub overtime:          f64,
  #[serde(default)]
  pub bonuses:           f64,
  #[serde(default)]
  pub tax_deduction:     f64,
  #[serde(default)]
  pub pension_deduction: f64,
  #[serde(default)]
  pub status:            PayrollStatus,
}

impl NewPayrollEntry {
  pub fn from_compensation(
    employee_id: Uuid,
    period: PayPeriod,
    comp: Compensation,
  ) -> Self {
    Self {
      employee_id,
      period,
      base_salary: comp.base_salary,
      overtime: comp.overtime,
      bonuses: comp.bonuses,
      tax_deduction: comp.tax_deduction,
      pension_deduction: comp.pension_deduction,
      status: PayrollStatus::default(),
    }
  }

  /// Build the stored record. This is the only place `total_deductions` and
  /// `net_pay` are computed.
  pub fn into_entry(self, entry_id: Uuid) -> PayrollEntry {
    let comp = Compensation {
      base_salary:       self.base_salary,
      overtime:          self.overtime,
      bonuses:           self.bonuses,
      tax_deduction:     self.tax_deduction,
      pension_deduction: self.pension_deduction,
    };
    PayrollEntry {
      entry_id,
      employee_id: self.employee_id,
      period: self.period,
      base_salary: self.base_salary,
      overtime: self.overtime,
      bonuses: self.bonuses,
      tax_deduction: self.tax_deduction,
      pension_deduction: self.pension_deduction,
      total_deductions: comp.total_deductions(),
      net_pay: comp.net_pay(),
      status: self.status,
      processed_on: None,
    }
  }
}

/// Partial update merged into an existing payroll entry. The derived
/// `total_deductions` and `net_pay` are intentionally untouched even when
/// their inputs change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollUpdate {
  pub period:            Option<PayPeriod>,
  pub base_salary:       Option<f64>,
  pub overtime:          Option<f64>,
  pub bonuses:           Option<f64>,
  pub tax_deduction:     Option<f64>,
  pub pension_deduction: Option<f64>,
  pub status:            Option<PayrollStatus>,
  pub processed_on:      Option<NaiveDate>,
}

impl PayrollUpdate {
  pub fn apply(self, entry: &mut PayrollEntry) {
    if let Some(v) = self.period {
      entry.period = v;
    }
    if let Some(v) = self.base_salary {
      entry.base_salary = v;
    }
    if let Some(v) = self.overtime {
      entry.overtime = v;
    }
    if let Some(v) = self.bonuses {
      entry.bonuses = v;
    }
    if let Some(v) = self.tax_deduction {
      entry.tax_deduction = v;
    }
    if let Some(v) = self.pension_deduction {
      entry.pension_deduction = v;
    }
    if let Some(v) = self.status {
      entry.status = v;
    }
    if let Some(v) = self.processed_on {
      entry.processed_on = Some(v);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn standard_compensation_rates() {
    let comp = Compensation::standard(600_000.0);
    assert_eq!(comp.overtime, 0.0);
    assert_eq!(comp.bonuses, 60_000.0);
    assert_eq!(comp.tax_deduction, 45_000.0);
    assert_eq!(comp.pension_deduction, 48_000.0);
    assert_eq!(comp.total_deductions(), 93_000.0);
    assert_eq!(comp.net_pay(), 567_000.0);
  }

  #[test]
  fn pay_period_display_zero_pads() {
    let period = PayPeriod::new(2026, 8).unwrap();
    assert_eq!(period.to_string(), "2026-08");
  }

  #[test]
  fn pay_period_parses_and_round_trips() {
    let period: PayPeriod = "2026-08".parse().unwrap();
    assert_eq!(period.year(), 2026);
    assert_eq!(period.month(), 8);
    assert_eq!(
      serde_json::from_str::<PayPeriod>("\"2026-08\"").unwrap(),
      period
    );
    assert_eq!(serde_json::to_string(&period).unwrap(), "\"2026-08\"");
  }

  #[test]
  fn pay_period_rejects_garbage() {
    assert!("2026".parse::<PayPeriod>().is_err());
    assert!("2026-13".parse::<PayPeriod>().is_err());
    assert!("2026-xx".parse::<PayPeriod>().is_err());
  }

  #[test]
  fn pay_period_for_date() {
    let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert_eq!(PayPeriod::for_date(date), PayPeriod::new(2025, 12).unwrap());
  }

  #[test]
  fn into_entry_derives_totals_once() {
    let entry = NewPayrollEntry {
      employee_id:       Uuid::new_v4(),
      period:            PayPeriod::new(2026, 1).unwrap(),
      base_salary:       1_000.0,
      overtime:          100.0,
      bonuses:           50.0,
      tax_deduction:     75.0,
      pension_deduction: 80.0,
      status:            PayrollStatus::default(),
    }
    .into_entry(Uuid::new_v4());

    assert_eq!(entry.total_deductions, 155.0);
    assert_eq!(entry.net_pay, 995.0);
    assert_eq!(entry.status, PayrollStatus::Pending);
    assert!(entry.processed_on.is_none());
  }
}
