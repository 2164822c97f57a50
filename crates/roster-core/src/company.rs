//! Company records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A postal address; all fields stored as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
  pub street:      Option<String>,
  /// City or locality.
  pub locality:    Option<String>,
  /// State, province, or region.
  pub region:      Option<String>,
  pub postal_code: Option<String>,
  pub country:     Option<String>,
}

/// A company record. Removing a company does not cascade to employees that
/// reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
  pub company_id: Uuid,
  pub name:       String,
  pub industry:   Option<String>,
  /// Free-form size bracket, e.g. "11-50".
  pub size:       Option<String>,
  pub address:    Address,
  pub email:      Option<String>,
  pub phone:      Option<String>,
}

/// Input to [`RecordStore::add_company`](crate::store::RecordStore).
#[derive(Debug, Clone, Deserialize)]
pub struct NewCompany {
  pub name:     String,
  #[serde(default)]
  pub industry: Option<String>,
  #[serde(default)]
  pub size:     Option<String>,
  #[serde(default)]
  pub address:  Address,
  #[serde(default)]
  pub email:    Option<String>,
  #[serde(default)]
  pub phone:    Option<String>,
}

impl NewCompany {
  pub fn into_company(self, company_id: Uuid) -> Company {
    Company {
      company_id,
      name: self.name,
      industry: self.industry,
      size: self.size,
      address: self.address,
      email: self.email,
      phone: self.phone,
    }
  }
}

/// Partial update merged into an existing company. A provided `address`
/// replaces the whole address block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyUpdate {
  pub name:     Option<String>,
  pub industry: Option<String>,
  pub size:     Option<String>,
  pub address:  Option<Address>,
  pub email:    Option<String>,
  pub phone:    Option<String>,
}

impl CompanyUpdate {
  pub fn apply(self, company: &mut Company) {
    if let Some(v) = self.name {
      company.name = v;
    }
    if let Some(v) = self.industry {
      company.industry = Some(v);
    }
    if let Some(v) = self.size {
      company.size = Some(v);
    }
    if let Some(v) = self.address {
      company.address = v;
    }
    if let Some(v) = self.email {
      company.email = Some(v);
    }
    if let Some(v) = self.phone {
      company.phone = Some(v);
    }
  }
}
