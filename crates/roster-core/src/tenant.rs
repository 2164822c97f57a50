//! Tenancy and session-role types.
//!
//! Every store handle is scoped to exactly one tenant; tenants never observe
//! each other's collections. In the server binary the tenant key is the
//! authenticated username, which doubles as the persistence namespace.

use serde::{Deserialize, Serialize};

/// Identifies one tenant's record set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl std::fmt::Display for TenantId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

/// What a session is allowed to do: admins mutate, employees read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  Employee,
}
