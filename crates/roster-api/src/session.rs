//! Per-request session identity.

use axum::{extract::FromRequestParts, http::request::Parts};
use roster_core::tenant::{Role, TenantId};

use crate::error::ApiError;

/// The authenticated caller: which tenant's records to touch and what the
/// session may do. Installed as a request extension by the server's auth
/// layer — the API itself never authenticates anyone.
#[derive(Debug, Clone)]
pub struct Session {
  pub tenant: TenantId,
  pub role:   Role,
}

impl Session {
  /// Mutating endpoints are admin-only; employee sessions are read-only.
  pub fn require_admin(&self) -> Result<(), ApiError> {
    match self.role {
      Role::Admin => Ok(()),
      Role::Employee => Err(ApiError::Forbidden),
    }
  }
}

impl<S> FromRequestParts<S> for Session
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    _state: &S,
  ) -> Result<Self, Self::Rejection> {
    parts
      .extensions
      .get::<Session>()
      .cloned()
      .ok_or(ApiError::Unauthorized)
  }
}
