//! HTTP Basic-auth layer resolving requests to tenant sessions.
//!
//! Deliberately a credential-matching stub, not an account system: users
//! live in the config file, and the username doubles as the tenant
//! namespace handed to the store.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  extract::{Request, State},
  http::{HeaderMap, StatusCode, header},
  middleware::Next,
  response::{IntoResponse, Response},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use roster_api::Session;
use roster_core::tenant::TenantId;

use crate::UserConfig;

/// Accounts accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub users: Vec<UserConfig>,
}

/// Middleware: authenticate the request and install its [`Session`]
/// extension for the API's extractor.
pub async fn require_session(
  State(auth): State<Arc<AuthConfig>>,
  mut request: Request,
  next: Next,
) -> Response {
  match verify_basic(request.headers(), &auth) {
    Ok(session) => {
      request.extensions_mut().insert(session);
      next.run(request).await
    }
    Err(response) => response,
  }
}

/// Verify `Authorization: Basic …` against the configured users and resolve
/// the matching session.
pub fn verify_basic(
  headers: &HeaderMap,
  config: &AuthConfig,
) -> Result<Session, Response> {
  let header_val = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or_else(unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or_else(unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| unauthorized())?;
  let creds = std::str::from_utf8(&decoded).map_err(|_| unauthorized())?;

  let (username, password) = creds.split_once(':').ok_or_else(unauthorized)?;

  let user = config
    .users
    .iter()
    .find(|u| u.username == username)
    .ok_or_else(unauthorized)?;

  let parsed_hash =
    PasswordHash::new(&user.password_hash).map_err(|_| unauthorized())?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| unauthorized())?;

  Ok(Session {
    tenant: TenantId::new(username),
    role:   user.role,
  })
}

fn unauthorized() -> Response {
  (
    StatusCode::UNAUTHORIZED,
    [(header::WWW_AUTHENTICATE, "Basic realm=\"roster\"")],
    "authentication required",
  )
    .into_response()
}

#[cfg(test)]
mod tests {
  use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
  use axum::http::HeaderValue;
  use rand_core::OsRng;
  use roster_core::tenant::Role;

  use super::*;

  fn hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string()
  }

  fn config() -> AuthConfig {
    AuthConfig {
      users: vec![
        UserConfig {
          username:      "hr-admin".into(),
          password_hash: hash("hunter2"),
          role:          Role::Admin,
        },
        UserConfig {
          username:      "staff".into(),
          password_hash: hash("letmein"),
          role:          Role::Employee,
        },
      ],
    }
  }

  fn basic(user: &str, password: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let token = B64.encode(format!("{user}:{password}"));
    headers.insert(
      header::AUTHORIZATION,
      HeaderValue::from_str(&format!("Basic {token}")).unwrap(),
    );
    headers
  }

  #[test]
  fn valid_credentials_resolve_session() {
    let session = verify_basic(&basic("hr-admin", "hunter2"), &config())
      .expect("valid credentials");
    assert_eq!(session.tenant.as_str(), "hr-admin");
    assert_eq!(session.role, Role::Admin);
  }

  #[test]
  fn role_comes_from_the_matched_user() {
    let session = verify_basic(&basic("staff", "letmein"), &config())
      .expect("valid credentials");
    assert_eq!(session.tenant.as_str(), "staff");
    assert_eq!(session.role, Role::Employee);
  }

  #[test]
  fn wrong_password_is_rejected() {
    assert!(verify_basic(&basic("hr-admin", "wrong"), &config()).is_err());
  }

  #[test]
  fn unknown_user_is_rejected() {
    assert!(verify_basic(&basic("nobody", "hunter2"), &config()).is_err());
  }

  #[test]
  fn missing_header_is_rejected() {
    assert!(verify_basic(&HeaderMap::new(), &config()).is_err());
  }

  #[test]
  fn non_basic_scheme_is_rejected() {
    let mut headers = HeaderMap::new();
    headers.insert(
      header::AUTHORIZATION,
      HeaderValue::from_static("Bearer abc123"),
    );
    assert!(verify_basic(&headers, &config()).is_err());
  }
}
