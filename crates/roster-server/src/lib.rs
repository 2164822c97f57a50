//! HTTP server for Roster.
//!
//! Wires the JSON API to the SQLite backend behind a Basic-auth layer that
//! resolves every request to a tenant session.

pub mod auth;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, middleware};
use roster_core::tenant::Role;
use roster_store_sqlite::SqliteBackend;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::AuthConfig;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Accounts accepted by the Basic-auth stub. Each username doubles as a
  /// tenant namespace in the store.
  pub users:      Vec<UserConfig>,
}

/// One configured account.
#[derive(Deserialize, Clone)]
pub struct UserConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  pub role:          Role,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state for router assembly.
#[derive(Clone)]
pub struct AppState {
  pub backend: Arc<SqliteBackend>,
  pub auth:    Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: the JSON API under `/api`, behind the
/// session-resolving auth layer, with request tracing outermost.
pub fn router(state: AppState) -> Router {
  Router::new()
    .nest("/api", roster_api::api_router(state.backend.clone()))
    .layer(middleware::from_fn_with_state(
      state.auth.clone(),
      auth::require_session,
    ))
    .layer(TraceLayer::new_for_http())
}
