//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::store::StoreBackend`]. Auth, TLS, and transport concerns
//! are the caller's responsibility: every request must carry a [`Session`]
//! extension (tenant + role), installed by the server's auth layer.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(backend.clone()))
//! ```

pub mod applicants;
pub mod companies;
pub mod employees;
pub mod error;
pub mod payroll;
pub mod session;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use roster_core::store::StoreBackend;

pub use error::ApiError;
pub use session::Session;

/// Build a fully-materialised API router for `backend`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<B>(backend: Arc<B>) -> Router<()>
where
  B: StoreBackend + 'static,
{
  Router::new()
    // Employees
    .route(
      "/employees",
      get(employees::list::<B>).post(employees::create::<B>),
    )
    .route(
      "/employees/{id}",
      get(employees::get_one::<B>)
        .patch(employees::update_one::<B>)
        .delete(employees::remove_one::<B>),
    )
    // Companies
    .route(
      "/companies",
      get(companies::list::<B>).post(companies::create::<B>),
    )
    .route(
      "/companies/{id}",
      get(companies::get_one::<B>)
        .patch(companies::update_one::<B>)
        .delete(companies::remove_one::<B>),
    )
    // Applicants
    .route(
      "/applicants",
      get(applicants::list::<B>).post(applicants::create::<B>),
    )
    .route(
      "/applicants/{id}",
      get(applicants::get_one::<B>)
        .patch(applicants::update_one::<B>)
        .delete(applicants::remove_one::<B>),
    )
    .route("/applicants/{id}/stage", post(applicants::advance_stage::<B>))
    // Payroll
    .route(
      "/payroll",
      get(payroll::list::<B>).post(payroll::create::<B>),
    )
    .route(
      "/payroll/{id}",
      get(payroll::get_one::<B>)
        .patch(payroll::update_one::<B>)
        .delete(payroll::remove_one::<B>),
    )
    .with_state(backend)
}

#[cfg(test)]
mod tests;
