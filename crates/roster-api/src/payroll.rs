//! Handlers for `/payroll` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/payroll` | Optional `?employee_id=<uuid>` filter |
//! | `POST`   | `/payroll` | Admin only; totals derived once at creation |
//! | `GET`    | `/payroll/:id` | 404 if not found |
//! | `PATCH`  | `/payroll/:id` | Admin only; totals are never recomputed |
//! | `DELETE` | `/payroll/:id` | Admin only; 204 even when absent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  payroll::{NewPayrollEntry, PayrollEntry, PayrollUpdate},
  store::{RecordStore, StoreBackend},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, session::Session};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Restrict the snapshot to one employee's entries.
  pub employee_id: Option<Uuid>,
}

/// `GET /payroll[?employee_id=<uuid>]`
pub async fn list<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<PayrollEntry>>, ApiError>
where
  B: StoreBackend + 'static,
{
  let store = backend.tenant(&session.tenant);
  let mut entries = store
    .list_payroll_entries()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if let Some(employee_id) = params.employee_id {
    entries.retain(|entry| entry.employee_id == employee_id);
  }

  Ok(Json(entries))
}

/// `POST /payroll`
pub async fn create<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Json(body): Json<NewPayrollEntry>,
) -> Result<impl IntoResponse, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let entry = store
    .add_payroll_entry(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /payroll/:id`
pub async fn get_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
) -> Result<Json<PayrollEntry>, ApiError>
where
  B: StoreBackend + 'static,
{
  let store = backend.tenant(&session.tenant);
  let entry = store
    .get_payroll_entry(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("payroll entry {id} not found")))?;
  Ok(Json(entry))
}

/// `PATCH /payroll/:id`
pub async fn update_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
  Json(body): Json<PayrollUpdate>,
) -> Result<Json<PayrollEntry>, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let entry = store
    .update_payroll_entry(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("payroll entry {id} not found")))?;
  Ok(Json(entry))
}

/// `DELETE /payroll/:id`
pub async fn remove_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  store
    .remove_payroll_entry(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
