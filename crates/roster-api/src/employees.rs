//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | Snapshot of the collection |
//! | `POST`   | `/employees` | Admin only; body: [`NewEmployee`]; 201 |
//! | `GET`    | `/employees/:id` | 404 if not found |
//! | `PATCH`  | `/employees/:id` | Admin only; body: [`EmployeeUpdate`] |
//! | `DELETE` | `/employees/:id` | Admin only; 204 even when absent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  employee::{Employee, EmployeeUpdate, NewEmployee},
  store::{RecordStore, StoreBackend},
};
use uuid::Uuid;

use crate::{error::ApiError, session::Session};

/// `GET /employees`
pub async fn list<B>(
  State(backend): State<Arc<B>>,
  session: Session,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  B: StoreBackend + 'static,
{
  let store = backend.tenant(&session.tenant);
  let employees = store
    .list_employees()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(employees))
}

/// `POST /employees`
pub async fn create<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Json(body): Json<NewEmployee>,
) -> Result<impl IntoResponse, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let employee = store
    .add_employee(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(employee)))
}

/// `GET /employees/:id`
pub async fn get_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
) -> Result<Json<Employee>, ApiError>
where
  B: StoreBackend + 'static,
{
  let store = backend.tenant(&session.tenant);
  let employee = store
    .get_employee(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;
  Ok(Json(employee))
}

/// `PATCH /employees/:id`
pub async fn update_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
  Json(body): Json<EmployeeUpdate>,
) -> Result<Json<Employee>, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let employee = store
    .update_employee(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;
  Ok(Json(employee))
}

/// `DELETE /employees/:id` — removal is idempotent; an absent id is a no-op.
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
    .remove_employee(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
