//! Handlers for `/companies` endpoints; same shape as `/employees`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  company::{Company, CompanyUpdate, NewCompany},
  store::{RecordStore, StoreBackend},
};
use uuid::Uuid;

use crate::{error::ApiError, session::Session};

/// `GET /companies`
pub async fn list<B>(
  State(backend): State<Arc<B>>,
  session: Session,
) -> Result<Json<Vec<Company>>, ApiError>
where
  B: StoreBackend + 'static,
{
  let store = backend.tenant(&session.tenant);
  let companies = store
    .list_companies()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(companies))
}

/// `POST /companies`
pub async fn create<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Json(body): Json<NewCompany>,
) -> Result<impl IntoResponse, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let company = store
    .add_company(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(company)))
}

/// `GET /companies/:id`
pub async fn get_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
) -> Result<Json<Company>, ApiError>
where
  B: StoreBackend + 'static,
{
  let store = backend.tenant(&session.tenant);
  let company = store
    .get_company(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("company {id} not found")))?;
  Ok(Json(company))
}

/// `PATCH /companies/:id`
pub async fn update_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
  Json(body): Json<CompanyUpdate>,
) -> Result<Json<Company>, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let company = store
    .update_company(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("company {id} not found")))?;
  Ok(Json(company))
}

/// `DELETE /companies/:id` — no cascade: employees keep their (now dangling)
/// company reference.
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
    .remove_company(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
