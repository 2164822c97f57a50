//! Handlers for `/applicants` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/applicants` | Snapshot of the collection |
//! | `POST`   | `/applicants` | Admin only; body: [`NewApplicant`]; 201 |
//! | `GET`    | `/applicants/:id` | 404 if not found |
//! | `PATCH`  | `/applicants/:id` | Admin only; field writes, no side effects |
//! | `DELETE` | `/applicants/:id` | Admin only; 204 even when absent |
//! | `POST`   | `/applicants/:id/stage` | Admin only; routes through the hiring pipeline |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  applicant::{Applicant, ApplicantStage, ApplicantUpdate, NewApplicant},
  pipeline::{StageAdvance, advance_applicant_stage},
  store::{RecordStore, StoreBackend},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, session::Session};

/// `GET /applicants`
pub async fn list<B>(
  State(backend): State<Arc<B>>,
  session: Session,
) -> Result<Json<Vec<Applicant>>, ApiError>
where
  B: StoreBackend + 'static,
{
  let store = backend.tenant(&session.tenant);
  let applicants = store
    .list_applicants()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(applicants))
}

/// `POST /applicants`
pub async fn create<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Json(body): Json<NewApplicant>,
) -> Result<impl IntoResponse, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let applicant = store
    .add_applicant(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(applicant)))
}

/// `GET /applicants/:id`
pub async fn get_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
) -> Result<Json<Applicant>, ApiError>
where
  B: StoreBackend + 'static,
{
  let store = backend.tenant(&session.tenant);
  let applicant = store
    .get_applicant(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("applicant {id} not found")))?;
  Ok(Json(applicant))
}

/// `PATCH /applicants/:id` — plain field writes; assigning `stage` here
/// carries no hire side effect.
pub async fn update_one<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
  Json(body): Json<ApplicantUpdate>,
) -> Result<Json<Applicant>, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let applicant = store
    .update_applicant(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("applicant {id} not found")))?;
  Ok(Json(applicant))
}

/// `DELETE /applicants/:id`
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
    .remove_applicant(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Stage advance ────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /applicants/:id/stage`.
#[derive(Debug, Deserialize)]
pub struct StageBody {
  pub stage: ApplicantStage,
}

/// `POST /applicants/:id/stage` — body: `{"stage":"hired"}`.
///
/// The one entry point into the hiring pipeline. The response carries the
/// applicant after the write and, when this call performed the transition
/// into `hired`, the synthesized employee and payroll entry.
pub async fn advance_stage<B>(
  State(backend): State<Arc<B>>,
  session: Session,
  Path(id): Path<Uuid>,
  Json(body): Json<StageBody>,
) -> Result<Json<StageAdvance>, ApiError>
where
  B: StoreBackend + 'static,
{
  session.require_admin()?;
  let store = backend.tenant(&session.tenant);
  let advance = advance_applicant_stage(&store, id, body.stage)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("applicant {id} not found")))?;
  Ok(Json(advance))
}
