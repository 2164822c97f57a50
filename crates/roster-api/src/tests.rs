//! Router-level tests against an in-memory SQLite backend.

use std::sync::Arc;

use axum::{
  Extension, Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use roster_core::tenant::{Role, TenantId};
use roster_store_sqlite::SqliteBackend;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::{Session, api_router};

fn session(role: Role) -> Session {
  Session {
    tenant: TenantId::new("acme"),
    role,
  }
}

async fn admin_router() -> Router {
  let backend = Arc::new(SqliteBackend::open_in_memory().await.unwrap());
  api_router(backend).layer(Extension(session(Role::Admin)))
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
  Request::builder()
    .method(method)
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

async fn read_json(response: Response) -> Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn employee_body(name: &str) -> Value {
  json!({
    "name": name,
    "email": "alice@example.com",
    "position": "Engineer",
    "department": "R&D",
    "salary": 90_000.0,
  })
}

#[tokio::test]
async fn missing_session_is_rejected() {
  let backend = Arc::new(SqliteBackend::open_in_memory().await.unwrap());
  let router = api_router(backend);

  let response = router.oneshot(get("/employees")).await.unwrap();
  assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_and_fetch_employee() {
  let router = admin_router().await;

  let response = router
    .clone()
    .oneshot(json_request("POST", "/employees", employee_body("Alice")))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::CREATED);
  let created = read_json(response).await;
  let id = created["employee_id"].as_str().unwrap().to_owned();

  let response = router
    .clone()
    .oneshot(get(&format!("/employees/{id}")))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let fetched = read_json(response).await;
  assert_eq!(fetched["name"], "Alice");
  assert_eq!(fetched["status"], "active");

  let response = router.oneshot(get("/employees")).await.unwrap();
  let listed = read_json(response).await;
  assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn fetching_absent_employee_is_404() {
  let router = admin_router().await;
  let response = router
    .oneshot(get(&format!("/employees/{}", uuid::Uuid::new_v4())))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn removing_absent_employee_is_204() {
  let router = admin_router().await;
  let response = router
    .oneshot(
      Request::builder()
        .method("DELETE")
        .uri(format!("/employees/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn undeserializable_body_is_a_client_error() {
  let router = admin_router().await;
  let response = router
    .oneshot(json_request("POST", "/employees", json!({ "name": "Alice" })))
    .await
    .unwrap();
  assert!(response.status().is_client_error());
}

#[tokio::test]
async fn employee_role_is_read_only() {
  let backend = Arc::new(SqliteBackend::open_in_memory().await.unwrap());
  let admin =
    api_router(backend.clone()).layer(Extension(session(Role::Admin)));
  let employee =
    api_router(backend).layer(Extension(session(Role::Employee)));

  let response = admin
    .oneshot(json_request("POST", "/employees", employee_body("Alice")))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::CREATED);

  // Reads are allowed and see the admin's writes (same tenant).
  let response = employee.clone().oneshot(get("/employees")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(read_json(response).await.as_array().unwrap().len(), 1);

  // Writes are not.
  let response = employee
    .oneshot(json_request("POST", "/employees", employee_body("Mallory")))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn hire_flow_end_to_end() {
  let router = admin_router().await;

  let response = router
    .clone()
    .oneshot(json_request(
      "POST",
      "/applicants",
      json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "position": "Engineer",
        "expected_salary": 600_000.0,
        "stage": "offer",
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::CREATED);
  let applicant = read_json(response).await;
  let id = applicant["applicant_id"].as_str().unwrap().to_owned();

  let response = router
    .clone()
    .oneshot(json_request(
      "POST",
      &format!("/applicants/{id}/stage"),
      json!({ "stage": "hired" }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let advance = read_json(response).await;
  assert_eq!(advance["applicant"]["stage"], "hired");
  let payroll = &advance["hired"]["payroll_entry"];
  assert_eq!(payroll["base_salary"], 600_000.0);
  assert_eq!(payroll["net_pay"], 567_000.0);
  assert_eq!(payroll["status"], "pending");

  let employee_id =
    advance["hired"]["employee"]["employee_id"].as_str().unwrap().to_owned();

  let response = router
    .clone()
    .oneshot(get(&format!("/payroll?employee_id={employee_id}")))
    .await
    .unwrap();
  assert_eq!(read_json(response).await.as_array().unwrap().len(), 1);

  let response = router.oneshot(get("/employees")).await.unwrap();
  assert_eq!(read_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn stage_advance_on_absent_applicant_is_404() {
  let router = admin_router().await;
  let response = router
    .oneshot(json_request(
      "POST",
      &format!("/applicants/{}/stage", uuid::Uuid::new_v4()),
      json!({ "stage": "rejected" }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
