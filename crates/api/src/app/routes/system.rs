use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::app::errors;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Item API!" }))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", "Endpoint not found")
}
