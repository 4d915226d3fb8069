use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use itemstore_core::{DomainError, ItemId};

/// Map a domain failure onto its HTTP status.
///
/// A duplicate id on create is reported as 400, not 409.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let detail = err.to_string();
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", detail),
        DomainError::Conflict(_) => json_error(StatusCode::BAD_REQUEST, "conflict", detail),
        DomainError::BadRequest(_) => json_error(StatusCode::BAD_REQUEST, "bad_request", detail),
        DomainError::Validation(_) => json_error(StatusCode::BAD_REQUEST, "invalid_id", detail),
    }
}

pub fn json_rejection(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(status = rejection.status().as_u16(), "rejected request body");
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn parse_item_id(s: &str) -> Result<ItemId, axum::response::Response> {
    s.parse().map_err(domain_error_to_response)
}

pub fn query_rejection(rejection: QueryRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_query", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    detail: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "detail": detail.into(),
        })),
    )
        .into_response()
}
