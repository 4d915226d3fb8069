//! HTTP API application wiring (Axum router + store wiring).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and query mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use itemstore_infra::{InMemoryItemStore, ItemStore};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Store handle shared with every handler.
pub type SharedStore = Arc<dyn ItemStore>;

/// Build the full HTTP router over the given store.
pub fn build_app(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(store)),
        )
}

/// Build the router over a fresh, empty in-memory store (public entrypoint used by `main.rs`).
pub fn build_default_app() -> Router {
    build_app(Arc::new(InMemoryItemStore::new()))
}
