use axum::Router;

pub mod items;
pub mod system;

/// Router for all item endpoints.
pub fn router() -> Router {
    Router::new().merge(items::router())
}
