use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use itemstore_items::{Item, ItemFilter, ItemUpdate};

use crate::app::{dto, errors, SharedStore};

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/search", get(search_items))
        .route(
            "/items/:id",
            get(get_item)
                .put(replace_item)
                .patch(patch_item)
                .delete(delete_item),
        )
}

pub async fn list_items(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    (StatusCode::OK, Json(store.list())).into_response()
}

pub async fn get_item(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match store.get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn search_items(
    Extension(store): Extension<SharedStore>,
    query: Result<Query<dto::SearchQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rej) => return errors::query_rejection(rej),
    };

    let filter = ItemFilter::from(query);
    let items = store.search(&filter);
    tracing::debug!(
        matched = items.len(),
        unconstrained = filter.is_unconstrained(),
        "search completed"
    );
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn create_item(
    Extension(store): Extension<SharedStore>,
    body: Result<Json<Item>, JsonRejection>,
) -> axum::response::Response {
    let Json(item) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    match store.create(item) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn replace_item(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
    body: Result<Json<Item>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(item) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    match store.replace(id, item) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn patch_item(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
    body: Result<Json<ItemUpdate>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(update) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    match store.patch(id, update) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match store.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
