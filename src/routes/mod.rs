use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{response::ErrorDetail, state::AppState};

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod doc;
pub mod health;
pub mod home;
pub mod products;

// Build the shop routes without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(products::router())
        .merge(auth::router())
        .merge(cart::router())
        .merge(checkout::router())
}

/// Full application router with state bound. Middleware layers are added by
/// the binary.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorDetail>) {
    tracing::debug!(path = %uri.path(), "no route matched");
    let body = ErrorDetail {
        detail: "Not Found".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
