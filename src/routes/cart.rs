use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::cart::{AddToCartRequest, AddToCartResponse, CartResponse},
    error::AppResult,
    extract::{AppJson, AppPath},
    response::ErrorDetail,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cart", post(add_to_cart))
        .route("/cart/{user_id}", get(get_cart))
}

#[utoipa::path(
    post,
    path = "/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add or increment a cart line; unknown products carry an `error` field", body = AddToCartResponse),
        (status = 400, description = "Quantity out of range", body = ErrorDetail),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> AppResult<Json<AddToCartResponse>> {
    let resp = cart_service::add_to_cart(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/cart/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Cart lines for the user", body = CartResponse)
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<Json<CartResponse>> {
    let resp = cart_service::get_cart(&state, user_id).await?;
    Ok(Json(resp))
}
