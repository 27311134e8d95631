use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::checkout::CheckoutResponse,
    error::AppResult,
    extract::AppPath,
    response::ErrorDetail,
    services::checkout_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/checkout/{user_id}", post(checkout))
}

#[utoipa::path(
    post,
    path = "/checkout/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Priced summary of the user's cart", body = CheckoutResponse),
        (status = 400, description = "Total out of range", body = ErrorDetail),
    ),
    tag = "Checkout"
)]
pub async fn checkout(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<Json<CheckoutResponse>> {
    let resp = checkout_service::checkout(&state, user_id).await?;
    Ok(Json(resp))
}
