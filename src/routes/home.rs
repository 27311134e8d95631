use axum::Json;

use crate::response::MessageResponse;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse),
    ),
    tag = "Home"
)]
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to our E-commerce Website"))
}
