use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::products::ProductList,
    error::AppResult,
    extract::AppPath,
    models::Product,
    response::ErrorDetail,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{product_id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "List products", body = ProductList)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> Json<ProductList> {
    Json(product_service::list_products(&state))
}

#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = ErrorDetail),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    AppPath(product_id): AppPath<i64>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state, product_id)?;
    Ok(Json(product))
}
