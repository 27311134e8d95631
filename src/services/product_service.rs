use crate::{
    dto::products::ProductList,
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

pub fn list_products(state: &AppState) -> ProductList {
    ProductList {
        products: state.catalog.products().to_vec(),
    }
}

pub fn get_product(state: &AppState, id: i64) -> AppResult<Product> {
    match state.catalog.find(id) {
        Some(product) => Ok(product.clone()),
        None => Err(AppError::NotFound("Product not found")),
    }
}
