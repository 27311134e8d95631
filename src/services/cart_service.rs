use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, AddToCartResponse, CartResponse},
    error::AppResult,
    models::CartLine,
    state::AppState,
    store::CartChange,
};

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<AddToCartResponse> {
    let AddToCartRequest { user_id, item } = payload;

    if !state.catalog.contains(item.product_id) {
        tracing::debug!(user_id, product_id = item.product_id, "cart add for unknown product");
        return Ok(AddToCartResponse::Rejected {
            error: "Invalid product ID. Product not found!".to_string(),
        });
    }

    let update = state
        .store
        .add_cart_line(
            user_id,
            CartLine {
                product_id: item.product_id,
                quantity: item.quantity,
            },
        )
        .await?;

    let message = match update.change {
        CartChange::Added => "Product added successfully",
        CartChange::QuantityUpdated => "Product quantity updated",
    };

    log_audit(
        Some(user_id),
        "cart_update",
        Some("carts"),
        Some(serde_json::json!({ "product_id": item.product_id, "quantity": item.quantity })),
    );

    Ok(AddToCartResponse::Updated {
        message: message.to_string(),
        cart: update.lines,
    })
}

pub async fn get_cart(state: &AppState, user_id: i64) -> AppResult<CartResponse> {
    let cart = match state.store.cart(user_id).await? {
        Some(lines) if !lines.is_empty() => CartResponse::Items {
            user_id,
            cart: lines,
        },
        _ => CartResponse::Empty {
            message: "Cart is empty".to_string(),
            cart: Vec::new(),
        },
    };
    Ok(cart)
}
