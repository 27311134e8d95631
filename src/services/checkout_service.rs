use rust_decimal::Decimal;

use crate::{
    audit::log_audit,
    catalog::Catalog,
    dto::checkout::{CheckoutResponse, CheckoutSummary},
    error::{AppError, AppResult},
    models::{CartLine, CheckoutLine},
    state::AppState,
};

/// Prices `lines` against `catalog`. Lines whose product is not in the
/// catalog are skipped.
pub fn summarize(
    catalog: &Catalog,
    user_id: i64,
    lines: &[CartLine],
) -> AppResult<CheckoutSummary> {
    let mut items = Vec::with_capacity(lines.len());
    let mut total = Decimal::ZERO;

    for line in lines {
        let Some(product) = catalog.find(line.product_id) else {
            continue;
        };

        let subtotal = product
            .price
            .checked_mul(Decimal::from(line.quantity))
            .ok_or_else(|| total_out_of_range(line.product_id))?;
        total = total
            .checked_add(subtotal)
            .ok_or_else(|| total_out_of_range(line.product_id))?;

        items.push(CheckoutLine {
            product_id: line.product_id,
            name: product.name.clone(),
            price: product.price,
            quantity: line.quantity,
            subtotal,
        });
    }

    Ok(CheckoutSummary {
        user_id,
        items,
        total,
    })
}

pub async fn checkout(state: &AppState, user_id: i64) -> AppResult<CheckoutResponse> {
    let lines = match state.store.cart(user_id).await? {
        Some(lines) if !lines.is_empty() => lines,
        _ => {
            return Ok(CheckoutResponse::Empty {
                message: "Cart is empty".to_string(),
                order_summary: Vec::new(),
            });
        }
    };

    let summary = summarize(&state.catalog, user_id, &lines)?;

    log_audit(
        Some(user_id),
        "checkout",
        Some("carts"),
        Some(serde_json::json!({ "lines": summary.items.len(), "total": summary.total.to_string() })),
    );

    Ok(CheckoutResponse::Summary(summary))
}

fn total_out_of_range(product_id: i64) -> AppError {
    AppError::BadRequest(format!("checkout total for product {product_id} is out of range"))
}
