use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::lax, models::CartLine};

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct CartItemRequest {
    #[serde(deserialize_with = "lax::int")]
    pub product_id: i64,
    #[serde(deserialize_with = "lax::int")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    #[serde(deserialize_with = "lax::int")]
    pub user_id: i64,
    pub item: CartItemRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AddToCartResponse {
    Rejected { error: String },
    Updated { message: String, cart: Vec<CartLine> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CartResponse {
    Empty { message: String, cart: Vec<CartLine> },
    Items { user_id: i64, cart: Vec<CartLine> },
}
