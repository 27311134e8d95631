use async_trait::async_trait;
use thiserror::Error;

use crate::{
    error::AppError,
    models::{CartLine, UserRecord},
};

pub mod memory;

pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("quantity for product {product_id} is out of range")]
    QuantityOverflow { product_id: i64 },
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::QuantityOverflow { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added,
    QuantityUpdated,
}

/// Result of an insert-or-increment on a user's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartUpdate {
    pub change: CartChange,
    pub lines: Vec<CartLine>,
}

/// Mutable shop state: registered users and per-user carts.
#[async_trait]
pub trait ShopStore: Send + Sync {
    async fn insert_user(&self, user: UserRecord) -> Result<(), StoreError>;

    /// Users with exactly this username, in registration order.
    async fn users_named(&self, username: &str) -> Result<Vec<UserRecord>, StoreError>;

    /// Creates the cart if needed, then increments the line for
    /// `line.product_id` or appends it.
    async fn add_cart_line(&self, user_id: i64, line: CartLine)
        -> Result<CartUpdate, StoreError>;

    async fn cart(&self, user_id: i64) -> Result<Option<Vec<CartLine>>, StoreError>;
}
