use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{CartLine, UserRecord};

use super::{CartChange, CartUpdate, ShopStore, StoreError};

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<UserRecord>>,
    carts: RwLock<HashMap<i64, Vec<CartLine>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShopStore for InMemoryStore {
    async fn insert_user(&self, user: UserRecord) -> Result<(), StoreError> {
        self.users.write().await.push(user);
        Ok(())
    }

    async fn users_named(&self, username: &str) -> Result<Vec<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.username == username)
            .cloned()
            .collect())
    }

    async fn add_cart_line(
        &self,
        user_id: i64,
        line: CartLine,
    ) -> Result<CartUpdate, StoreError> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(user_id).or_default();

        let change = match cart.iter_mut().find(|l| l.product_id == line.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.checked_add(line.quantity).ok_or(
                    StoreError::QuantityOverflow {
                        product_id: line.product_id,
                    },
                )?;
                CartChange::QuantityUpdated
            }
            None => {
                cart.push(line);
                CartChange::Added
            }
        };

        Ok(CartUpdate {
            change,
            lines: cart.clone(),
        })
    }

    async fn cart(&self, user_id: i64) -> Result<Option<Vec<CartLine>>, StoreError> {
        let carts = self.carts.read().await;
        Ok(carts.get(&user_id).cloned())
    }
}
