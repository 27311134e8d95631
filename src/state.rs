use std::sync::Arc;

use crate::{
    catalog::Catalog,
    store::{InMemoryStore, ShopStore},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<dyn ShopStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, store: Arc<dyn ShopStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
        }
    }

    pub fn in_memory(catalog: Catalog) -> Self {
        Self::new(catalog, Arc::new(InMemoryStore::new()))
    }
}
