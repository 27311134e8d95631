use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::fs;

use crate::models::Product;

/// Read-only product list, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                bail!("duplicate product id {} in catalog", product.id);
            }
        }
        Ok(Self { products })
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        let products = [
            (1, "Laptop", 1200, "14-inch ultrabook, 16 GB RAM"),
            (2, "Smartphone", 800, "6.1-inch display, 128 GB storage"),
            (3, "Headphones", 150, "Wireless noise-cancelling headphones"),
            (4, "Keyboard", 70, "Mechanical keyboard with brown switches"),
            (5, "Mouse", 40, "Ergonomic wireless mouse"),
            (6, "Monitor", 300, "27-inch 1440p IPS monitor"),
        ]
        .into_iter()
        .map(|(id, name, price, description)| Product {
            id,
            name: name.to_string(),
            price: Decimal::from(price),
            description: Some(description.to_string()),
        })
        .collect();

        Self { products }
    }

    /// Parses a catalog from either a bare JSON array of products or an
    /// object of the form `{"products": [...]}`.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw).context("invalid catalog JSON")?;
        let products = match file {
            CatalogFile::Bare(products) => products,
            CatalogFile::Wrapped { products } => products,
        };
        Self::new(products)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to load catalog {}", path.display()))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
