//! JSON seed data for the in-memory stores.
//!
//! ```json
//! {
//!   "customers": [{ "id": "c1", "name": "Ada", "email": "ada@example.com" }],
//!   "products": [{ "id": "p1", "name": "Widget", "price": 10, "quantity": 5 }]
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use storefront_customers::Customer;
use storefront_products::Product;

use crate::repositories::{InMemoryCustomersRepository, InMemoryProductsRepository};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Seed {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid seed document")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Insert every record, replacing existing ones with the same id.
    pub fn apply(
        &self,
        customers: &InMemoryCustomersRepository,
        products: &InMemoryProductsRepository,
    ) {
        for customer in &self.customers {
            customers.insert(customer.clone());
        }
        for product in &self.products {
            products.insert(product.clone());
        }
        tracing::info!(
            customers = self.customers.len(),
            products = self.products.len(),
            "seed data loaded"
        );
    }
}
