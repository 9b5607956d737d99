use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId, RepositoryResult};

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    /// Units currently in stock.
    pub quantity: u64,
}

impl Product {
    /// Stock left after removing `units`, or `None` if that would go negative.
    pub fn remaining_after(&self, units: u64) -> Option<u64> {
        self.quantity.checked_sub(units)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A product id paired with a unit count.
///
/// Used both for the products requested in an order and for the stock
/// decrement issued once the order is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub id: ProductId,
    pub quantity: u64,
}

impl ProductQuantity {
    pub fn new(id: impl Into<ProductId>, quantity: u64) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// Data needed to persist a new product (the store assigns the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: u64,
    pub quantity: u64,
}

/// Catalog storage collaborator.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Load every product whose id appears in `ids`.
    ///
    /// Returns at most one entry per distinct existing id. Unknown ids are
    /// skipped, so callers detect them by comparing counts.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> RepositoryResult<Vec<Product>>;

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Product>>;

    async fn create(&self, product: NewProduct) -> RepositoryResult<Product>;

    /// Decrement stock of each listed product by its quantity.
    async fn update_quantity(&self, items: &[ProductQuantity]) -> RepositoryResult<()>;
}

#[async_trait]
impl<R> ProductsRepository for std::sync::Arc<R>
where
    R: ProductsRepository + ?Sized,
{
    async fn find_all_by_id(&self, ids: &[ProductId]) -> RepositoryResult<Vec<Product>> {
        (**self).find_all_by_id(ids).await
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Product>> {
        (**self).find_by_name(name).await
    }

    async fn create(&self, product: NewProduct) -> RepositoryResult<Product> {
        (**self).create(product).await
    }

    async fn update_quantity(&self, items: &[ProductQuantity]) -> RepositoryResult<()> {
        (**self).update_quantity(items).await
    }
}
