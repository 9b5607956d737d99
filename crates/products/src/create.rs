//! Product registration.

use thiserror::Error;

use storefront_core::{DomainError, RepositoryError};

use crate::product::{NewProduct, Product, ProductsRepository};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateProductError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("product already exists")]
    AlreadyExists,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Adds products to the catalog, keeping names unique.
pub struct CreateProductService<P> {
    products: P,
}

impl<P> CreateProductService<P>
where
    P: ProductsRepository,
{
    pub fn new(products: P) -> Self {
        Self { products }
    }

    pub async fn execute(
        &self,
        name: &str,
        price: u64,
        quantity: u64,
    ) -> Result<Product, CreateProductError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty").into());
        }

        // Name uniqueness is checked here, not enforced by the store.
        if self.products.find_by_name(name).await?.is_some() {
            tracing::warn!("rejected product registration: {} already exists", name);
            return Err(CreateProductError::AlreadyExists);
        }

        let product = self
            .products
            .create(NewProduct {
                name: name.to_string(),
                price,
                quantity,
            })
            .await?;

        tracing::info!(product_id = %product.id, price, quantity, "product registered");
        Ok(product)
    }
}
