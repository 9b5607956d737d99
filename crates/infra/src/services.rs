//! In-memory service wiring (dev/test).

use std::sync::Arc;

use storefront_customers::CreateCustomerService;
use storefront_orders::{CreateOrderService, FindOrderService, StockWriteMode};
use storefront_products::CreateProductService;

use crate::config::StorefrontConfig;
use crate::repositories::{
    InMemoryCustomersRepository, InMemoryOrdersRepository, InMemoryProductsRepository,
};
use crate::seed::Seed;

pub type InMemoryCreateOrderService = CreateOrderService<
    Arc<InMemoryCustomersRepository>,
    Arc<InMemoryProductsRepository>,
    Arc<InMemoryOrdersRepository>,
>;

/// Shared in-memory stores plus constructors for the services using them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorefront {
    pub customers: Arc<InMemoryCustomersRepository>,
    pub products: Arc<InMemoryProductsRepository>,
    pub orders: Arc<InMemoryOrdersRepository>,
    stock_write_mode: StockWriteMode,
}

impl InMemoryStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire stores per `config`, loading the seed file if one is configured.
    pub fn from_config(config: &StorefrontConfig) -> anyhow::Result<Self> {
        let storefront = Self {
            stock_write_mode: config.stock_write_mode,
            ..Self::default()
        };

        if let Some(path) = &config.seed_path {
            storefront.seed(&Seed::load(path)?);
        }
        Ok(storefront)
    }

    pub fn seed(&self, seed: &Seed) {
        seed.apply(&self.customers, &self.products);
    }

    pub fn create_order_service(&self) -> InMemoryCreateOrderService {
        CreateOrderService::new(
            self.customers.clone(),
            self.products.clone(),
            self.orders.clone(),
        )
        .with_stock_write_mode(self.stock_write_mode)
    }

    pub fn find_order_service(&self) -> FindOrderService<Arc<InMemoryOrdersRepository>> {
        FindOrderService::new(self.orders.clone())
    }

    pub fn create_customer_service(
        &self,
    ) -> CreateCustomerService<Arc<InMemoryCustomersRepository>> {
        CreateCustomerService::new(self.customers.clone())
    }

    pub fn create_product_service(
        &self,
    ) -> CreateProductService<Arc<InMemoryProductsRepository>> {
        CreateProductService::new(self.products.clone())
    }
}
