//! Order placement.
//!
//! `CreateOrderService` validates the customer and the requested products,
//! snapshots catalog prices into the order, persists it and then decrements
//! stock. Steps run strictly in sequence; nothing is written until every
//! validation has passed.
//!
//! ## Known limitations
//!
//! - Persisting the order and decrementing stock are two independent writes.
//!   In `StockWriteMode::Sequential` a failed decrement leaves the order in
//!   place with stock untouched. `StockWriteMode::Compensating` deletes the
//!   order instead, but that is a best-effort undo, not a transaction.
//! - Stock is checked against a read taken before the writes. Concurrent
//!   orders for the same product can both pass the check and oversell.
//! - A request is insufficient when `requested >= available`, so the last
//!   unit of a product can never be ordered.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::{CustomerId, DomainError, ProductId, RepositoryError, index_by_id};
use storefront_customers::CustomersRepository;
use storefront_products::{ProductQuantity, ProductsRepository};

use crate::order::{NewOrder, Order, OrderItem, OrdersRepository};

/// Order placement failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateOrderError {
    #[error("invalid customer: {0}")]
    InvalidCustomer(CustomerId),

    #[error("invalid products: requested {requested}, found {found}")]
    InvalidProducts { requested: usize, found: usize },

    #[error("products with insufficient quantities: {product_ids:?}")]
    InsufficientQuantity { product_ids: Vec<ProductId> },

    /// Collaborator failure, passed through unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// What happens to a persisted order when the stock decrement fails.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockWriteMode {
    /// Keep the order; stock stays un-decremented.
    #[default]
    Sequential,
    /// Delete the order again before reporting the failure.
    Compensating,
}

impl FromStr for StockWriteMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "compensating" => Ok(Self::Compensating),
            other => Err(DomainError::validation(format!(
                "stock write mode must be sequential or compensating, got {other:?}"
            ))),
        }
    }
}

/// Input of an order placement, as received from the outer request layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub products: Vec<ProductQuantity>,
}

/// `requested >= available` counts as insufficient.
fn is_insufficient(requested: u64, available: u64) -> bool {
    requested >= available
}

pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
    stock_write_mode: StockWriteMode,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomersRepository,
    P: ProductsRepository,
    O: OrdersRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
            stock_write_mode: StockWriteMode::default(),
        }
    }

    pub fn with_stock_write_mode(mut self, mode: StockWriteMode) -> Self {
        self.stock_write_mode = mode;
        self
    }

    pub fn stock_write_mode(&self) -> StockWriteMode {
        self.stock_write_mode
    }

    /// Place an order for `customer_id` covering `requested`.
    ///
    /// Returns the persisted order. Validation failures write nothing;
    /// repository failures are returned as `CreateOrderError::Repository`.
    pub async fn execute(
        &self,
        customer_id: &CustomerId,
        requested: &[ProductQuantity],
    ) -> Result<Order, CreateOrderError> {
        let Some(customer) = self.customers.find_by_id(customer_id).await? else {
            tracing::warn!(customer_id = %customer_id, "order rejected: unknown customer");
            return Err(CreateOrderError::InvalidCustomer(customer_id.clone()));
        };

        let ids: Vec<ProductId> = requested.iter().map(|item| item.id.clone()).collect();
        let found = self.products.find_all_by_id(&ids).await?;
        let catalog = index_by_id(&found);

        // The count check also rejects duplicated ids in the request.
        if found.len() != requested.len() || ids.iter().any(|id| !catalog.contains_key(id)) {
            tracing::warn!(
                customer_id = %customer_id,
                requested = requested.len(),
                found = found.len(),
                "order rejected: unknown products"
            );
            return Err(CreateOrderError::InvalidProducts {
                requested: requested.len(),
                found: found.len(),
            });
        }

        let short: Vec<ProductId> = requested
            .iter()
            .filter(|item| {
                catalog
                    .get(&item.id)
                    .is_some_and(|product| is_insufficient(item.quantity, product.quantity))
            })
            .map(|item| item.id.clone())
            .collect();

        if !short.is_empty() {
            tracing::warn!(
                customer_id = %customer_id,
                "order rejected: insufficient stock for {:?}",
                short
            );
            return Err(CreateOrderError::InsufficientQuantity { product_ids: short });
        }

        let items = requested
            .iter()
            .map(|item| OrderItem {
                product_id: item.id.clone(),
                price: catalog.get(&item.id).map(|p| p.price).unwrap_or(0),
                quantity: item.quantity,
            })
            .collect();

        let order = self.orders.create(NewOrder { customer, items }).await?;
        tracing::debug!(order_id = %order.id, "order persisted, decrementing stock");

        if let Err(err) = self.products.update_quantity(requested).await {
            tracing::warn!(order_id = %order.id, "stock decrement failed: {err}");
            if self.stock_write_mode == StockWriteMode::Compensating {
                self.discard(&order).await;
            }
            return Err(err.into());
        }

        tracing::info!(
            order_id = %order.id,
            customer_id = %customer_id,
            items = order.items.len(),
            total = order.total(),
            "order created"
        );
        Ok(order)
    }

    /// Convenience wrapper around [`execute`](Self::execute).
    pub async fn execute_request(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<Order, CreateOrderError> {
        self.execute(&request.customer_id, &request.products).await
    }

    async fn discard(&self, order: &Order) {
        match self.orders.delete(&order.id).await {
            Ok(()) => tracing::info!(order_id = %order.id, "order discarded after stock failure"),
            Err(err) => tracing::error!(
                order_id = %order.id,
                "failed to discard order after stock failure: {err}"
            ),
        }
    }
}
