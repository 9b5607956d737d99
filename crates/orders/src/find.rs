//! Order lookup.

use thiserror::Error;

use storefront_core::{OrderId, RepositoryError};

use crate::order::{Order, OrdersRepository};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FindOrderError {
    #[error("order not found: {0}")]
    NotFound(OrderId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct FindOrderService<O> {
    orders: O,
}

impl<O> FindOrderService<O>
where
    O: OrdersRepository,
{
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    pub async fn execute(&self, id: &OrderId) -> Result<Order, FindOrderError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| FindOrderError::NotFound(id.clone()))
    }
}
