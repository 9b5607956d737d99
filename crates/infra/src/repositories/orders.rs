use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use storefront_core::{OrderId, RepositoryError, RepositoryResult};
use storefront_orders::{NewOrder, Order, OrdersRepository};

/// In-memory order store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrdersRepository {
    inner: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrdersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrdersRepository for InMemoryOrdersRepository {
    async fn create(&self, order: NewOrder) -> RepositoryResult<Order> {
        let persisted = Order {
            id: OrderId::generate(),
            customer: order.customer,
            items: order.items,
            created_at: Utc::now(),
        };
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;
        map.insert(persisted.id.clone(), persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: &OrderId) -> RepositoryResult<Option<Order>> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;
        Ok(map.get(id).cloned())
    }

    async fn delete(&self, id: &OrderId) -> RepositoryResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;
        map.remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(format!("order {id}")))
    }
}
