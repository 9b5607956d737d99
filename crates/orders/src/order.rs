use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{Entity, OrderId, ProductId, RepositoryResult};
use storefront_customers::Customer;

/// Order line as persisted: the price is the catalog price at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub quantity: u64,
}

impl OrderItem {
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(self.quantity)
    }
}

/// Persisted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Sum of `price * quantity` over all items.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.subtotal()))
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Data needed to persist an order (the store assigns id and timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
}

/// Order storage collaborator.
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    async fn create(&self, order: NewOrder) -> RepositoryResult<Order>;

    async fn find_by_id(&self, id: &OrderId) -> RepositoryResult<Option<Order>>;

    /// Remove a persisted order. Only used to undo an order whose stock
    /// decrement failed.
    async fn delete(&self, id: &OrderId) -> RepositoryResult<()>;
}

#[async_trait]
impl<R> OrdersRepository for std::sync::Arc<R>
where
    R: OrdersRepository + ?Sized,
{
    async fn create(&self, order: NewOrder) -> RepositoryResult<Order> {
        (**self).create(order).await
    }

    async fn find_by_id(&self, id: &OrderId) -> RepositoryResult<Option<Order>> {
        (**self).find_by_id(id).await
    }

    async fn delete(&self, id: &OrderId) -> RepositoryResult<()> {
        (**self).delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::CustomerId;

    fn order(items: Vec<OrderItem>) -> Order {
        Order {
            id: OrderId::from("o1"),
            customer: Customer {
                id: CustomerId::from("c1"),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            items,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn total_sums_line_subtotals() {
        let order = order(vec![
            OrderItem {
                product_id: ProductId::from("p1"),
                price: 10,
                quantity: 2,
            },
            OrderItem {
                product_id: ProductId::from("p2"),
                price: 250,
                quantity: 3,
            },
        ]);

        assert_eq!(order.total(), 770);
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(order(vec![]).total(), 0);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let order = order(vec![OrderItem {
            product_id: ProductId::from("p1"),
            price: u64::MAX,
            quantity: 2,
        }]);

        assert_eq!(order.total(), u64::MAX);
    }
}
