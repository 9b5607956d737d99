//! Recording collaborators for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use storefront_core::{CustomerId, OrderId, ProductId, RepositoryError, RepositoryResult};
use storefront_customers::{Customer, CustomersRepository, NewCustomer};
use storefront_products::{NewProduct, Product, ProductQuantity, ProductsRepository};

use crate::order::{NewOrder, Order, OrdersRepository};

pub fn customer(id: &str) -> Customer {
    Customer {
        id: CustomerId::from(id),
        name: format!("customer {id}"),
        email: format!("{id}@example.com"),
    }
}

pub fn product(id: &str, price: u64, quantity: u64) -> Product {
    Product {
        id: ProductId::from(id),
        name: format!("product {id}"),
        price,
        quantity,
    }
}

#[derive(Default)]
pub struct FakeCustomers {
    pub rows: Vec<Customer>,
    pub fail_reads: bool,
}

impl FakeCustomers {
    pub fn with(rows: Vec<Customer>) -> Self {
        Self {
            rows,
            fail_reads: false,
        }
    }
}

#[async_trait]
impl CustomersRepository for FakeCustomers {
    async fn find_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>> {
        if self.fail_reads {
            return Err(RepositoryError::unavailable("customers offline"));
        }
        Ok(self.rows.iter().find(|c| &c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>> {
        Ok(self.rows.iter().find(|c| c.email == email).cloned())
    }

    async fn create(&self, _customer: NewCustomer) -> RepositoryResult<Customer> {
        Err(RepositoryError::unavailable("read-only fake"))
    }
}

/// Catalog fake. Answers lookups in reverse catalog order so callers cannot
/// rely on positional correspondence with the request.
#[derive(Default)]
pub struct FakeCatalog {
    pub rows: Vec<Product>,
    pub fail_reads: bool,
    pub fail_updates: bool,
    pub updates: Mutex<Vec<Vec<ProductQuantity>>>,
}

impl FakeCatalog {
    pub fn with(rows: Vec<Product>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn updates(&self) -> Vec<Vec<ProductQuantity>> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductsRepository for FakeCatalog {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> RepositoryResult<Vec<Product>> {
        if self.fail_reads {
            return Err(RepositoryError::unavailable("catalog offline"));
        }
        Ok(self
            .rows
            .iter()
            .rev()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Product>> {
        Ok(self.rows.iter().find(|p| p.name == name).cloned())
    }

    async fn create(&self, _product: NewProduct) -> RepositoryResult<Product> {
        Err(RepositoryError::unavailable("read-only fake"))
    }

    async fn update_quantity(&self, items: &[ProductQuantity]) -> RepositoryResult<()> {
        if self.fail_updates {
            return Err(RepositoryError::unavailable("catalog offline"));
        }
        self.updates.lock().unwrap().push(items.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeOrders {
    pub created: Mutex<Vec<Order>>,
    pub deleted: Mutex<Vec<OrderId>>,
    pub fail_creates: bool,
    pub fail_deletes: bool,
}

impl FakeOrders {
    pub fn created(&self) -> Vec<Order> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<OrderId> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrdersRepository for FakeOrders {
    async fn create(&self, order: NewOrder) -> RepositoryResult<Order> {
        if self.fail_creates {
            return Err(RepositoryError::unavailable("orders offline"));
        }
        let mut created = self.created.lock().unwrap();
        let persisted = Order {
            id: OrderId::new(format!("o{}", created.len() + 1)),
            customer: order.customer,
            items: order.items,
            created_at: Utc::now(),
        };
        created.push(persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: &OrderId) -> RepositoryResult<Option<Order>> {
        Ok(self.created().into_iter().find(|o| &o.id == id))
    }

    async fn delete(&self, id: &OrderId) -> RepositoryResult<()> {
        if self.fail_deletes {
            return Err(RepositoryError::unavailable("orders offline"));
        }
        self.deleted.lock().unwrap().push(id.clone());
        Ok(())
    }
}
