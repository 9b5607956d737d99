use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use storefront_core::{CustomerId, RepositoryError, RepositoryResult};
use storefront_customers::{Customer, CustomersRepository, NewCustomer};

/// In-memory customer store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCustomersRepository {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a customer under its own id.
    pub fn insert(&self, customer: Customer) {
        match self.inner.write() {
            Ok(mut map) => {
                map.insert(customer.id.clone(), customer);
            }
            Err(_) => tracing::warn!(id = %customer.id, "customer dropped: lock poisoned"),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CustomersRepository for InMemoryCustomersRepository {
    async fn find_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;
        Ok(map.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;
        Ok(map.values().find(|c| c.email.eq_ignore_ascii_case(email)).cloned())
    }

    async fn create(&self, customer: NewCustomer) -> RepositoryResult<Customer> {
        let created = Customer {
            id: CustomerId::generate(),
            name: customer.name,
            email: customer.email,
        };
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;
        map.insert(created.id.clone(), created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn created_customers_are_found_by_id_and_email() {
        let repo = InMemoryCustomersRepository::new();

        let created = repo
            .create(NewCustomer {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(
            repo.find_by_email("ADA@example.com").await.unwrap(),
            Some(created)
        );
        assert_eq!(repo.find_by_id(&CustomerId::from("nope")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn insert_after_poisoning_drops_the_record() {
        let repo = std::sync::Arc::new(InMemoryCustomersRepository::new());
        let poisoner = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the customer lock");
        })
        .join();

        repo.insert(Customer {
            id: CustomerId::from("c1"),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        });

        assert!(repo.is_empty());
        assert_eq!(
            repo.find_by_id(&CustomerId::from("c1")).await,
            Err(RepositoryError::unavailable("lock poisoned"))
        );
    }
}
