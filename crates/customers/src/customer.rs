use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, Entity, RepositoryResult};

/// Customer record.
///
/// Order placement only cares that a customer exists; name and email are used
/// by registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Data needed to persist a new customer (the store assigns the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

/// Customer storage collaborator.
#[async_trait]
pub trait CustomersRepository: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>>;

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>>;

    async fn create(&self, customer: NewCustomer) -> RepositoryResult<Customer>;
}

#[async_trait]
impl<R> CustomersRepository for std::sync::Arc<R>
where
    R: CustomersRepository + ?Sized,
{
    async fn find_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>> {
        (**self).find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>> {
        (**self).find_by_email(email).await
    }

    async fn create(&self, customer: NewCustomer) -> RepositoryResult<Customer> {
        (**self).create(customer).await
    }
}
