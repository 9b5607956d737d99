//! Customer registration.

use thiserror::Error;

use storefront_core::{DomainError, RepositoryError};

use crate::customer::{Customer, CustomersRepository, NewCustomer};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateCustomerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("email address already used")]
    EmailInUse,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Registers customers, keeping email addresses unique.
pub struct CreateCustomerService<C> {
    customers: C,
}

impl<C> CreateCustomerService<C>
where
    C: CustomersRepository,
{
    pub fn new(customers: C) -> Self {
        Self { customers }
    }

    pub async fn execute(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Customer, CreateCustomerError> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty").into());
        }
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email must be an address").into());
        }

        if self.customers.find_by_email(email).await?.is_some() {
            tracing::warn!("rejected customer registration: email {} already used", email);
            return Err(CreateCustomerError::EmailInUse);
        }

        let customer = self
            .customers
            .create(NewCustomer {
                name: name.to_string(),
                email: email.to_string(),
            })
            .await?;

        tracing::info!(customer_id = %customer.id, "customer registered");
        Ok(customer)
    }
}
