//! Customers domain module.
//!
//! Customer records, the storage collaborator trait and customer registration.

pub mod create;
pub mod customer;

pub use create::{CreateCustomerError, CreateCustomerService};
pub use customer::{Customer, CustomersRepository, NewCustomer};
