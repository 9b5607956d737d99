//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the storefront
//! modules: identifiers, the entity trait and the error model (no IO).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, index_by_id};
pub use error::{DomainError, DomainResult, RepositoryError, RepositoryResult};
pub use id::{CustomerId, OrderId, ProductId};
