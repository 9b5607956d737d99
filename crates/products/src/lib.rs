//! Products domain module.
//!
//! The product catalog as seen by the storefront: price and available stock,
//! the catalog storage collaborator and product registration.

pub mod create;
pub mod product;

pub use create::{CreateProductError, CreateProductService};
pub use product::{NewProduct, Product, ProductQuantity, ProductsRepository};
