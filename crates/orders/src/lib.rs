//! Orders domain module.
//!
//! Order placement and lookup for the storefront. Services are plain structs
//! that receive their storage collaborators at construction; all IO goes
//! through the repository traits.

pub mod create;
pub mod find;
pub mod order;

#[cfg(test)]
mod test_support;

pub use create::{CreateOrderError, CreateOrderRequest, CreateOrderService, StockWriteMode};
pub use find::{FindOrderError, FindOrderService};
pub use order::{NewOrder, Order, OrderItem, OrdersRepository};
pub use storefront_products::ProductQuantity;
