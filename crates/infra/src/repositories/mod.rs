//! In-memory repository adapters (tests/dev).
//!
//! Each adapter keeps its records in a `RwLock<HashMap<..>>`. They are not
//! transactional across repositories.

pub mod customers;
pub mod orders;
pub mod products;

pub use customers::InMemoryCustomersRepository;
pub use orders::InMemoryOrdersRepository;
pub use products::InMemoryProductsRepository;
