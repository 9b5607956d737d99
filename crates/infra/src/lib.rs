//! Infrastructure layer: storage adapters, configuration, seed data.

pub mod config;
pub mod repositories;
pub mod seed;
pub mod services;


pub use config::StorefrontConfig;
pub use seed::Seed;
pub use services::{InMemoryCreateOrderService, InMemoryStorefront};
