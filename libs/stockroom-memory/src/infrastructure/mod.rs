//! Infrastructure adapters for the product catalog

mod json_seed;
mod memory_repository;

pub use json_seed::{load_products, SeedError};
pub use memory_repository::InMemoryProductRepository;
