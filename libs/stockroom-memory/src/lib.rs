//! # Stockroom In-Memory Storage
//!
//! Adapter crate implementing the `ProductRepository` port from
//! `stockroom-domain` with a lock-guarded in-memory map, plus the JSON loader
//! used to seed it at startup.

pub mod infrastructure;

pub use infrastructure::{load_products, InMemoryProductRepository, SeedError};
