//! Stockroom API - Product Catalog Service
//!
//! HTTP adapter over the Stockroom domain: axum routes, DTOs, error mapping,
//! middleware and configuration. The binary in `main.rs` wires these to an
//! in-memory repository seeded from a JSON file.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use stockroom_domain::product::ProductService;
use stockroom_memory::InMemoryProductRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<InMemoryProductRepository>>,
    /// Token required on write endpoints; `None` leaves them open
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(service: ProductService<InMemoryProductRepository>, api_token: Option<String>) -> Self {
        Self {
            product_service: Arc::new(service),
            api_token: api_token.map(Arc::from),
        }
    }
}
