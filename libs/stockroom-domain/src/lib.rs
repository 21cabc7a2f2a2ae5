//! # Stockroom Domain Layer
//!
//! This crate contains the pure business logic and domain models for the
//! Stockroom product catalog. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Product, ProductDraft, ProductPatch)
//! - **Ports**: Trait definitions for external dependencies (ProductRepository)
//! - **Services**: Validation and business logic orchestration
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP, files, etc.).
//! Storage is expressed as a trait (port) implemented by adapter crates.
//!
//! ## Example
//!
//! ```rust
//! use stockroom_domain::product::{ProductDraft, ProductService};
//! use stockroom_domain::ports::ProductRepository;
//!
//! // The service is generic over any ProductRepository implementation
//! fn example<R: ProductRepository>(service: ProductService<R>) {
//!     let draft = ProductDraft {
//!         name: "widget".to_string(),
//!         quantity: 5,
//!         code_value: "W1".to_string(),
//!         is_published: true,
//!         expiration: "01/01/2030".to_string(),
//!         price: 9.99,
//!     };
//!     let product = service.create(draft).unwrap();
//!     println!("Created product: {}", product.id);
//! }
//! ```

pub mod product;
pub mod storage;

pub use storage::ports;

// Re-export commonly used types
pub use ports::ProductRepository;
pub use product::{Product, ProductDraft, ProductError, ProductId, ProductPatch, ProductService};
