//! Product domain module
//!
//! This module contains the catalog entities, the validation rules and the
//! service that orchestrates them.

mod entity;
mod error;
mod ids;
mod service;
mod validation;

pub use entity::{Product, ProductDraft, ProductPatch};
pub use error::{ProductError, Result};
pub use ids::ProductId;
pub use service::{ProductService, ProductServiceConfig};
pub use validation::{parse_expiration, validate_product, ValidationPolicy, EXPIRATION_FORMAT};
