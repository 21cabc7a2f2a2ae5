//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that storage adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Synchronous port
//!
//! Catalog storage is in-memory and CPU-bound, so the port is a plain
//! synchronous trait. Adapters are shared across request tasks and must
//! guard their own state.

use crate::product::{Product, ProductDraft, ProductError, ProductId};

/// Port for product storage operations
///
/// The repository is the exclusive owner of the id → Product mapping and of
/// the id counter. It enforces storage-level invariants:
/// - ids are assigned by the repository, strictly increasing, never reused
/// - `code_value` is unique among stored products at creation time
/// - get, update and delete of an unknown id fail with `ProductNotFound`
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Return every stored product
    ///
    /// Callers must not depend on the order of the returned products.
    fn get_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Return the product stored under `id`
    ///
    /// # Errors
    ///
    /// Returns `ProductError::ProductNotFound` if no product has this id
    fn get_by_id(&self, id: ProductId) -> Result<Product, ProductError>;

    /// Store a new product and assign it the next id
    ///
    /// The counter only advances when the product is stored.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::RepeatedCode` if a stored product already uses
    /// the draft's `code_value`
    fn create(&self, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Replace the product stored under `product.id`
    ///
    /// This is a full replacement. `code_value` uniqueness is not re-checked.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::ProductNotFound` if no product has this id
    fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove the product stored under `id`
    ///
    /// # Errors
    ///
    /// Returns `ProductError::ProductNotFound` if no product has this id
    fn delete(&self, id: ProductId) -> Result<(), ProductError>;
}
