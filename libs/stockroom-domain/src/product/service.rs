//! Catalog service - Business logic orchestration
//!
//! The service is the only component that enforces business policy: every
//! write is validated before it reaches the repository. Repository failures
//! propagate to the caller unchanged.

use super::{
    validate_product, Product, ProductDraft, ProductError, ProductId, ProductPatch,
    ValidationPolicy,
};
use crate::ports::ProductRepository;

/// Configuration for the catalog service
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductServiceConfig {
    /// Rules applied to every create, update and patch
    pub validation: ValidationPolicy,
}

/// Service for managing the product catalog
///
/// ## Static Dispatch
///
/// The service is generic over any `ProductRepository` implementation.
/// The compiler will generate specialized versions for each concrete type.
pub struct ProductService<R> {
    repository: R,
    config: ProductServiceConfig,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    /// Create a new ProductService with the given repository and configuration
    pub fn new(repository: R, config: ProductServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Create a new ProductService with default configuration
    pub fn with_repository(repository: R) -> Self {
        Self::new(repository, ProductServiceConfig::default())
    }

    /// List every product in the catalog
    pub fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.get_all()
    }

    /// Fetch a single product
    ///
    /// # Errors
    ///
    /// Returns `ProductError::ProductNotFound` if the id is unknown
    pub fn get_by_id(&self, id: ProductId) -> Result<Product, ProductError> {
        self.repository.get_by_id(id)
    }

    /// Validate a draft and store it as a new product
    ///
    /// # Errors
    ///
    /// - `ProductError::FieldsEmpty` if a required field is empty
    /// - `ProductError::InvalidExpiration` if the expiration is not `DD/MM/YYYY`
    /// - `ProductError::RepeatedCode` if the code value is already in use
    pub fn create(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        validate_product(&draft, &self.config.validation)?;
        self.repository.create(draft)
    }

    /// Validate a draft and fully replace the product stored under `id`
    ///
    /// # Errors
    ///
    /// - `ProductError::FieldsEmpty` / `ProductError::InvalidExpiration` on invalid input
    /// - `ProductError::ProductNotFound` if the id is unknown
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, ProductError> {
        validate_product(&draft, &self.config.validation)?;
        self.repository.update(Product::from_draft(id, draft))
    }

    /// Merge the fields present in `patch` into the stored product
    ///
    /// The merged result goes through the same validation as a full update.
    ///
    /// # Errors
    ///
    /// - `ProductError::ProductNotFound` if the id is unknown
    /// - `ProductError::FieldsEmpty` / `ProductError::InvalidExpiration` if the
    ///   merged product is invalid
    pub fn patch(&self, id: ProductId, patch: ProductPatch) -> Result<Product, ProductError> {
        let current = self.repository.get_by_id(id)?;
        let draft = patch.apply_to(&current);

        self.update(id, draft)
    }

    /// Remove a product from the catalog
    ///
    /// # Errors
    ///
    /// Returns `ProductError::ProductNotFound` if the id is unknown
    pub fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        self.repository.delete(id)
    }

    /// Get the service configuration
    pub fn config(&self) -> &ProductServiceConfig {
        &self.config
    }
}
