//! In-Memory Product Repository Implementation
//!
//! This module implements the `ProductRepository` trait over a lock-guarded
//! map. The map and the id counter form a single unit of shared state: every
//! operation holds the lock for its whole duration.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_domain::{
    ports::ProductRepository,
    product::{Product, ProductDraft, ProductError, ProductId, Result},
};
use tracing::{debug, error, info, instrument, warn};

/// State guarded by the repository lock
#[derive(Debug, Default)]
struct ProductTable {
    products: BTreeMap<ProductId, Product>,
    /// Highest id ever assigned or seeded; 0 when nothing has been stored
    last_id: u64,
}

/// In-memory implementation of the ProductRepository port
///
/// Products are kept in a `BTreeMap`, so `get_all` returns them in ascending
/// id order. Readers share the lock; writers hold it exclusively.
///
/// ## Identity
///
/// New products get `last_id + 1`. `last_id` starts at the highest seeded id
/// and never goes down, so deleted ids are never handed out again.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    table: RwLock<ProductTable>,
}

impl InMemoryProductRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing products
    ///
    /// Seed products keep their ids. When two seed entries share an id the
    /// later one wins. Entries with id 0 are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stockroom_domain::ports::ProductRepository;
    /// use stockroom_memory::infrastructure::InMemoryProductRepository;
    ///
    /// let repo = InMemoryProductRepository::with_products(Vec::new());
    /// assert!(repo.get_all().unwrap().is_empty());
    /// ```
    pub fn with_products(seed: impl IntoIterator<Item = Product>) -> Self {
        let mut table = ProductTable::default();

        for product in seed {
            if product.id.get() == 0 {
                warn!(code_value = %product.code_value, "Skipping seed product without a positive id");
                continue;
            }
            table.last_id = table.last_id.max(product.id.get());
            table.products.insert(product.id, product);
        }

        info!(
            products = table.products.len(),
            last_id = table.last_id,
            "Initializing InMemoryProductRepository"
        );

        Self {
            table: RwLock::new(table),
        }
    }

    #[cfg(test)]
    fn len(&self) -> Result<usize> {
        Ok(self.read()?.products.len())
    }

    #[cfg(test)]
    fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.products.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ProductTable>> {
        self.table.read().map_err(|_| {
            error!("Product table lock poisoned");
            ProductError::internal("product table lock poisoned")
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ProductTable>> {
        self.table.write().map_err(|_| {
            error!("Product table lock poisoned");
            ProductError::internal("product table lock poisoned")
        })
    }
}

impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    fn get_all(&self) -> Result<Vec<Product>> {
        let table = self.read()?;
        let products: Vec<Product> = table.products.values().cloned().collect();

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    fn get_by_id(&self, id: ProductId) -> Result<Product> {
        let table = self.read()?;

        table.products.get(&id).cloned().ok_or_else(|| {
            debug!("Product not found");
            ProductError::ProductNotFound(id)
        })
    }

    #[instrument(skip(self, draft), fields(code_value = %draft.code_value))]
    fn create(&self, draft: ProductDraft) -> Result<Product> {
        let mut table = self.write()?;

        if table
            .products
            .values()
            .any(|p| p.code_value == draft.code_value)
        {
            warn!("Rejected product with repeated code value");
            return Err(ProductError::repeated_code(draft.code_value));
        }

        let id = ProductId::new(table.last_id).next().ok_or_else(|| {
            error!(last_id = table.last_id, "Product id space exhausted");
            ProductError::internal("product id space exhausted")
        })?;
        let product = Product::from_draft(id, draft);

        table.last_id = id.get();
        table.products.insert(id, product.clone());

        info!(product_id = %id, "Stored new product");
        Ok(product)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    fn update(&self, product: Product) -> Result<Product> {
        let mut table = self.write()?;

        match table.products.get_mut(&product.id) {
            Some(slot) => {
                *slot = product.clone();
                info!("Replaced product");
                Ok(product)
            }
            None => {
                debug!("Product not found");
                Err(ProductError::ProductNotFound(product.id))
            }
        }
    }

    #[instrument(skip(self), fields(product_id = %id))]
    fn delete(&self, id: ProductId) -> Result<()> {
        let mut table = self.write()?;

        match table.products.remove(&id) {
            Some(_) => {
                info!("Deleted product");
                Ok(())
            }
            None => {
                debug!("Product not found");
                Err(ProductError::ProductNotFound(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(code: &str) -> ProductDraft {
        ProductDraft {
            name: format!("product {code}"),
            quantity: 10,
            code_value: code.to_string(),
            is_published: true,
            expiration: "14/05/2030".to_string(),
            price: 100.0,
        }
    }

    fn seeded(id: u64, code: &str) -> Product {
        Product::from_draft(ProductId::new(id), draft(code))
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(draft("A")).unwrap();
        let second = repo.create(draft("B")).unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
        assert_eq!(repo.len().unwrap(), 2);
    }

    #[test]
    fn test_repeated_code_leaves_store_unchanged() {
        let repo = InMemoryProductRepository::new();
        repo.create(draft("A")).unwrap();

        let before = repo.get_all().unwrap();
        let err = repo.create(draft("A")).unwrap_err();

        assert_eq!(err, ProductError::repeated_code("A"));
        assert_eq!(repo.get_all().unwrap(), before);

        // The failed create did not consume an id
        assert_eq!(repo.create(draft("B")).unwrap().id, ProductId::new(2));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(draft("A")).unwrap();
        let second = repo.create(draft("B")).unwrap();

        repo.delete(second.id).unwrap();
        repo.delete(first.id).unwrap();

        let third = repo.create(draft("C")).unwrap();
        assert_eq!(third.id, ProductId::new(3));
    }

    #[test]
    fn test_seed_sets_counter_to_max_id() {
        let repo = InMemoryProductRepository::with_products(vec![seeded(4, "X"), seeded(9, "Y")]);

        let created = repo.create(draft("Z")).unwrap();

        assert_eq!(created.id, ProductId::new(10));
        assert_eq!(repo.len().unwrap(), 3);
    }

    #[test]
    fn test_exhausted_id_space_fails_without_poisoning() {
        let repo = InMemoryProductRepository::with_products(vec![seeded(u64::MAX, "MAX")]);

        assert_eq!(
            repo.create(draft("A")),
            Err(ProductError::internal("product id space exhausted"))
        );

        let listed = repo.get_all().unwrap();
        assert_eq!(listed, vec![seeded(u64::MAX, "MAX")]);
        assert_eq!(repo.get_by_id(ProductId::new(u64::MAX)).unwrap().code_value, "MAX");
    }

    #[test]
    fn test_seed_skips_zero_id() {
        let repo = InMemoryProductRepository::with_products(vec![seeded(0, "Z"), seeded(2, "B")]);

        let ids: Vec<u64> = repo.get_all().unwrap().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(repo.create(draft("Z")).unwrap().id, ProductId::new(3));
    }

    #[test]
    fn test_seed_duplicate_ids_last_wins() {
        let repo = InMemoryProductRepository::with_products(vec![seeded(1, "first"), seeded(1, "second")]);

        assert_eq!(repo.len().unwrap(), 1);
        assert_eq!(repo.get_by_id(ProductId::new(1)).unwrap().code_value, "second");
    }

    #[test]
    fn test_seeded_code_values_are_enforced() {
        let repo = InMemoryProductRepository::with_products(vec![seeded(1, "A")]);

        assert_eq!(repo.create(draft("A")), Err(ProductError::repeated_code("A")));
    }

    #[test]
    fn test_get_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::with_products(vec![seeded(3, "C"), seeded(1, "A"), seeded(2, "B")]);

        let ids: Vec<u64> = repo.get_all().unwrap().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_found_symmetry() {
        let repo = InMemoryProductRepository::new();
        let missing = ProductId::new(42);
        let expected = ProductError::ProductNotFound(missing);

        assert_eq!(repo.get_by_id(missing), Err(expected.clone()));
        assert_eq!(repo.update(Product::from_draft(missing, draft("A"))), Err(expected.clone()));
        assert_eq!(repo.delete(missing), Err(expected));
        assert!(repo.is_empty().unwrap());
    }

    #[test]
    fn test_update_is_full_replace() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(draft("A")).unwrap();

        let replacement = Product {
            name: "renamed".to_string(),
            quantity: 1,
            is_published: false,
            ..created.clone()
        };
        repo.update(replacement.clone()).unwrap();

        assert_eq!(repo.get_by_id(created.id).unwrap(), replacement);
    }

    // Uniqueness is only enforced on create; an update may introduce a
    // duplicate code value.
    #[test]
    fn test_update_does_not_recheck_code_value() {
        let repo = InMemoryProductRepository::new();
        repo.create(draft("A")).unwrap();
        let second = repo.create(draft("B")).unwrap();

        let clash = Product {
            code_value: "A".to_string(),
            ..second
        };

        assert!(repo.update(clash).is_ok());
        let codes: Vec<String> = repo.get_all().unwrap().into_iter().map(|p| p.code_value).collect();
        assert_eq!(codes, vec!["A".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_delete_removes_from_listing() {
        let repo = InMemoryProductRepository::new();
        let a = repo.create(draft("A")).unwrap();
        let b = repo.create(draft("B")).unwrap();

        repo.delete(a.id).unwrap();

        let listed = repo.get_all().unwrap();
        assert_eq!(listed, vec![b]);
        assert_eq!(repo.delete(a.id), Err(ProductError::ProductNotFound(a.id)));
    }
}
