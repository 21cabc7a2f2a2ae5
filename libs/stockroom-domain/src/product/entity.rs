//! Domain entities for the product catalog
//!
//! A `ProductDraft` is what a client submits: every attribute except the id.
//! A `Product` is a draft that a repository has accepted and assigned an id to.
//! A `ProductPatch` carries the subset of attributes a partial update touches.

use serde::{Deserialize, Serialize};

use crate::product::ids::ProductId;

/// Client-supplied product attributes, before an id has been assigned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i64,
    /// Business key, unique across the catalog
    pub code_value: String,
    pub is_published: bool,
    /// Expiration date formatted as `DD/MM/YYYY`
    pub expiration: String,
    pub price: f64,
}

/// A stored product
///
/// # Example
///
/// ```rust
/// use stockroom_domain::product::{Product, ProductDraft, ProductId};
///
/// let draft = ProductDraft {
///     name: "widget".to_string(),
///     quantity: 5,
///     code_value: "W1".to_string(),
///     is_published: true,
///     expiration: "01/01/2030".to_string(),
///     price: 9.99,
/// };
/// let product = Product::from_draft(ProductId::new(1), draft);
/// assert_eq!(product.id.get(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Repository-assigned identifier
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl Product {
    /// Attach an id to a draft
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            code_value: draft.code_value,
            is_published: draft.is_published,
            expiration: draft.expiration,
            price: draft.price,
        }
    }

    /// Copy the product's attributes back into a draft
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            quantity: self.quantity,
            code_value: self.code_value.clone(),
            is_published: self.is_published,
            expiration: self.expiration.clone(),
            price: self.price,
        }
    }
}

/// Partial update: only the fields that are `Some` replace stored values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

impl ProductPatch {
    /// Overlay this patch on top of a stored product
    pub fn apply_to(self, base: &Product) -> ProductDraft {
        let mut draft = base.to_draft();

        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(quantity) = self.quantity {
            draft.quantity = quantity;
        }
        if let Some(code_value) = self.code_value {
            draft.code_value = code_value;
        }
        if let Some(is_published) = self.is_published {
            draft.is_published = is_published;
        }
        if let Some(expiration) = self.expiration {
            draft.expiration = expiration;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }

        draft
    }
}
