//! DTOs for product endpoints

use serde::{Deserialize, Serialize};
use stockroom_domain::product::{Product, ProductDraft, ProductPatch};
use utoipa::ToSchema;

/// Request body for creating a product
///
/// Omitted fields default to their zero value and are then rejected by
/// validation as empty.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateProductRequest {
    #[schema(example = "widget")]
    pub name: String,
    #[schema(example = 5)]
    pub quantity: i64,
    /// Unique business key
    #[schema(example = "W1")]
    pub code_value: String,
    #[schema(example = true)]
    pub is_published: bool,
    /// Expiration date as DD/MM/YYYY
    #[schema(example = "01/01/2030")]
    pub expiration: String,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            code_value: req.code_value,
            is_published: req.is_published,
            expiration: req.expiration,
            price: req.price,
        }
    }
}

/// Request body for replacing a product; every field is required
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(example = "widget")]
    pub name: String,
    #[schema(example = 10)]
    pub quantity: i64,
    #[schema(example = "W1")]
    pub code_value: String,
    #[schema(example = true)]
    pub is_published: bool,
    #[schema(example = "01/01/2030")]
    pub expiration: String,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<UpdateProductRequest> for ProductDraft {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            code_value: req.code_value,
            is_published: req.is_published,
            expiration: req.expiration,
            price: req.price,
        }
    }
}

/// Request body for a partial update; absent fields keep their stored value
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchProductRequest {
    pub name: Option<String>,
    #[schema(example = 10)]
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

impl From<PatchProductRequest> for ProductPatch {
    fn from(req: PatchProductRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            code_value: req.code_value,
            is_published: req.is_published,
            expiration: req.expiration,
            price: req.price,
        }
    }
}

/// A stored product
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "widget")]
    pub name: String,
    #[schema(example = 5)]
    pub quantity: i64,
    #[schema(example = "W1")]
    pub code_value: String,
    #[schema(example = true)]
    pub is_published: bool,
    #[schema(example = "01/01/2030")]
    pub expiration: String,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name,
            quantity: product.quantity,
            code_value: product.code_value,
            is_published: product.is_published,
            expiration: product.expiration,
            price: product.price,
        }
    }
}

/// Envelope for single-product responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductEnvelope {
    #[schema(example = "product found")]
    pub message: String,
    pub data: ProductResponse,
}

impl ProductEnvelope {
    pub fn new(message: &str, product: Product) -> Self {
        Self {
            message: message.to_string(),
            data: product.into(),
        }
    }
}

/// Envelope for product listings
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListEnvelope {
    #[schema(example = "products found")]
    pub message: String,
    pub data: Vec<ProductResponse>,
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "fields cannot be empty")]
    pub error: String,
}
