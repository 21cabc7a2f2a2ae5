//! Product handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use stockroom_domain::product::ProductId;
use tracing::{debug, info};

use crate::{
    dto::product::{
        CreateProductRequest, ErrorResponse, PatchProductRequest, ProductEnvelope,
        ProductListEnvelope, UpdateProductRequest,
    },
    error::ApiError,
    AppState,
};

fn product_id(path: Result<Path<u64>, PathRejection>) -> Result<ProductId, ApiError> {
    let Path(id) = path.map_err(|rejection| {
        debug!(error = %rejection, "Rejected product id");
        ApiError::bad_request("invalid id")
    })?;
    Ok(ProductId::new(id))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        ApiError::bad_request("invalid body")
    })?;
    Ok(body)
}

/// List every product
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All stored products", body = ProductListEnvelope),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<ProductListEnvelope>, ApiError> {
    let products = state.product_service.get_all()?;

    Ok(Json(ProductListEnvelope {
        message: "products found".to_string(),
        data: products.into_iter().map(Into::into).collect(),
    }))
}

/// Fetch a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductEnvelope),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let id = product_id(path)?;
    let product = state.product_service.get_by_id(id)?;

    Ok(Json(ProductEnvelope::new("product found", product)))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductEnvelope),
        (status = 400, description = "Invalid body, empty fields, invalid expiration or repeated code", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("api_token" = [])),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductEnvelope>), ApiError> {
    let request = json_body(body)?;
    let product = state.product_service.create(request.into())?;

    info!(product_id = %product.id, "Created product");
    Ok((
        StatusCode::CREATED,
        Json(ProductEnvelope::new("product created", product)),
    ))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = u64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductEnvelope),
        (status = 400, description = "Invalid id, invalid body or invalid fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("api_token" = [])),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let id = product_id(path)?;
    let request = json_body(body)?;
    let product = state.product_service.update(id, request.into())?;

    info!(product_id = %product.id, "Updated product");
    Ok(Json(ProductEnvelope::new("product updated", product)))
}

/// Partially update a product
#[utoipa::path(
    patch,
    path = "/products/{id}",
    params(("id" = u64, Path, description = "Product id")),
    request_body = PatchProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductEnvelope),
        (status = 400, description = "Invalid id, invalid body or invalid fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("api_token" = [])),
    tag = "products"
)]
pub async fn patch_product(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<PatchProductRequest>, JsonRejection>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let id = product_id(path)?;
    let request = json_body(body)?;
    let product = state.product_service.patch(id, request.into())?;

    info!(product_id = %product.id, "Patched product");
    Ok(Json(ProductEnvelope::new("product updated", product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("api_token" = [])),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = product_id(path)?;
    state.product_service.delete(id)?;

    info!(product_id = %id, "Deleted product");
    Ok(StatusCode::NO_CONTENT)
}
