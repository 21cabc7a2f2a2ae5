//! API routes

pub mod product;

use axum::{middleware::from_fn, routing::get, Router};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::product::{
        CreateProductRequest, ErrorResponse, PatchProductRequest, ProductEnvelope,
        ProductListEnvelope, ProductResponse, UpdateProductRequest,
    },
    handlers,
    middleware::log_requests,
    AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::product::list_products,
        handlers::product::get_product,
        handlers::product::create_product,
        handlers::product::update_product,
        handlers::product::patch_product,
        handlers::product::delete_product,
        health_handler,
        ping_handler
    ),
    components(
        schemas(
            CreateProductRequest,
            UpdateProductRequest,
            PatchProductRequest,
            ProductResponse,
            ProductEnvelope,
            ProductListEnvelope,
            ErrorResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "products", description = "Product catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Stockroom API",
        version = "0.1.0",
        description = "CRUD service for the Stockroom product catalog"
    )
)]
pub struct ApiDoc;

/// Registers the `Authorization` header token used by write endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(product::routes(state.clone()))
        .route("/health", get(health_handler))
        .route("/ping", get(ping_handler))
        .layer(from_fn(log_requests))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}

/// Liveness ping
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service answers", body = String)
    ),
    tag = "health"
)]
async fn ping_handler() -> &'static str {
    "pong"
}
