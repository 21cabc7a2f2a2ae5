//! Product routes

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::{
    handlers::product::{
        create_product, delete_product, get_product, list_products, patch_product,
        update_product,
    },
    middleware::require_token,
    AppState,
};

/// Create product routes
///
/// Reads are public; every write goes through the token check.
pub fn routes(state: AppState) -> Router<AppState> {
    let auth = from_fn_with_state(state, require_token);

    Router::new()
        .route(
            "/products",
            get(list_products).merge(post(create_product).route_layer(auth.clone())),
        )
        .route(
            "/products/:id",
            get(get_product).merge(
                put(update_product)
                    .merge(patch(patch_product))
                    .merge(delete(delete_product))
                    .route_layer(auth),
            ),
        )
}
