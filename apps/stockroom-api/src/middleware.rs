//! API middleware

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::header::{AUTHORIZATION, CONTENT_LENGTH},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use crate::{error::ApiError, AppState};

/// Token check for write endpoints
///
/// When a token is configured the `Authorization` header must equal it
/// exactly. Without a configured token every request passes.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.api_token.as_deref() {
        let provided = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        if provided != Some(expected) {
            warn!(
                method = %request.method(),
                uri = %request.uri(),
                "Rejected request with missing or invalid token"
            );
            return Err(ApiError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}

/// Request logging
///
/// Emits one event per request once the response is ready.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let bytes = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    let start = Instant::now();
    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        bytes,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "API request"
    );

    response
}
