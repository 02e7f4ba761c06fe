//! HTTP route handlers — matches the original upload/list/delete surface.

pub mod documents;

use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(documents::routes())
        .layer(cors_layer(&state.config.allowed_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the single configured front-end origin: all methods and headers,
/// credentials allowed. Credentials forbid wildcards, so methods and headers
/// mirror the request instead.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
        Err(e) => {
            warn!("invalid allowed origin {:?}: {}", allowed_origin, e);
            CorsLayer::new()
        }
    }
}

/// Error wrapper translating the core taxonomy into HTTP responses:
/// client-side failures become 400, everything else 500, always with a
/// JSON `{"error": <message>}` body.
pub struct ApiError(pub docshelf_core::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<docshelf_core::Error> for ApiError {
    fn from(err: docshelf_core::Error) -> Self {
        Self(err)
    }
}
