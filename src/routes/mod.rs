//! HTTP route handlers.
//!
//! The service exposes the order management page at `/`, a liveness probe at
//! `/health` and the page's stylesheet under `/static`. Anything else, whether
//! an unknown path or a known path with an unsupported method, is a bare 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod index;

use axum::{http::StatusCode, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_INDEX;
use crate::http::static_files::create_static_routes;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Response for unmatched routes and unsupported methods.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Index page - moderate cache, changes only on redeploy
    let index_routes = Router::new()
        .route("/", get(index::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_INDEX),
        ));

    // Static files - long cache with immutable hint
    let static_routes = create_static_routes(&state.config.assets);

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(index_routes)
        .merge(health_routes)
        .merge(static_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
