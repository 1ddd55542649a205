//! Static file serving for the page's assets.
//!
//! Files are served from the configured static directory with a long,
//! immutable cache policy. A missing file, a directory, a path escaping the
//! directory and any method other than GET/HEAD all end in the same empty 404
//! the router uses for unknown routes.

use axum::{handler::HandlerWithoutStateExt, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::config::{AssetsConfig, CACHE_CONTROL_STATIC, STATIC_URL_PREFIX};
use crate::routes::not_found;

/// Create the router serving `/static/*` from the configured directory.
pub fn create_static_routes<S>(assets: &AssetsConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Directories are not browsable; no index.html lookup and no trailing-slash redirect
    let service = ServeDir::new(&assets.static_dir)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .nest_service(STATIC_URL_PREFIX, service)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ))
}
