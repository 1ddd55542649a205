//! Request ID middleware.
//!
//! Every request gets a UUID v4 and a `request` span carrying it together with
//! method, path and duration. The id is also stored in the request extensions:
//! the index handler hands it to `AppErrorResponse`, so the 500 page shown for
//! a failed render prints the same id that appears in the error log line.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Id of the request being handled, available as `Extension<RequestId>`.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Wraps the rest of the stack in the request span and logs completion.
///
/// Installed as the outermost layer in `create_router`, so the 404 fallbacks
/// and static file misses are logged the same way as handled routes.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));
    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(status = response.status().as_u16(), "Request completed");

        response
    }
    .instrument(span)
    .await
}
