//! Index page handler.
//!
//! Renders the order management page. Orders themselves live in the browser's
//! local storage, so the page needs nothing from the request.

use axum::{extract::State, response::Html, Extension};
use tracing::instrument;

use crate::config::INDEX_TEMPLATE;
use crate::error::{AppError, AppErrorResponse, ResultExt};
use crate::middleware::RequestId;
use crate::state::AppState;

/// Index page handler.
#[instrument(name = "index::index", skip(state, request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppErrorResponse> {
    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);

    let html = state
        .tera
        .render(INDEX_TEMPLATE, &context)
        .map_err(AppError::from)
        .with_request_id(&request_id)?;
    Ok(Html(html))
}
