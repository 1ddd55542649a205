use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::middleware::RequestId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Template not found: {0}")]
    TemplateMissing(String),
}

/// An `AppError` tagged with the id of the request that produced it.
#[derive(Debug)]
pub struct AppErrorResponse {
    pub error: AppError,
    pub request_id: Option<RequestId>,
}

impl From<AppError> for AppErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }
}

/// Attach the current request id to an error result.
pub trait ResultExt<T> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse>;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse> {
        self.map_err(|error| AppErrorResponse {
            error,
            request_id: Some(request_id.clone()),
        })
    }
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let request_id = self
            .request_id
            .map(|id| id.0.to_string())
            .unwrap_or_default();

        tracing::error!(error = ?self.error, %request_id, "Internal error");

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {status}</title>
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <div class="container">
        <div class="error-page">
            <h1>Error {status}</h1>
            <p>Internal server error</p>
            <p class="request-id">Request ID: {request_id}</p>
            <a href="/">Return to orders</a>
        </div>
    </div>
</body>
</html>"#,
            status = status.as_u16(),
            request_id = request_id,
        );

        (status, Html(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        AppErrorResponse::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_errors_map_to_internal_server_error() {
        let response = AppError::TemplateMissing("orders.html".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = tera::Tera::default()
            .render("absent.html", &tera::Context::new())
            .unwrap_err();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_with_request_id_tags_error() {
        let id = RequestId(Uuid::new_v4());
        let result: Result<(), AppError> = Err(AppError::TemplateMissing("x".to_string()));

        let tagged = result.with_request_id(&id).unwrap_err();
        assert_eq!(tagged.request_id.map(|r| r.0), Some(id.0));
    }

    #[test]
    fn test_with_request_id_passes_ok_through() {
        let id = RequestId(Uuid::new_v4());
        let result: Result<u8, AppError> = Ok(7);
        assert_eq!(result.with_request_id(&id).unwrap(), 7);
    }
}
