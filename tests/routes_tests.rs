//! Router tests driving the full application in-process.
//!
//! Each test builds the router against the bundled templates and static files
//! and sends requests through `tower::ServiceExt::oneshot`, so no port is bound.
//!
//! Run with: cargo test --test routes_tests
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use order_management_app::config::{AppConfig, AssetsConfig};
use order_management_app::{create_router, templates::init_templates, AppState};

fn test_app() -> Router {
    let config = AppConfig {
        assets: AssetsConfig {
            templates_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/templates").to_string(),
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        },
        ..AppConfig::default()
    };
    let tera = init_templates(&config.assets).expect("bundled templates load");
    create_router(AppState::new(config, tera))
}

async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn get(uri: &str) -> Response {
    send(test_app(), Method::GET, uri).await
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn index_returns_order_management_page() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("Order Management") || body.contains("Orders"));
}

#[tokio::test]
async fn index_order_form_does_not_submit_to_server() {
    let body = String::from_utf8(body_bytes(get("/").await).await).unwrap();
    let form_start = body.find("<form").unwrap();
    let form_tag = &body[form_start..form_start + body[form_start..].find('>').unwrap()];

    assert!(form_tag.contains(r#"id="add-order-form""#));
    assert!(form_tag.contains(r#"onsubmit="return false;""#));
    assert!(form_tag.contains(r##"action="#""##));
    assert!(!form_tag.contains("method="));
}

#[tokio::test]
async fn index_ignores_query_string() {
    let plain = body_bytes(get("/").await).await;
    let with_query = get("/?page=3&user_id=42").await;
    assert_eq!(with_query.status(), StatusCode::OK);
    assert_eq!(body_bytes(with_query).await, plain);
}

#[tokio::test]
async fn index_sets_cache_control() {
    let response = get("/").await;
    let cache_control = response.headers().get(header::CACHE_CONTROL).unwrap();
    assert!(cache_control.to_str().unwrap().starts_with("public, max-age=60"));
}

#[tokio::test]
async fn health_returns_fixed_json() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");

    let body = body_bytes(response).await;
    assert_eq!(
        body,
        br#"{"status":"healthy","service":"order-management-app","version":"1.0.0"}"#
    );
}

#[tokio::test]
async fn health_body_has_exactly_three_keys() {
    let body = body_bytes(get("/health").await).await;
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["service", "status", "version"]);
    assert_eq!(object["status"], "healthy");
    assert_eq!(object["service"], "order-management-app");
}

#[tokio::test]
async fn health_is_not_cached() {
    let response = get("/health").await;
    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let app = test_app();
    for uri in ["/", "/health"] {
        let first = send(app.clone(), Method::GET, uri).await;
        let second = send(app.clone(), Method::GET, uri).await;
        assert_eq!(first.status(), second.status());
        assert_eq!(body_bytes(first).await, body_bytes(second).await);
    }
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    for uri in ["/non-existent-route", "/nope", "/health/extra", "/orders"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(body_bytes(response).await.is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn unsupported_methods_are_not_found() {
    for (method, uri) in [
        (Method::POST, "/"),
        (Method::DELETE, "/health"),
        (Method::PUT, "/static/css/style.css"),
    ] {
        let response = send(test_app(), method.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
    }
}

#[tokio::test]
async fn head_is_answered_for_get_routes() {
    let response = send(test_app(), Method::HEAD, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn stylesheet_is_served() {
    let response = get("/static/css/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/css"));
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=86400, immutable"
    );
}

#[tokio::test]
async fn missing_static_file_is_not_found() {
    let response = get("/static/css/missing.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_directories_are_not_found() {
    for uri in ["/static/css", "/static/css/", "/static", "/static/"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(response.headers().get(header::LOCATION).is_none(), "{uri}");
        assert!(body_bytes(response).await.is_empty(), "{uri}");
    }

    let response = send(test_app(), Method::POST, "/static/css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_paths_cannot_escape_static_dir() {
    let response = get("/static/../Cargo.toml").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
