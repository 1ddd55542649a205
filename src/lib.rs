//! order-management-app: web server for a browser-side order management page.
//!
//! The server renders one page and answers a health check. Orders are created,
//! listed and deleted entirely in the browser against local storage.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
