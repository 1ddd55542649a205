//! order-management-app entry point.
//!
//! Loads configuration, initializes tracing, loads the Tera templates (a
//! missing page template is fatal here), sets up the Axum router and starts
//! the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use order_management_app::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER, SERVICE_VERSION};
use order_management_app::http::start_server;
use order_management_app::routes::create_router;
use order_management_app::state::AppState;
use order_management_app::templates::init_templates;

/// Order management: serves the order page and a health check
#[derive(Parser, Debug)]
#[command(name = "order-management-app", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "order_management_app=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, logging: &LoggingConfig) {
    let (text_layer, json_layer) = if logging.is_json() {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter))
        .with(text_layer)
        .with(json_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        version = SERVICE_VERSION,
        site_name = %config.ui.site_name,
        "Loaded configuration"
    );

    let tera = init_templates(&config.assets)?;
    tracing::info!(dir = %config.assets.templates_dir, "Initialized templates");

    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
