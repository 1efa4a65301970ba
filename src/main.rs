//! Folio server: bilingual photography portfolio backend.
//!
//! Loads configuration, initializes logging and hands off to the API crate.

use tracing_subscriber::{EnvFilter, fmt};

use folio_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("FOLIO_ENV").unwrap_or_else(|_| "development".to_string());
    let config_dir = std::env::var("FOLIO_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    let config = match AppConfig::load_from(&config_dir, &env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = folio_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
