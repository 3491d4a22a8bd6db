//! VidHub server: private video library behind a login.
//!
//! Main entry point that loads configuration, sets up logging and hands
//! over to the API crate.

use tracing_subscriber::{EnvFilter, fmt};

use vidhub_core::config::AppConfig;
use vidhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting VidHub");

    if let Err(e) = vidhub_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment.
///
/// `VIDHUB_CONFIG` names an extra file; `VIDHUB_ENV` picks the
/// `config/{env}.toml` overlay.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path = std::env::var("VIDHUB_CONFIG").ok();
    let env = std::env::var("VIDHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(config_path.as_deref(), &env)
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
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
