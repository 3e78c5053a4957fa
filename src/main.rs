//! TaskList Server: task lists and to-dos shared between collaborators.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use tasklist_core::config::AppConfig;
use tasklist_core::error::AppError;
use tasklist_database::Stores;

#[tokio::main]
async fn main() {
    let env = std::env::var("TASKLIST_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
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

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TaskList v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.uses_default_secret() {
        tracing::warn!("auth.jwt_secret is the built-in default; set TASKLIST__AUTH__JWT_SECRET");
    }

    let stores = Stores::open(&config).await?;

    tasklist_api::run_server(config, stores).await
}
