//! CloudNest server — cloud file storage backend.
//!
//! Main entry point that loads configuration, connects to the database,
//! and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use cloudnest_core::config::AppConfig;
use cloudnest_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("CLOUDNEST_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
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
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CloudNest v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db = cloudnest_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    cloudnest_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    cloudnest_api::run_server(config, db.into_pool()).await
}
