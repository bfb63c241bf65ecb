//! Reaction API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p reaction-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use reaction_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so it is read before tracing starts
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Starting Reaction API Server..."
    );

    reaction_api::run(config).await?;

    Ok(())
}
