//! Conference events API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p events-api
//! ```
//!
//! Configuration is loaded from environment variables (or a `.env` file).

use events_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else if config.app.env.is_development() {
        TracingConfig::development()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = events_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
