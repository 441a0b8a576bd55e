//! Roster API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p roster-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use roster_common::{try_init_tracing_for, AppConfig, Environment};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|v| Environment::parse(&v))
        .unwrap_or_default();

    // Initialize tracing
    if let Err(e) = try_init_tracing_for(env) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting Roster API Server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        guild_id = ?config.discord.guild_id,
        fallback_ids = config.roster.fallback_ids.len(),
        "Configuration loaded"
    );

    roster_api::run(config).await?;

    Ok(())
}
