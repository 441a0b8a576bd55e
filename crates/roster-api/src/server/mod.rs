//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use roster_cache::CacheTtls;
use roster_common::{AppConfig, AppError, AppResult};
use roster_core::CdnUrls;
use roster_discord::DiscordClient;
use roster_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes sit outside the rate limiter.
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.roster.load_timeout(),
        config.app.env.is_production(),
    )?;

    Ok(router.merge(health_routes()).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    // Create the upstream client
    let client = Arc::new(DiscordClient::from_config(&config.discord)?);
    info!(api_base = %client.api_base(), "Discord client ready");

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .sources(client)
        .cache_ttls(CacheTtls::from(&config.cache))
        .cdn(CdnUrls::new(config.discord.cdn_base.as_str()))
        .roster(config.roster.clone())
        .default_guild_id(config.discord.guild_id)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    if let Ok(local) = listener.local_addr() {
        info!("Server listening on http://{}", local);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}
