//! Route definitions
//!
//! API routes are mounted under /api/v1.

use axum::{routing::get, Router};

use crate::handlers::{health, roster};
use crate::state::AppState;

/// Create the main API router (health routes are added separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().route("/roster", get(roster::get_roster))
}
