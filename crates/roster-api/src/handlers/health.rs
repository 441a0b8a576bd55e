//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use roster_cache::CacheSizes;
use serde::Serialize;

use crate::state::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Entries currently held by each cache
    pub caches: CacheSizes,
    /// Roster loads started since boot
    pub roster_loads: u64,
    /// Guild loaded when a request names none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_guild_id: Option<String>,
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

/// Readiness check
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let ctx = state.service_context();

    Json(ReadinessResponse {
        status: "ready",
        timestamp: Utc::now(),
        caches: ctx.caches().sizes(),
        roster_loads: state.roster().current_generation(),
        default_guild_id: ctx.default_guild_id().map(|id| id.to_string()),
    })
}
