//! Roster handler

use axum::{extract::State, Json};
use roster_service::{RosterQuery, RosterResponse, DEFAULT_PER_PAGE};
use tracing::debug;

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Load the roster
///
/// GET /api/v1/roster?guild_id=&q=&page=&per_page=
///
/// Records are grouped by status. With `page`, only the first
/// `page * per_page` records are returned. Upstream failures are reported in
/// the body's events, never as an HTTP error.
pub async fn get_roster(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RosterQuery>,
) -> ApiResult<Json<RosterResponse>> {
    let response = state
        .roster()
        .load_roster(query.guild_id(), query.search())
        .await;

    debug!(
        generation = response.generation,
        records = response.records.len(),
        events = response.events.len(),
        "Roster loaded"
    );

    let response = match query.page {
        Some(page) => response.paginate(page, query.per_page.unwrap_or(DEFAULT_PER_PAGE)),
        None => response.grouped(),
    };

    Ok(Json(response))
}
