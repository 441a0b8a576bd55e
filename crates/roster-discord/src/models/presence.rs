//! Presence payload

use roster_core::{Activity, ClientStatus, Snowflake, UserStatus};
use serde::Deserialize;

/// Presence objects only carry the user's id
#[derive(Debug, Clone, Deserialize)]
pub struct PartialUserPayload {
    pub id: Snowflake,
}

/// Element of `GET /guilds/{guild_id}/presences`, or the body of
/// `GET /users/{id}/presence`
#[derive(Debug, Clone, Deserialize)]
pub struct PresencePayload {
    pub user: PartialUserPayload,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub client_status: ClientStatus,
    #[serde(default)]
    pub activities: Vec<Activity>,
}
