//! Guild member payload

use chrono::{DateTime, Utc};
use roster_core::Snowflake;
use serde::Deserialize;

use super::UserPayload;

/// Element of `GET /guilds/{guild_id}/members`
#[derive(Debug, Clone, Deserialize)]
pub struct MemberPayload {
    /// Absent on some partial member objects
    pub user: Option<UserPayload>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    pub nick: Option<String>,
    pub joined_at: Option<DateTime<Utc>>,
}
