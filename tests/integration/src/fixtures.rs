//! Upstream payloads and response bodies

use roster_core::Snowflake;
use roster_service::{DisplayRecord, LoadingEvent, LoadingProgress, PageMeta, RosterSummary};
use serde::Deserialize;
use serde_json::{json, Value};

/// Discord user object
pub fn user_json(id: i64, username: &str) -> Value {
    json!({
        "id": id.to_string(),
        "username": username,
        "global_name": null,
        "discriminator": "0",
        "avatar": format!("hash{id}"),
        "banner": null,
        "banner_color": null,
        "public_flags": 0,
    })
}

/// Discord bot user object
pub fn bot_json(id: i64, username: &str) -> Value {
    let mut user = user_json(id, username);
    user["bot"] = json!(true);
    user
}

/// Guild member object
pub fn member_json(user: Value, roles: &[&str]) -> Value {
    json!({
        "user": user,
        "roles": roles,
        "nick": null,
        "joined_at": "2021-06-01T12:00:00.000000+00:00",
    })
}

/// Presence object
pub fn presence_json(user_id: i64, status: &str) -> Value {
    json!({
        "user": { "id": user_id.to_string() },
        "status": status,
        "client_status": { "desktop": status },
        "activities": [],
    })
}

/// Body of `GET /api/v1/roster`
#[derive(Debug, Deserialize)]
pub struct RosterBody {
    pub records: Vec<DisplayRecord>,
    pub events: Vec<LoadingEvent>,
    pub summary: RosterSummary,
    pub progress: LoadingProgress,
    pub guild_id: Option<Snowflake>,
    pub generation: u64,
    pub superseded: bool,
    pub pagination: Option<PageMeta>,
}

impl RosterBody {
    pub fn usernames(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.username.as_str()).collect()
    }
}

/// Error body of a failed request
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}
