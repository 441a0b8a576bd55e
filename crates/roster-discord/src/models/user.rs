//! User payload

use roster_core::Snowflake;
use serde::Deserialize;

/// `GET /users/{id}` response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Snowflake,
    #[serde(default)]
    pub username: String,
    pub global_name: Option<String>,
    pub discriminator: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub banner_color: Option<String>,
    pub public_flags: Option<u64>,
    pub bot: Option<bool>,
}
