//! Member entity - a user's membership in a guild

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExternalUser;
use crate::value_objects::Snowflake;

/// Guild member as returned by `GET /guilds/{guild_id}/members`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    pub user: ExternalUser,
    pub nick: Option<String>,
    pub roles: Vec<Snowflake>,
    pub joined_at: Option<DateTime<Utc>>,
}

impl GuildMember {
    /// Create a member without roles
    pub fn new(user: ExternalUser) -> Self {
        Self {
            user,
            nick: None,
            roles: Vec::new(),
            joined_at: None,
        }
    }

    /// Set the member's roles
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Snowflake>) -> Self {
        self.roles = roles;
        self
    }

    #[inline]
    pub fn user_id(&self) -> Snowflake {
        self.user.id
    }

    /// Check if member has a specific role
    #[inline]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.roles.contains(&role_id)
    }
}
