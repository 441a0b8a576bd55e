//! Source traits - the upstream data the roster is built from
//!
//! The service layer only depends on these traits; the HTTP client in
//! `roster-discord` provides the implementation, tests provide in-memory fakes.

use async_trait::async_trait;

use crate::entities::{ExternalUser, GuildMember, Presence};
use crate::error::SourceResult;
use crate::value_objects::Snowflake;

#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch a single user by ID
    async fn fetch_user(&self, id: Snowflake) -> SourceResult<ExternalUser>;
}

#[async_trait]
pub trait PresenceSource: Send + Sync {
    /// Fetch the live presence of a single user
    async fn fetch_presence(&self, user_id: Snowflake) -> SourceResult<Presence>;
}

#[async_trait]
pub trait GuildSource: Send + Sync {
    /// List the members of a guild (first page, up to 100)
    async fn fetch_members(&self, guild_id: Snowflake) -> SourceResult<Vec<GuildMember>>;

    /// List the presences of a guild's members
    async fn fetch_presences(&self, guild_id: Snowflake) -> SourceResult<Vec<Presence>>;
}
