//! Guild fetcher
//!
//! Member lists and presence snapshots of a whole guild. Failures degrade to
//! an empty list so a roster can still be shown.

use roster_core::{GuildMember, Presence, Snowflake};
use tracing::{debug, error, instrument};

use super::context::ServiceContext;

/// Guild member and presence fetcher
pub struct GuildFetcher<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildFetcher<'a> {
    /// Create a new GuildFetcher
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Members of a guild, served from cache when fresh
    #[instrument(skip(self))]
    pub async fn fetch_guild_members(&self, guild_id: Snowflake) -> Vec<GuildMember> {
        let cache = &self.ctx.caches().guild_members;
        if let Some(members) = cache.get(&guild_id) {
            debug!(count = members.len(), "Guild members served from cache");
            return members;
        }

        match self.ctx.guild_source().fetch_members(guild_id).await {
            Ok(members) => {
                cache.set(guild_id, members.clone());
                members
            }
            Err(err) => {
                error!(guild_id = %guild_id, error = %err, "Failed to fetch guild members");
                Vec::new()
            }
        }
    }

    /// Presence snapshot of a guild, served from cache when fresh
    #[instrument(skip(self))]
    pub async fn fetch_guild_presences(&self, guild_id: Snowflake) -> Vec<Presence> {
        let cache = &self.ctx.caches().guild_presences;
        if let Some(presences) = cache.get(&guild_id) {
            debug!(count = presences.len(), "Guild presences served from cache");
            return presences;
        }

        match self.ctx.guild_source().fetch_presences(guild_id).await {
            Ok(presences) => {
                cache.set(guild_id, presences.clone());
                presences
            }
            Err(err) => {
                error!(guild_id = %guild_id, error = %err, "Failed to fetch guild presences");
                Vec::new()
            }
        }
    }
}
