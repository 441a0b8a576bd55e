//! GuildSource implementation

use async_trait::async_trait;
use roster_core::{GuildMember, GuildSource, Presence, Snowflake, SourceResult};
use tracing::instrument;

use crate::client::MEMBER_PAGE_LIMIT;
use crate::mappers::members_from_payloads;
use crate::models::{MemberPayload, PresencePayload};
use crate::DiscordClient;

#[async_trait]
impl GuildSource for DiscordClient {
    #[instrument(skip(self))]
    async fn fetch_members(&self, guild_id: Snowflake) -> SourceResult<Vec<GuildMember>> {
        let payloads: Vec<MemberPayload> = self
            .get_json(&format!(
                "/guilds/{guild_id}/members?limit={MEMBER_PAGE_LIMIT}"
            ))
            .await?;
        Ok(members_from_payloads(payloads))
    }

    #[instrument(skip(self))]
    async fn fetch_presences(&self, guild_id: Snowflake) -> SourceResult<Vec<Presence>> {
        let payloads: Vec<PresencePayload> = self
            .get_json(&format!("/guilds/{guild_id}/presences"))
            .await?;
        Ok(payloads.into_iter().map(Presence::from).collect())
    }
}
