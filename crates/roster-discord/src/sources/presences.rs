//! PresenceSource implementation

use async_trait::async_trait;
use roster_core::{Presence, PresenceSource, Snowflake, SourceResult};
use tracing::instrument;

use crate::models::PresencePayload;
use crate::DiscordClient;

#[async_trait]
impl PresenceSource for DiscordClient {
    #[instrument(skip(self))]
    async fn fetch_presence(&self, user_id: Snowflake) -> SourceResult<Presence> {
        let payload: PresencePayload = self.get_json(&format!("/users/{user_id}/presence")).await?;
        Ok(Presence::from(payload))
    }
}
