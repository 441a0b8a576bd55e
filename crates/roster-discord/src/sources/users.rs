//! UserSource implementation

use async_trait::async_trait;
use roster_core::{ExternalUser, Snowflake, SourceResult, UserSource};
use tracing::instrument;

use crate::models::UserPayload;
use crate::DiscordClient;

#[async_trait]
impl UserSource for DiscordClient {
    #[instrument(skip(self))]
    async fn fetch_user(&self, id: Snowflake) -> SourceResult<ExternalUser> {
        let payload: UserPayload = self.get_json(&format!("/users/{id}")).await?;
        Ok(ExternalUser::from(payload))
    }
}
