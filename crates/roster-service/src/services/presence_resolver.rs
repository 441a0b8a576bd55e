//! Presence resolver
//!
//! Per-user presence lookups. Never fails: anything that cannot be resolved
//! is reported offline.

use futures::future::join_all;
use roster_core::{Presence, Snowflake};
use tracing::{debug, instrument};

use super::context::ServiceContext;

/// Per-user presence resolver
pub struct PresenceResolver<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PresenceResolver<'a> {
    /// Create a new PresenceResolver
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Presence of one user, offline when unavailable
    #[instrument(skip(self))]
    pub async fn resolve_presence(&self, user_id: Snowflake) -> Presence {
        let cache = &self.ctx.caches().presences;
        if let Some(presence) = cache.get(&user_id) {
            return presence;
        }

        match self.ctx.presence_source().fetch_presence(user_id).await {
            Ok(presence) => {
                cache.set(user_id, presence.clone());
                presence
            }
            Err(err) => {
                debug!(user_id = %user_id, error = %err, "Presence unavailable, assuming offline");
                Presence::offline(user_id)
            }
        }
    }

    /// Presences of many users, resolved concurrently, in input order
    pub async fn resolve_all(&self, user_ids: &[Snowflake]) -> Vec<Presence> {
        join_all(user_ids.iter().map(|&id| self.resolve_presence(id))).await
    }
}
