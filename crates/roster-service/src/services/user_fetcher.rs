//! User fetcher
//!
//! Loads a list of users one at a time, serving cached entries first and
//! narrating every step into a `LoadingLog`.

use roster_core::{ExternalUser, Snowflake};
use tracing::{debug, info, instrument, warn};

use crate::loading::{LoadingEvent, LoadingLog};

use super::context::ServiceContext;

/// Users loaded by one batch, with the events describing how
#[derive(Debug, Clone, Default)]
pub struct UserBatch {
    pub users: Vec<ExternalUser>,
    pub events: Vec<LoadingEvent>,
}

/// Batch user fetcher
pub struct UserFetcher<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserFetcher<'a> {
    /// Create a new UserFetcher
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch `ids` in order.
    ///
    /// Any failure, a rejected token included, is logged against that user
    /// and skipped; the rest of the batch still loads.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn fetch_users(&self, ids: &[Snowflake]) -> UserBatch {
        let total = ids.len();
        let mut log = LoadingLog::new(self.ctx.clock().clone());
        let mut users = Vec::with_capacity(total);

        log.info(format!("Starting to fetch {total} users..."));

        for (index, &id) in ids.iter().enumerate() {
            if let Some(user) = self.ctx.caches().users.get(&id) {
                debug!(user_id = %id, "User served from cache");
                log.success(format!("✓ Loaded from cache: {}", user.username), user.clone());
                users.push(user);
                continue;
            }

            log.progress(format!("[{}/{}] Fetching user {}...", index + 1, total, id));

            match self.ctx.user_source().fetch_user(id).await {
                Ok(mut user) => {
                    user.resolve_banner(self.ctx.cdn());
                    self.ctx.caches().users.set(id, user.clone());
                    log.success(format!("✓ Loaded {}", user.username), user.clone());
                    users.push(user);
                }
                Err(err) => {
                    warn!(user_id = %id, error = %err, "Failed to load user");
                    log.error(format!("✗ Error loading user {id}: {err}"));
                }
            }
        }

        info!(loaded = users.len(), requested = total, "User batch finished");

        UserBatch {
            users,
            events: log.into_events(),
        }
    }
}
