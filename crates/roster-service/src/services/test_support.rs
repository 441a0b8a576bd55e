//! In-memory sources for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use roster_cache::ManualClock;
use roster_common::RosterConfig;
use roster_core::{
    CustomBadgeTable, ExternalUser, GuildMember, GuildSource, Presence, PresenceSource, Snowflake,
    SourceError, SourceResult, UserSource, UserStatus,
};

use super::{ServiceContext, ServiceContextBuilder};

pub const START_MS: i64 = 1_700_000_000_000;

fn not_found(endpoint: String) -> SourceError {
    SourceError::Status {
        status: 404,
        endpoint,
    }
}

/// Source backed by maps; anything not configured is a 404
#[derive(Debug, Default)]
pub struct FakeSource {
    users: HashMap<Snowflake, SourceResult<ExternalUser>>,
    presences: HashMap<Snowflake, SourceResult<Presence>>,
    members: HashMap<Snowflake, SourceResult<Vec<GuildMember>>>,
    guild_presences: HashMap<Snowflake, SourceResult<Vec<Presence>>>,
    delay: Option<Duration>,
    pub user_calls: AtomicUsize,
    pub presence_calls: AtomicUsize,
    pub member_calls: AtomicUsize,
    pub guild_presence_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: ExternalUser) -> Self {
        self.users.insert(user.id, Ok(user));
        self
    }

    pub fn with_user_error(mut self, id: Snowflake, err: SourceError) -> Self {
        self.users.insert(id, Err(err));
        self
    }

    pub fn with_presence(mut self, id: Snowflake, status: UserStatus) -> Self {
        self.presences.insert(id, Ok(Presence::new(id, status)));
        self
    }

    pub fn with_presence_error(mut self, id: Snowflake, err: SourceError) -> Self {
        self.presences.insert(id, Err(err));
        self
    }

    pub fn with_members(mut self, guild_id: Snowflake, members: SourceResult<Vec<GuildMember>>) -> Self {
        self.members.insert(guild_id, members);
        self
    }

    pub fn with_guild_presences(
        mut self,
        guild_id: Snowflake,
        presences: SourceResult<Vec<Presence>>,
    ) -> Self {
        self.guild_presences.insert(guild_id, presences);
        self
    }

    /// Every call sleeps this long first
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for FakeSource {
    async fn fetch_user(&self, id: Snowflake) -> SourceResult<ExternalUser> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.users
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Err(not_found(format!("/users/{id}"))))
    }
}

#[async_trait]
impl PresenceSource for FakeSource {
    async fn fetch_presence(&self, user_id: Snowflake) -> SourceResult<Presence> {
        self.presence_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.presences
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| Err(not_found(format!("/users/{user_id}/presence"))))
    }
}

#[async_trait]
impl GuildSource for FakeSource {
    async fn fetch_members(&self, guild_id: Snowflake) -> SourceResult<Vec<GuildMember>> {
        self.member_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.members
            .get(&guild_id)
            .cloned()
            .unwrap_or_else(|| Err(not_found(format!("/guilds/{guild_id}/members"))))
    }

    async fn fetch_presences(&self, guild_id: Snowflake) -> SourceResult<Vec<Presence>> {
        self.guild_presence_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.guild_presences
            .get(&guild_id)
            .cloned()
            .unwrap_or_else(|| Err(not_found(format!("/guilds/{guild_id}/presences"))))
    }
}

pub fn user(id: i64, username: &str) -> ExternalUser {
    ExternalUser::new(Snowflake::new(id), username)
}

pub fn bot(id: i64, username: &str) -> ExternalUser {
    let mut user = user(id, username);
    user.bot = true;
    user
}

pub fn roster_config(fallback_ids: &[i64]) -> RosterConfig {
    RosterConfig {
        fallback_ids: fallback_ids.iter().copied().map(Snowflake::new).collect(),
        custom_badges: CustomBadgeTable::new().with(Snowflake::new(900), "admin"),
        load_timeout_secs: 60,
    }
}

/// Context over `source` with a manual clock and the given fallback roster
pub fn context(
    source: FakeSource,
    fallback_ids: &[i64],
) -> (ServiceContext, Arc<FakeSource>, Arc<ManualClock>) {
    context_with(source, roster_config(fallback_ids), None)
}

pub fn context_with(
    source: FakeSource,
    roster: RosterConfig,
    default_guild_id: Option<Snowflake>,
) -> (ServiceContext, Arc<FakeSource>, Arc<ManualClock>) {
    let source = Arc::new(source);
    let clock = Arc::new(ManualClock::new(START_MS));

    let ctx = ServiceContextBuilder::new()
        .sources(Arc::clone(&source))
        .clock(clock.clone())
        .roster(roster)
        .default_guild_id(default_guild_id)
        .build()
        .unwrap();
    (ctx, source, clock)
}
