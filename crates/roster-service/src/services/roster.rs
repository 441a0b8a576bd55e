//! Roster service
//!
//! Orchestrates one roster load: guild mode when a guild id is known,
//! otherwise the configured fallback roster. Always produces a well-formed
//! response.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use roster_core::{ExternalUser, Presence, Snowflake};
use tracing::{error, info, instrument};

use crate::dto::{DisplayRecord, RosterResponse, RosterSummary};
use crate::loading::{LoadingEvent, LoadingLog, LoadingProgress};

use super::assembler::assemble;
use super::context::ServiceContext;
use super::error::ServiceError;
use super::guild_fetcher::GuildFetcher;
use super::presence_resolver::PresenceResolver;
use super::user_fetcher::UserFetcher;

/// Output of a load that finished within its deadline
struct Loaded {
    records: Vec<DisplayRecord>,
    events: Vec<LoadingEvent>,
    /// Users the progress bar expects
    expected: usize,
}

/// Roster service
///
/// Shared across requests. Each load takes a new generation; a load that
/// finishes after a newer one started is reported as superseded.
#[derive(Debug)]
pub struct RosterService {
    ctx: ServiceContext,
    generation: AtomicU64,
}

impl RosterService {
    /// Create a new RosterService
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            generation: AtomicU64::new(0),
        }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Generation of the most recently started load
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Load the roster of `guild_id` (or the default guild, or the fallback
    /// roster), filtered by `query`
    #[instrument(skip(self))]
    pub async fn load_roster(
        &self,
        guild_id: Option<Snowflake>,
        query: Option<&str>,
    ) -> RosterResponse {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let guild_id = guild_id.or(self.ctx.default_guild_id());
        let deadline = self.ctx.roster().load_timeout();

        let loaded = match tokio::time::timeout(deadline, self.load(guild_id, query)).await {
            Ok(loaded) => loaded,
            Err(_) => {
                let err = ServiceError::timeout("roster load", deadline);
                error!(generation, error = %err, "Roster load failed");
                let mut log = LoadingLog::new(self.ctx.clock().clone());
                log.error(format!("Error fetching users: {err}"));
                Loaded {
                    records: Vec::new(),
                    events: log.into_events(),
                    expected: 0,
                }
            }
        };

        let mut records = loaded.records;
        let mut log = LoadingLog::new(self.ctx.clock().clone());
        log.extend(loaded.events);
        let superseded = self.current_generation() != generation;
        if superseded {
            info!(generation, latest = self.current_generation(), "Roster load superseded");
            records.clear();
            log.info(format!("Load {generation} superseded by a newer load"));
        }

        RosterResponse {
            summary: RosterSummary::new(&records, log.events()),
            progress: LoadingProgress::from_events(log.events(), loaded.expected),
            records,
            events: log.into_events(),
            guild_id,
            generation,
            superseded,
            pagination: None,
        }
    }

    async fn load(&self, guild_id: Option<Snowflake>, query: Option<&str>) -> Loaded {
        match guild_id {
            Some(guild_id) => self.load_guild(guild_id, query).await,
            None => self.load_fallback(query).await,
        }
    }

    /// Guild members with the guild's presence snapshot. Emits no events.
    async fn load_guild(&self, guild_id: Snowflake, query: Option<&str>) -> Loaded {
        let fetcher = GuildFetcher::new(&self.ctx);
        let members = fetcher.fetch_guild_members(guild_id).await;
        let presences = fetcher.fetch_guild_presences(guild_id).await;

        let member_roles: HashMap<Snowflake, Vec<Snowflake>> = members
            .iter()
            .map(|m| (m.user_id(), m.roles.clone()))
            .collect();
        let users: Vec<ExternalUser> = members.into_iter().map(|m| m.user).collect();

        info!(
            guild_id = %guild_id,
            members = users.len(),
            presences = presences.len(),
            "Guild roster fetched"
        );

        Loaded {
            records: self.assemble(&users, &presences, &member_roles, query),
            events: Vec::new(),
            expected: 0,
        }
    }

    /// The configured fallback ids, fetched one by one
    async fn load_fallback(&self, query: Option<&str>) -> Loaded {
        let ids = &self.ctx.roster().fallback_ids;
        let batch = UserFetcher::new(&self.ctx).fetch_users(ids).await;

        let user_ids: Vec<Snowflake> = batch.users.iter().map(|u| u.id).collect();
        let presences = PresenceResolver::new(&self.ctx).resolve_all(&user_ids).await;

        Loaded {
            records: self.assemble(&batch.users, &presences, &HashMap::new(), query),
            events: batch.events,
            expected: ids.len(),
        }
    }

    fn assemble(
        &self,
        users: &[ExternalUser],
        presences: &[Presence],
        member_roles: &HashMap<Snowflake, Vec<Snowflake>>,
        query: Option<&str>,
    ) -> Vec<DisplayRecord> {
        assemble(
            users,
            presences,
            member_roles,
            &self.ctx.roster().custom_badges,
            self.ctx.cdn(),
            query,
        )
    }
}
