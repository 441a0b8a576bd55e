//! Service context - dependency container for services
//!
//! Holds the upstream sources, the cache set, the clock and the roster
//! settings needed by the fetchers.

use std::sync::Arc;

use roster_cache::{CacheSet, CacheTtls, SharedClock, SystemClock};
use roster_common::RosterConfig;
use roster_core::{CdnUrls, GuildSource, PresenceSource, Snowflake, UserSource};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    // Upstream sources
    user_source: Arc<dyn UserSource>,
    presence_source: Arc<dyn PresenceSource>,
    guild_source: Arc<dyn GuildSource>,

    // Caches
    caches: Arc<CacheSet>,
    clock: SharedClock,

    // Settings
    cdn: CdnUrls,
    roster: Arc<RosterConfig>,
    default_guild_id: Option<Snowflake>,
}

impl ServiceContext {
    // === Sources ===

    pub fn user_source(&self) -> &dyn UserSource {
        self.user_source.as_ref()
    }

    pub fn presence_source(&self) -> &dyn PresenceSource {
        self.presence_source.as_ref()
    }

    pub fn guild_source(&self) -> &dyn GuildSource {
        self.guild_source.as_ref()
    }

    // === Caches ===

    pub fn caches(&self) -> &CacheSet {
        self.caches.as_ref()
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    // === Settings ===

    pub fn cdn(&self) -> &CdnUrls {
        &self.cdn
    }

    pub fn roster(&self) -> &RosterConfig {
        self.roster.as_ref()
    }

    /// Guild used when a request does not name one
    pub fn default_guild_id(&self) -> Option<Snowflake> {
        self.default_guild_id
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("sources", &"...")
            .field("caches", &self.caches.sizes())
            .field("cdn", &self.cdn.base())
            .field("fallback_ids", &self.roster.fallback_ids.len())
            .field("default_guild_id", &self.default_guild_id)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_source: Option<Arc<dyn UserSource>>,
    presence_source: Option<Arc<dyn PresenceSource>>,
    guild_source: Option<Arc<dyn GuildSource>>,
    caches: Option<Arc<CacheSet>>,
    cache_ttls: Option<CacheTtls>,
    clock: Option<SharedClock>,
    cdn: Option<CdnUrls>,
    roster: Option<RosterConfig>,
    default_guild_id: Option<Snowflake>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one value for all three sources
    pub fn sources<S>(self, source: Arc<S>) -> Self
    where
        S: UserSource + PresenceSource + GuildSource + 'static,
    {
        self.user_source(source.clone())
            .presence_source(source.clone())
            .guild_source(source)
    }

    pub fn user_source(mut self, source: Arc<dyn UserSource>) -> Self {
        self.user_source = Some(source);
        self
    }

    pub fn presence_source(mut self, source: Arc<dyn PresenceSource>) -> Self {
        self.presence_source = Some(source);
        self
    }

    pub fn guild_source(mut self, source: Arc<dyn GuildSource>) -> Self {
        self.guild_source = Some(source);
        self
    }

    /// Share an existing cache set (takes precedence over `cache_ttls`)
    pub fn caches(mut self, caches: Arc<CacheSet>) -> Self {
        self.caches = Some(caches);
        self
    }

    pub fn cache_ttls(mut self, ttls: CacheTtls) -> Self {
        self.cache_ttls = Some(ttls);
        self
    }

    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn cdn(mut self, cdn: CdnUrls) -> Self {
        self.cdn = Some(cdn);
        self
    }

    pub fn roster(mut self, roster: RosterConfig) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn default_guild_id(mut self, guild_id: Option<Snowflake>) -> Self {
        self.default_guild_id = guild_id;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingSource` if a source is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let clock = self.clock.unwrap_or_else(SystemClock::shared);
        let caches = match self.caches {
            Some(caches) => caches,
            None => Arc::new(CacheSet::new(
                self.cache_ttls.unwrap_or_default(),
                Arc::clone(&clock),
            )),
        };

        Ok(ServiceContext {
            user_source: self
                .user_source
                .ok_or(ServiceError::MissingSource("user_source"))?,
            presence_source: self
                .presence_source
                .ok_or(ServiceError::MissingSource("presence_source"))?,
            guild_source: self
                .guild_source
                .ok_or(ServiceError::MissingSource("guild_source"))?,
            caches,
            clock,
            cdn: self.cdn.unwrap_or_default(),
            roster: Arc::new(self.roster.unwrap_or_default()),
            default_guild_id: self.default_guild_id,
        })
    }
}
