//! The set of caches shared by the roster fetchers.
//!
//! Each data kind has its own instance and TTL. Guild presences change the
//! fastest and get the shortest TTL; user records barely change and get the
//! longest.

use std::sync::Arc;
use std::time::Duration;

use roster_common::CacheConfig;
use roster_core::{ExternalUser, GuildMember, Presence, Snowflake};
use serde::Serialize;

use crate::ttl::{CacheStats, SharedClock, SystemClock, TtlCache};

/// TTL per data kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    pub user: Duration,
    pub presence: Duration,
    pub guild_members: Duration,
    pub guild_presences: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self::from(&CacheConfig::default())
    }
}

impl From<&CacheConfig> for CacheTtls {
    fn from(config: &CacheConfig) -> Self {
        Self {
            user: Duration::from_secs(config.user_ttl_secs),
            presence: Duration::from_secs(config.presence_ttl_secs),
            guild_members: Duration::from_secs(config.guild_members_ttl_secs),
            guild_presences: Duration::from_secs(config.guild_presences_ttl_secs),
        }
    }
}

/// Entry counts per cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheSizes {
    pub users: usize,
    pub presences: usize,
    pub guild_members: usize,
    pub guild_presences: usize,
}

/// All caches used while building a roster
#[derive(Debug)]
pub struct CacheSet {
    /// User records by user id
    pub users: TtlCache<Snowflake, ExternalUser>,
    /// Single-user presences by user id
    pub presences: TtlCache<Snowflake, Presence>,
    /// Member lists by guild id
    pub guild_members: TtlCache<Snowflake, Vec<GuildMember>>,
    /// Presence lists by guild id
    pub guild_presences: TtlCache<Snowflake, Vec<Presence>>,
}

impl CacheSet {
    pub fn new(ttls: CacheTtls, clock: SharedClock) -> Self {
        Self {
            users: TtlCache::new("users", ttls.user, Arc::clone(&clock)),
            presences: TtlCache::new("presences", ttls.presence, Arc::clone(&clock)),
            guild_members: TtlCache::new("guild_members", ttls.guild_members, Arc::clone(&clock)),
            guild_presences: TtlCache::new("guild_presences", ttls.guild_presences, clock),
        }
    }

    /// Default TTLs on the wall clock
    pub fn with_system_clock(ttls: CacheTtls) -> Self {
        Self::new(ttls, SystemClock::shared())
    }

    /// Clear every cache
    pub fn clear(&self) {
        self.users.clear();
        self.presences.clear();
        self.guild_members.clear();
        self.guild_presences.clear();
    }

    /// Purge expired entries from every cache
    pub fn purge_expired(&self) -> usize {
        self.users.purge_expired()
            + self.presences.purge_expired()
            + self.guild_members.purge_expired()
            + self.guild_presences.purge_expired()
    }

    pub fn sizes(&self) -> CacheSizes {
        CacheSizes {
            users: self.users.len(),
            presences: self.presences.len(),
            guild_members: self.guild_members.len(),
            guild_presences: self.guild_presences.len(),
        }
    }

    pub fn stats(&self) -> Vec<CacheStats> {
        vec![
            self.users.stats(),
            self.presences.stats(),
            self.guild_members.stats(),
            self.guild_presences.stats(),
        ]
    }
}

impl Default for CacheSet {
    fn default() -> Self {
        Self::with_system_clock(CacheTtls::default())
    }
}
