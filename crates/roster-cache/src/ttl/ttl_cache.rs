//! Key/value cache with per-entry time-to-live.
//!
//! Expiry is lazy: an entry older than the TTL is dropped the first time it is
//! read. Nothing sweeps the map in the background; [`TtlCache::purge_expired`]
//! is there for callers that want to.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use super::clock::SharedClock;

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at_ms: i64,
}

/// Time-bounded cache
#[derive(Debug)]
pub struct TtlCache<K, V> {
    name: &'static str,
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
    ttl: Duration,
    ttl_ms: i64,
    clock: SharedClock,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + std::fmt::Debug,
    V: Clone,
{
    /// Create a cache; `name` only shows up in logs and stats.
    pub fn new(name: &'static str, ttl: Duration, clock: SharedClock) -> Self {
        Self {
            name,
            entries: Mutex::new(HashMap::new()),
            ttl,
            ttl_ms: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn is_expired(&self, entry: &CacheEntry<V>, now_ms: i64) -> bool {
        now_ms.saturating_sub(entry.stored_at_ms) > self.ttl_ms
    }

    /// Get a live value.
    ///
    /// Returns `None` when the key was never set or its entry is older than
    /// the TTL. An expired entry is removed.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock();

        let expired = match entries.get(key) {
            Some(entry) if !self.is_expired(entry, now) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.remove(key);
            debug!(cache = self.name, ?key, "Cache entry expired");
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store a value, replacing any previous one and restarting its TTL
    pub fn set(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            stored_at_ms: self.clock.now_ms(),
        };
        self.entries.lock().insert(key, entry);
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.lock().remove(key).map(|entry| entry.value)
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| now.saturating_sub(entry.stored_at_ms) <= self.ttl_ms);
        let purged = before - entries.len();
        if purged > 0 {
            debug!(cache = self.name, purged, "Purged expired cache entries");
        }
        purged
    }

    /// Number of stored entries, including ones that expired but were not read yet
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            name: self.name,
            size: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            ttl_secs: self.ttl.as_secs(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub name: &'static str,
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
    pub ttl_secs: u64,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0)
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
