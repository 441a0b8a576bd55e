//! # roster-cache
//!
//! In-process caching layer for upstream data.
//!
//! ## Features
//!
//! - **Clock**: injected time source so expiry can be driven by tests
//! - **TtlCache**: key/value store with lazy per-entry expiry
//! - **CacheSet**: one independently configured cache per data kind
//!
//! ## Example
//!
//! ```ignore
//! use roster_cache::{CacheSet, CacheTtls, ManualClock};
//!
//! let clock = Arc::new(ManualClock::new(0));
//! let caches = CacheSet::new(CacheTtls::default(), clock.clone());
//!
//! caches.users.set(user.id, user.clone());
//! clock.advance(Duration::from_secs(61));
//! assert!(caches.users.get(&user.id).is_none());
//! ```

pub mod store;
pub mod ttl;

pub use store::{CacheSet, CacheSizes, CacheTtls};
pub use ttl::{CacheStats, Clock, ManualClock, SharedClock, SystemClock, TtlCache};
