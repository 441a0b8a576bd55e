//! Time-bounded cache primitives

mod clock;
mod ttl_cache;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use ttl_cache::{CacheStats, TtlCache};
