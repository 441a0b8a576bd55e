//! Cache instances used by the roster service

mod cache_set;

pub use cache_set::{CacheSet, CacheSizes, CacheTtls};
