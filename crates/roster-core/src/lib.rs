//! # roster-core
//!
//! Domain layer containing Discord entities, value objects, and the traits
//! that describe the upstream data sources (users, guild members, presences).
//! This crate has zero dependencies on infrastructure (HTTP client, cache, web framework).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Activity, ClientStatus, ExternalUser, GuildMember, Presence, UserStatus};
pub use error::{SourceError, SourceResult};
pub use traits::{GuildSource, PresenceSource, UserSource};
pub use value_objects::{
    decode_badges, merge_custom_badges, AssetKind, CdnUrls, CustomBadgeTable, Snowflake,
    SnowflakeParseError, UserFlags, SYSTEM_BADGES,
};
