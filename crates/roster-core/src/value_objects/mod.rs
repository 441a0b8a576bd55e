//! Value objects - immutable types that represent domain concepts

mod cdn;
mod snowflake;
mod user_flags;

pub use cdn::{AssetKind, CdnUrls, BANNER_SIZE, DEFAULT_CDN_BASE};
pub use snowflake::{Snowflake, SnowflakeParseError};
pub use user_flags::{decode_badges, merge_custom_badges, CustomBadgeTable, UserFlags, SYSTEM_BADGES};
