//! Public user flags and badge decoding
//!
//! Discord exposes a user's profile badges as the `public_flags` bitfield.
//! Badges are decoded against a fixed table; guild roles can contribute
//! additional custom badges through a [`CustomBadgeTable`].

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::Snowflake;

bitflags! {
    /// Discord public user flags that map to a profile badge
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UserFlags: u64 {
        /// Discord employee
        const STAFF                  = 1 << 0;
        /// Partnered server owner
        const PARTNER                = 1 << 1;
        /// HypeSquad events member
        const HYPESQUAD              = 1 << 2;
        /// Bug hunter level 1
        const BUG_HUNTER_LEVEL_1     = 1 << 3;
        /// House Bravery member
        const HYPESQUAD_HOUSE_1      = 1 << 6;
        /// House Brilliance member
        const HYPESQUAD_HOUSE_2      = 1 << 7;
        /// House Balance member
        const HYPESQUAD_HOUSE_3      = 1 << 8;
        /// Early Nitro supporter
        const PREMIUM_EARLY_SUPPORTER = 1 << 9;
        /// Bug hunter level 2
        const BUG_HUNTER_LEVEL_2     = 1 << 14;
        /// Early verified bot developer
        const VERIFIED_DEVELOPER     = 1 << 17;
        /// Moderator programs alumni
        const CERTIFIED_MODERATOR    = 1 << 18;
        /// Active developer
        const ACTIVE_DEVELOPER       = 1 << 22;
    }
}

/// Badge table in display order: `(flag, badge id)`
pub const SYSTEM_BADGES: [(UserFlags, &str); 12] = [
    (UserFlags::STAFF, "staff"),
    (UserFlags::PARTNER, "partner"),
    (UserFlags::HYPESQUAD, "hypesquad_events"),
    (UserFlags::BUG_HUNTER_LEVEL_1, "bug_hunter_level_1"),
    (UserFlags::HYPESQUAD_HOUSE_1, "house_bravery"),
    (UserFlags::HYPESQUAD_HOUSE_2, "house_brilliance"),
    (UserFlags::HYPESQUAD_HOUSE_3, "house_balance"),
    (UserFlags::PREMIUM_EARLY_SUPPORTER, "early_supporter"),
    (UserFlags::BUG_HUNTER_LEVEL_2, "bug_hunter_level_2"),
    (UserFlags::VERIFIED_DEVELOPER, "developer"),
    (UserFlags::CERTIFIED_MODERATOR, "mod_alumni"),
    (UserFlags::ACTIVE_DEVELOPER, "active_developer"),
];

impl UserFlags {
    /// Create from the raw `public_flags` value, keeping only known badge bits
    #[inline]
    pub fn from_public_flags(bits: u64) -> Self {
        UserFlags::from_bits_truncate(bits)
    }

    /// Badge ids for every flag set, in table order
    pub fn badges(self) -> Vec<&'static str> {
        SYSTEM_BADGES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, badge)| *badge)
            .collect()
    }
}

impl Default for UserFlags {
    fn default() -> Self {
        UserFlags::empty()
    }
}

impl fmt::Display for UserFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for UserFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for UserFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(UserFlags::from_public_flags)
    }
}

/// Decode a raw flag bitmask into badge ids.
///
/// A badge is included iff every bit of its flag is set in `flags`.
pub fn decode_badges(flags: u64) -> Vec<&'static str> {
    SYSTEM_BADGES
        .iter()
        .filter(|(flag, _)| flags & flag.bits() == flag.bits())
        .map(|(_, badge)| *badge)
        .collect()
}

/// Role id → custom badge label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomBadgeTable {
    badges: HashMap<Snowflake, String>,
}

impl CustomBadgeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, replacing any previous badge for the role
    #[must_use]
    pub fn with(mut self, role_id: Snowflake, badge: impl Into<String>) -> Self {
        self.insert(role_id, badge);
        self
    }

    /// Add a mapping, replacing any previous badge for the role
    pub fn insert(&mut self, role_id: Snowflake, badge: impl Into<String>) {
        self.badges.insert(role_id, badge.into());
    }

    /// Badge mapped to a role, if any
    pub fn get(&self, role_id: Snowflake) -> Option<&str> {
        self.badges.get(&role_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

impl FromIterator<(Snowflake, String)> for CustomBadgeTable {
    fn from_iter<I: IntoIterator<Item = (Snowflake, String)>>(iter: I) -> Self {
        Self {
            badges: iter.into_iter().collect(),
        }
    }
}

/// Append the custom badges of a member's roles to the system badges.
///
/// Roles without a mapping are skipped. The result keeps the first occurrence
/// of each badge id, so a custom badge that repeats a system badge (or another
/// role's badge) is listed once.
pub fn merge_custom_badges<S: AsRef<str>>(
    base: &[S],
    role_ids: &[Snowflake],
    table: &CustomBadgeTable,
) -> Vec<String> {
    let custom = role_ids.iter().filter_map(|role_id| table.get(*role_id));

    let mut merged: Vec<String> = Vec::with_capacity(base.len() + role_ids.len());
    for badge in base.iter().map(|b| b.as_ref()).chain(custom) {
        if !merged.iter().any(|seen| seen == badge) {
            merged.push(badge.to_string());
        }
    }
    merged
}
