//! Display record assembly
//!
//! Pure merge of users, presences and role memberships into the records the
//! roster shows. No I/O.

use std::collections::HashMap;

use roster_core::{
    decode_badges, merge_custom_badges, CdnUrls, CustomBadgeTable, ExternalUser, Presence,
    Snowflake, UserStatus,
};

use crate::dto::DisplayRecord;

/// Merge `users` with their presences and badges.
///
/// Bots and users without an id or username are dropped. Users missing from
/// `presences` are offline. A non-empty `query` keeps only users whose
/// username or display name contains it, ignoring case. Input order is kept.
pub fn assemble(
    users: &[ExternalUser],
    presences: &[Presence],
    member_roles: &HashMap<Snowflake, Vec<Snowflake>>,
    custom_badges: &CustomBadgeTable,
    cdn: &CdnUrls,
    query: Option<&str>,
) -> Vec<DisplayRecord> {
    let mut by_user: HashMap<Snowflake, &Presence> = HashMap::with_capacity(presences.len());
    for presence in presences {
        by_user.entry(presence.user_id).or_insert(presence);
    }

    let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);

    users
        .iter()
        .filter(|user| !user.is_bot() && !user.id.is_zero() && !user.username.is_empty())
        .filter(|user| needle.as_deref().map_or(true, |needle| matches(user, needle)))
        .map(|user| {
            let presence = by_user.get(&user.id);
            let roles = member_roles.get(&user.id).map_or(&[][..], Vec::as_slice);

            DisplayRecord {
                id: user.id,
                username: user.username.clone(),
                display_name: user.display_name.clone(),
                discriminator: user.discriminator.clone(),
                avatar_url: user
                    .avatar_hash
                    .as_deref()
                    .map(|hash| cdn.avatar_url(user.id, hash)),
                banner_url: user.banner_url.clone().or_else(|| {
                    user.banner_hash
                        .as_deref()
                        .map(|hash| cdn.banner_url(user.id, hash))
                }),
                banner_color: user.banner_color.clone(),
                status: presence.map_or(UserStatus::Offline, |p| p.status),
                badges: merge_custom_badges(&decode_badges(user.public_flags), roles, custom_badges),
                bot: user.bot,
                client_status: presence.map(|p| p.client_status.clone()).unwrap_or_default(),
                activities: presence.map(|p| p.activities.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

fn matches(user: &ExternalUser, needle: &str) -> bool {
    user.username.to_lowercase().contains(needle)
        || user
            .display_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
}
