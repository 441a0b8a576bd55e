//! MemberPayload -> GuildMember mapper

use roster_core::{ExternalUser, GuildMember};

use crate::models::MemberPayload;

impl MemberPayload {
    /// Members without an embedded user cannot be displayed and map to `None`
    pub fn into_member(self) -> Option<GuildMember> {
        let user = self.user?;
        Some(GuildMember {
            user: ExternalUser::from(user),
            nick: self.nick,
            roles: self.roles,
            joined_at: self.joined_at,
        })
    }
}

/// Convert a member list, skipping entries without a user
pub fn members_from_payloads(payloads: Vec<MemberPayload>) -> Vec<GuildMember> {
    payloads
        .into_iter()
        .filter_map(MemberPayload::into_member)
        .collect()
}
