//! UserPayload -> ExternalUser mapper

use roster_core::ExternalUser;

use crate::models::UserPayload;

/// Convert an upstream user into the domain entity.
/// `banner_url` is left unset; the user fetcher derives it.
impl From<UserPayload> for ExternalUser {
    fn from(payload: UserPayload) -> Self {
        ExternalUser {
            id: payload.id,
            username: payload.username,
            display_name: payload.global_name,
            discriminator: payload.discriminator.unwrap_or_else(|| "0".to_string()),
            avatar_hash: payload.avatar,
            banner_hash: payload.banner,
            banner_color: payload.banner_color,
            public_flags: payload.public_flags.unwrap_or(0),
            bot: payload.bot.unwrap_or(false),
            banner_url: None,
        }
    }
}
