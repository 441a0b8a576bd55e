//! Domain entities - records fetched from the upstream API

mod member;
mod presence;
mod user;

pub use member::GuildMember;
pub use presence::{Activity, ClientStatus, Presence, UserStatus};
pub use user::ExternalUser;
