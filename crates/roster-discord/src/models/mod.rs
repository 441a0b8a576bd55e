//! Upstream JSON payloads
//!
//! Field names follow the Discord API. Everything optional upstream is
//! optional here; the mappers decide the defaults.

mod member;
mod presence;
mod user;

pub use member::MemberPayload;
pub use presence::{PartialUserPayload, PresencePayload};
pub use user::UserPayload;
