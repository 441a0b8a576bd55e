//! Source traits (ports) implemented by the upstream client

mod sources;

pub use sources::{GuildSource, PresenceSource, UserSource};
