//! Source trait implementations for [`crate::DiscordClient`]

mod guilds;
mod presences;
mod users;
