//! Roster services
//!
//! Fetchers for users, guild data and presences, the pure assembly step, and
//! the orchestrating `RosterService`.

pub mod assembler;
pub mod context;
pub mod error;
pub mod guild_fetcher;
pub mod presence_resolver;
pub mod roster;
pub mod user_fetcher;

#[cfg(test)]
pub(crate) mod test_support;

pub use assembler::assemble;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use guild_fetcher::GuildFetcher;
pub use presence_resolver::PresenceResolver;
pub use roster::RosterService;
pub use user_fetcher::{UserBatch, UserFetcher};
