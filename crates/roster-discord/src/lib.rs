//! # roster-discord
//!
//! Discord REST API client. Implements the `roster-core` source traits on top
//! of `reqwest`, mapping upstream payloads onto domain entities.
//!
//! Endpoints used:
//! - `GET /users/{id}`
//! - `GET /users/{id}/presence`
//! - `GET /guilds/{guild_id}/members?limit=100`
//! - `GET /guilds/{guild_id}/presences`

pub mod client;
pub mod mappers;
pub mod models;
pub mod sources;

pub use client::{DiscordClient, DEFAULT_API_BASE, MEMBER_PAGE_LIMIT};
