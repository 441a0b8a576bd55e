//! # roster-service
//!
//! Application layer: fetches users, guild members and presences through the
//! source traits, caches them, and assembles the display roster together with
//! a progress log describing the fetch.

pub mod dto;
pub mod loading;
pub mod services;

pub use dto::{
    group_by_status, visible_page, DisplayRecord, PageMeta, RosterPage, RosterQuery,
    RosterResponse, RosterSummary, DEFAULT_PER_PAGE,
};
pub use loading::{EventKind, LoadingEvent, LoadingLog, LoadingProgress};
pub use services::{
    assemble, GuildFetcher, PresenceResolver, RosterService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserBatch, UserFetcher,
};
