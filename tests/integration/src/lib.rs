//! Integration test utilities for the roster server
//!
//! Boots the API against an `httpmock` server standing in for the Discord
//! API and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
