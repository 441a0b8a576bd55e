//! # roster-api
//!
//! REST API server built with Axum framework. Serves the assembled roster of
//! a guild (or of the configured fallback ids) as JSON.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
