//! Application error types
//!
//! Failures that stop the server from starting or serving.

use roster_core::SourceError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Upstream (Discord API) client could not be created
    #[error("Upstream error: {0}")]
    Upstream(#[from] SourceError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
