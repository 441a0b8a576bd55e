//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use roster_core::Snowflake;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Query string of `GET /api/v1/roster`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RosterQuery {
    /// Guild to load; the configured guild (or the fallback roster) when absent
    #[validate(custom(function = "validate_snowflake"))]
    pub guild_id: Option<String>,

    /// Case-insensitive search over username and display name
    #[validate(length(max = 100, message = "Search query must be at most 100 characters"))]
    pub q: Option<String>,

    /// "Load more" page (1-based); all records when absent
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<usize>,

    #[validate(range(min = 1, max = 100, message = "per_page must be 1-100"))]
    pub per_page: Option<usize>,
}

impl RosterQuery {
    /// Parsed guild id; call after validation
    pub fn guild_id(&self) -> Option<Snowflake> {
        self.guild_id
            .as_deref()
            .and_then(|raw| Snowflake::parse(raw).ok())
    }

    /// Search text, `None` when empty
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

fn validate_snowflake(value: &str) -> Result<(), ValidationError> {
    Snowflake::parse(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("snowflake").with_message("Must be a numeric id".into()))
}
