//! Service layer error types

use std::fmt;
use std::time::Duration;

/// Service layer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// `ServiceContextBuilder::build` was called without this source
    MissingSource(&'static str),

    /// An operation ran past its deadline
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource(name) => write!(f, "{name} is required"),
            Self::Timeout { operation, after } => {
                write!(f, "{operation} timed out after {}s", after.as_secs())
            }
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a timeout error
    pub fn timeout(operation: &'static str, after: Duration) -> Self {
        Self::Timeout { operation, after }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
