//! Error types for the domain layer

mod source_error;

pub use source_error::{SourceError, SourceResult};
