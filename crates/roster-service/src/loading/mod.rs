//! Loading log - the progress narrative of one roster fetch

mod event_log;

pub use event_log::{EventKind, LoadingEvent, LoadingLog, LoadingProgress};
