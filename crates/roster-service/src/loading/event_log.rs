//! Ordered, append-only log of loading events.
//!
//! One fetch cycle writes one log. Every user fetch attempt ends in exactly
//! one `success` or `error` event; network-bound attempts are preceded by a
//! `progress` event.

use roster_cache::SharedClock;
use roster_core::ExternalUser;
use serde::{Deserialize, Serialize};

/// Kind of a loading event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Info,
    Success,
    Error,
    Progress,
}

/// One line of the loading narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingEvent {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    /// User that was just loaded (success events only)
    #[serde(rename = "user_data", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ExternalUser>,
}

/// Event log for one fetch cycle
#[derive(Debug, Clone)]
pub struct LoadingLog {
    clock: SharedClock,
    events: Vec<LoadingEvent>,
}

impl LoadingLog {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            events: Vec::new(),
        }
    }

    fn push(&mut self, kind: EventKind, message: String, user: Option<ExternalUser>) {
        self.events.push(LoadingEvent {
            message,
            kind,
            timestamp_ms: self.clock.now_ms(),
            user,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(EventKind::Info, message.into(), None);
    }

    pub fn progress(&mut self, message: impl Into<String>) {
        self.push(EventKind::Progress, message.into(), None);
    }

    pub fn success(&mut self, message: impl Into<String>, user: ExternalUser) {
        self.push(EventKind::Success, message.into(), Some(user));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(EventKind::Error, message.into(), None);
    }

    /// Append another log's events, keeping their order
    pub fn extend(&mut self, events: impl IntoIterator<Item = LoadingEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[LoadingEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<LoadingEvent> {
        self.events
    }
}

/// How far a load got, derived from its events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingProgress {
    /// Number of `success` events
    pub loaded: usize,
    /// Number of users the load expected
    pub total: usize,
    /// `loaded / total` as a whole percentage, capped at 100
    pub percent: u8,
}

impl LoadingProgress {
    /// Nothing expected counts as complete.
    pub fn from_events(events: &[LoadingEvent], total: usize) -> Self {
        let loaded = events
            .iter()
            .filter(|e| e.kind == EventKind::Success)
            .count();
        let percent = if total == 0 {
            100
        } else {
            u8::try_from((loaded.min(total) * 100) / total).unwrap_or(100)
        };
        Self {
            loaded,
            total,
            percent,
        }
    }
}
