//! Response DTOs for API endpoints

use roster_core::{Activity, ClientStatus, Snowflake, UserStatus};
use serde::{Deserialize, Serialize};

use crate::loading::{EventKind, LoadingEvent, LoadingProgress};

/// One roster entry, as shown in the member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub id: Snowflake,
    pub username: String,
    pub display_name: Option<String>,
    pub discriminator: String,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub banner_color: Option<String>,
    pub status: UserStatus,
    /// System badges in flag order, then role badges
    pub badges: Vec<String>,
    pub bot: bool,
    #[serde(default)]
    pub client_status: ClientStatus,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Header numbers of a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total: usize,
    /// Members whose status is not offline
    pub online: usize,
    /// Nothing loaded and something went wrong
    pub retry_suggested: bool,
}

impl RosterSummary {
    pub fn new(records: &[DisplayRecord], events: &[LoadingEvent]) -> Self {
        Self {
            total: records.len(),
            online: records.iter().filter(|r| r.status.is_visible()).count(),
            retry_suggested: records.is_empty()
                && events.iter().any(|e| e.kind == EventKind::Error),
        }
    }
}

/// "Load more" position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: usize,
    pub per_page: usize,
    /// Records available before paging
    pub total: usize,
    pub has_more: bool,
}

/// Result of one roster load
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub records: Vec<DisplayRecord>,
    pub events: Vec<LoadingEvent>,
    pub summary: RosterSummary,
    pub progress: LoadingProgress,
    pub guild_id: Option<Snowflake>,
    /// Sequence number of the load that produced this response
    pub generation: u64,
    /// A newer load started before this one finished
    pub superseded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

impl RosterResponse {
    /// Order records online, idle, dnd, offline
    #[must_use]
    pub fn grouped(mut self) -> Self {
        self.records = super::group_by_status(std::mem::take(&mut self.records));
        self
    }

    /// Order records by status and keep the first `page * per_page` of them
    #[must_use]
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        let grouped = super::group_by_status(std::mem::take(&mut self.records));
        let page = super::visible_page(&grouped, page, per_page);
        self.pagination = Some(PageMeta {
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            has_more: page.has_more,
        });
        self.records = page.records;
        self
    }
}
