//! Roster view helpers: status grouping and "load more" paging

use serde::Serialize;

use super::DisplayRecord;

/// Records shown per "load more" step
pub const DEFAULT_PER_PAGE: usize = 5;

/// Visible slice of a roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterPage {
    pub records: Vec<DisplayRecord>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub has_more: bool,
}

/// Order records online, idle, dnd, offline. Stable within each group.
pub fn group_by_status(mut records: Vec<DisplayRecord>) -> Vec<DisplayRecord> {
    records.sort_by_key(|r| r.status.rank());
    records
}

/// The first `page * per_page` records. `page` and `per_page` below 1 count as 1.
pub fn visible_page(records: &[DisplayRecord], page: usize, per_page: usize) -> RosterPage {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let end = page.saturating_mul(per_page).min(records.len());

    RosterPage {
        records: records[..end].to_vec(),
        page,
        per_page,
        total: records.len(),
        has_more: end < records.len(),
    }
}
