//! Data transfer objects
//!
//! Request DTOs are validated with `validator`; response DTOs serialize to the
//! JSON served by the API. Snowflake IDs are serialized as strings.

mod requests;
mod responses;
mod view;

pub use requests::RosterQuery;
pub use responses::{DisplayRecord, PageMeta, RosterResponse, RosterSummary};
pub use view::{group_by_status, visible_page, RosterPage, DEFAULT_PER_PAGE};
