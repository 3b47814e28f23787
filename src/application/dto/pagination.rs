use serde::{Deserialize, Serialize};

/// Offset-based pagination envelope derived purely from the requested page
/// and the total-count query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPage {
    pub limit: u32,
    pub offset: u32,
    /// Number of items actually returned for this page.
    pub count: u32,
    pub total: u64,
    pub has_more: bool,
    /// Wider than the inputs: `offset` and `limit` arrive unclamped from
    /// the query string and their sum must not overflow.
    pub next_offset: u64,
}

impl OffsetPage {
    pub fn new(limit: u32, offset: u32, count: u32, total: u64) -> Self {
        let next_offset = u64::from(offset) + u64::from(limit);
        Self {
            limit,
            offset,
            count,
            total,
            has_more: next_offset < total,
            next_offset,
        }
    }
}
