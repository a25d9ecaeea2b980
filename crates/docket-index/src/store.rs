use chrono::NaiveDate;
use docket_types::CanonicalRecord;

use crate::Result;

/// Filter applied by [`EventStore::scan`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanFilter {
    /// Keep only records whose RFC 3339 `time` starts with this text
    /// (e.g. `2024-05-01` or `2024-05-01T10`). `None` keeps everything.
    pub time_prefix: Option<String>,
}

impl ScanFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_time_prefix(prefix: impl Into<String>) -> Self {
        Self {
            time_prefix: Some(prefix.into()),
        }
    }

    /// Records from one UTC calendar day
    pub fn for_date(date: NaiveDate) -> Self {
        Self::with_time_prefix(date.format("%Y-%m-%d").to_string())
    }
}

/// Keyed store of canonical records
///
/// Records are unique by `id`; a second `put` with the same id replaces the
/// first. `scan` returns records ordered by `time`, then `id`.
pub trait EventStore {
    fn put(&self, record: &CanonicalRecord) -> Result<()>;

    fn scan(&self, filter: &ScanFilter) -> Result<Vec<CanonicalRecord>>;
}
