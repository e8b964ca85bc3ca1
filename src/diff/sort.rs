//! Deterministic report ordering

use crate::model::KeyTuple;

use super::ComparisonEntry;

/// Case-insensitive sort key, falling back to the exact values on ties
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    folded: Vec<String>,
    exact: KeyTuple,
}

impl SortKey {
    fn new(key: &KeyTuple) -> Self {
        Self {
            folded: key.values().iter().map(|v| v.to_lowercase()).collect(),
            exact: key.clone(),
        }
    }
}

/// Order entries by key columns, first column first, ignoring case
pub fn sort_entries(entries: &mut [ComparisonEntry]) {
    entries.sort_by_cached_key(|entry| SortKey::new(&entry.key));
}
