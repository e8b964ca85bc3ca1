//! Diff engine for comparing datasets as multisets of rows

pub mod classify;
pub mod group;
mod reattach;
mod sort;

use serde::Serialize;

use crate::config::Config;
use crate::error::{DiffError, Result};
use crate::model::{Dataset, KeyProjection, KeySpec, KeyTuple, Row, DIFF_COLUMN};

pub use classify::classify;
pub use group::GroupCount;
pub use reattach::OutputLayout;

/// Classification of a key tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLabel {
    Both,
    LeftOnly,
    RightOnly,
}

impl DiffLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            DiffLabel::Both => "both",
            DiffLabel::LeftOnly => "left_only",
            DiffLabel::RightOnly => "right_only",
        }
    }
}

impl std::fmt::Display for DiffLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One distinct key tuple of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonEntry {
    pub key: KeyTuple,
    /// Occurrences of the key on the left side
    pub left_count: usize,
    /// Occurrences of the key on the right side
    pub right_count: usize,
    pub label: DiffLabel,
    /// Full report row, set in partial-key mode only
    pub row: Option<Vec<String>>,
}

impl ComparisonEntry {
    /// Create an entry labelled from its counts
    pub fn new(key: KeyTuple, left_count: usize, right_count: usize) -> Self {
        Self {
            key,
            left_count,
            right_count,
            label: classify(left_count, right_count),
            row: None,
        }
    }

    /// Report values: the full row when reattached, else the key tuple
    pub fn values(&self) -> &[String] {
        self.row.as_deref().unwrap_or_else(|| self.key.values())
    }

    /// Report values followed by the label
    pub fn output_row(&self) -> Vec<&str> {
        self.values()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.label.as_str()))
            .collect()
    }
}

/// Counts per label
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub both: usize,
    pub left_only: usize,
    pub right_only: usize,
}

impl DiffSummary {
    fn from_entries(entries: &[ComparisonEntry]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            match entry.label {
                DiffLabel::Both => summary.both += 1,
                DiffLabel::LeftOnly => summary.left_only += 1,
                DiffLabel::RightOnly => summary.right_only += 1,
            }
        }
        summary
    }

    /// True if any key tuple is not matched on both sides
    pub fn differs(&self) -> bool {
        self.left_only > 0 || self.right_only > 0
    }
}

/// Result of comparing two datasets
#[derive(Debug, Clone)]
pub struct DiffReport {
    /// Key columns in key order
    pub key_columns: Vec<String>,
    /// Report columns, without the trailing `diff`
    pub columns: Vec<String>,
    /// Entries in report order
    pub entries: Vec<ComparisonEntry>,
    pub summary: DiffSummary,
}

impl DiffReport {
    fn new(key_columns: Vec<String>, columns: Vec<String>, entries: Vec<ComparisonEntry>) -> Self {
        let summary = DiffSummary::from_entries(&entries);
        Self {
            key_columns,
            columns,
            entries,
            summary,
        }
    }

    /// True if the datasets differ
    pub fn differs(&self) -> bool {
        self.summary.differs()
    }

    /// Report header, ending with the `diff` column
    pub fn header(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(DIFF_COLUMN))
            .collect()
    }

    /// Entries carrying the given label, in report order
    pub fn entries_with(&self, label: DiffLabel) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries.iter().filter(move |e| e.label == label)
    }
}

/// Main diff engine
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    key_spec: KeySpec,
    ignore_duplicates: bool,
}

impl DiffEngine {
    /// Create a diff engine from the comparison options of `config`
    pub fn new(config: &Config) -> Self {
        Self {
            key_spec: KeySpec::from(config.key_columns.clone()),
            ignore_duplicates: config.ignore_duplicates,
        }
    }

    pub fn with_key_spec(mut self, key_spec: KeySpec) -> Self {
        self.key_spec = key_spec;
        self
    }

    pub fn with_ignore_duplicates(mut self, ignore: bool) -> Self {
        self.ignore_duplicates = ignore;
        self
    }

    /// Compare two datasets.
    ///
    /// All validation happens before grouping, so an error means nothing was
    /// computed.
    pub fn diff(&self, left: &Dataset, right: &Dataset) -> Result<DiffReport> {
        let key = KeyProjection::resolve(left, right, &self.key_spec)?;
        if key.is_partial() {
            log::info!("Using column names {:?} as key", key.names());
        }

        let left_rows = self.prepare(left, |r| key.left_key(r))?;
        let right_rows = self.prepare(right, |r| key.right_key(r))?;

        let left_groups = GroupCount::build(left_rows, |r| key.left_key(r));
        let right_groups = GroupCount::build(right_rows, |r| key.right_key(r));

        let mut entries = classify::outer_join(&left_groups, &right_groups);

        let columns = if key.is_partial() {
            let layout = OutputLayout::new(&left.schema, &right.schema, &key);
            layout.attach_all(&mut entries, &left_groups, &right_groups);
            layout.columns().to_vec()
        } else {
            key.names().to_vec()
        };

        sort::sort_entries(&mut entries);

        Ok(DiffReport::new(key.names().to_vec(), columns, entries))
    }

    /// Rows of one side that take part in grouping
    fn prepare<'a, F>(&self, dataset: &'a Dataset, key: F) -> Result<Vec<&'a Row>>
    where
        F: Fn(&Row) -> KeyTuple,
    {
        let rows: Vec<&Row> = if self.ignore_duplicates {
            let rows = group::dedup_rows(&dataset.rows, key);
            let dropped = dataset.row_count() - rows.len();
            if dropped > 0 {
                log::debug!("Ignoring {} duplicate rows in '{}'", dropped, dataset.source);
            }
            rows
        } else {
            dataset.rows.iter().collect()
        };

        if rows.is_empty() {
            return Err(DiffError::empty_dataset(dataset.source.clone()));
        }
        Ok(rows)
    }
}

/// Convenience function to compute diff
pub fn compute_diff(left: &Dataset, right: &Dataset, config: &Config) -> Result<DiffReport> {
    DiffEngine::new(config).diff(left, right)
}
