//! Restore non-key columns on report rows when comparing on a partial key

use crate::model::{KeyProjection, Row, Schema};

use super::group::GroupCount;
use super::{ComparisonEntry, DiffLabel};

/// Where each report column takes its value from
#[derive(Debug, Clone)]
struct ColumnSource {
    left: Option<usize>,
    right: Option<usize>,
}

/// Report columns for partial-key mode.
///
/// Left columns in left order, then columns only the right side has.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    columns: Vec<String>,
    sources: Vec<ColumnSource>,
    /// Non-key columns present on both sides, as (left index, right index)
    common: Vec<(usize, usize)>,
}

impl OutputLayout {
    pub fn new(left: &Schema, right: &Schema, key: &KeyProjection) -> Self {
        let mut columns = Vec::with_capacity(left.len() + right.len());
        let mut sources = Vec::with_capacity(left.len() + right.len());
        let mut common = Vec::new();

        for (li, name) in left.names().enumerate() {
            let ri = right.index_of(name);
            if let Some(ri) = ri {
                if !key.names().iter().any(|k| k == name) {
                    common.push((li, ri));
                }
            }
            columns.push(name.to_string());
            sources.push(ColumnSource {
                left: Some(li),
                right: ri,
            });
        }
        for (ri, name) in right.names().enumerate() {
            if !left.contains(name) {
                columns.push(name.to_string());
                sources.push(ColumnSource {
                    left: None,
                    right: Some(ri),
                });
            }
        }

        Self {
            columns,
            sources,
            common,
        }
    }

    /// Report column names, without the trailing `diff`
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Fill `row` on every entry.
    ///
    /// Duplicate-by-key rows whose other columns differ are collapsed onto the
    /// first one; only their number is logged.
    pub fn attach_all(
        &self,
        entries: &mut [ComparisonEntry],
        left: &GroupCount<'_>,
        right: &GroupCount<'_>,
    ) {
        let mut collapsed = 0;
        for entry in entries.iter_mut() {
            let (row, dropped) = self.attach(entry, left, right);
            collapsed += dropped;
            entry.row = Some(row);
        }
        if collapsed > 0 {
            log::debug!(
                "Collapsed {} rows sharing a key with differing non-key values",
                collapsed
            );
        }
    }

    fn attach(
        &self,
        entry: &ComparisonEntry,
        left: &GroupCount<'_>,
        right: &GroupCount<'_>,
    ) -> (Vec<String>, usize) {
        let left_rows = left.rows(&entry.key);
        let right_rows = right.rows(&entry.key);

        match entry.label {
            DiffLabel::LeftOnly => match left_rows.first().copied() {
                Some(first) => (self.fill(Some(first), None), conflicts(first, left_rows)),
                None => (self.fill(None, right_rows.first().copied()), 0),
            },
            DiffLabel::RightOnly => match right_rows.first().copied() {
                Some(first) => (self.fill(None, Some(first)), conflicts(first, right_rows)),
                None => (self.fill(left_rows.first().copied(), None), 0),
            },
            DiffLabel::Both => {
                let Some(first) = left_rows.first().copied() else {
                    return (self.fill(None, right_rows.first().copied()), 0);
                };
                // first left row with an agreeing right row, else the first left row
                let (chosen, paired) = left_rows
                    .iter()
                    .find_map(|&l| {
                        right_rows
                            .iter()
                            .copied()
                            .find(|r| self.agrees(l, r))
                            .map(|r| (l, Some(r)))
                    })
                    .unwrap_or((first, None));
                (self.fill(Some(chosen), paired), conflicts(chosen, left_rows))
            }
        }
    }

    /// True if both rows hold equal values in every common non-key column
    fn agrees(&self, left: &Row, right: &Row) -> bool {
        self.common
            .iter()
            .all(|&(li, ri)| left.get(li) == right.get(ri))
    }

    /// Left values win; right values only fill columns the left side lacks
    fn fill(&self, left: Option<&Row>, right: Option<&Row>) -> Vec<String> {
        self.sources
            .iter()
            .map(|source| {
                let from_left = source.left.and_then(|i| left.and_then(|r| r.get(i)));
                let from_right = source.right.and_then(|i| right.and_then(|r| r.get(i)));
                from_left.or(from_right).unwrap_or_default().to_string()
            })
            .collect()
    }
}

fn conflicts(first: &Row, rows: &[&Row]) -> usize {
    rows.iter().filter(|r| r.cells != first.cells).count()
}
