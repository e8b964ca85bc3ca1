//! Multiset grouping of rows by key tuple

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::model::{KeyTuple, Row};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Rows of one dataset grouped by key tuple.
///
/// Groups keep first-occurrence order and the rows inside a group keep
/// input order, so the count of a key is the length of its group.
#[derive(Debug, Default)]
pub struct GroupCount<'a> {
    groups: FxIndexMap<KeyTuple, Vec<&'a Row>>,
}

impl<'a> GroupCount<'a> {
    /// Group `rows` by the tuple `key` projects from each one
    pub fn build<I, F>(rows: I, key: F) -> Self
    where
        I: IntoIterator<Item = &'a Row>,
        F: Fn(&Row) -> KeyTuple,
    {
        let mut groups: FxIndexMap<KeyTuple, Vec<&'a Row>> = FxIndexMap::default();
        for row in rows {
            groups.entry(key(row)).or_default().push(row);
        }
        Self { groups }
    }

    /// Number of rows projecting to `key`; zero if absent
    pub fn count(&self, key: &KeyTuple) -> usize {
        self.groups.get(key).map_or(0, Vec::len)
    }

    /// Rows projecting to `key`, in input order
    pub fn rows(&self, key: &KeyTuple) -> &[&'a Row] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct key tuples with their counts, in first-occurrence order
    pub fn counts(&self) -> impl Iterator<Item = (&KeyTuple, usize)> {
        self.groups.iter().map(|(k, rows)| (k, rows.len()))
    }

    /// Number of distinct key tuples
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Keep the first row for every distinct key tuple, preserving input order
pub fn dedup_rows<'a, F>(rows: &'a [Row], key: F) -> Vec<&'a Row>
where
    F: Fn(&Row) -> KeyTuple,
{
    let mut seen = FxHashSet::default();
    rows.iter().filter(|&row| seen.insert(key(row))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let (id, val) = v.split_once(':').unwrap();
                Row::new(vec![id.to_string(), val.to_string()], i + 2)
            })
            .collect()
    }

    #[test]
    fn test_counts_per_key() {
        let rows = rows(&["1:x", "2:y", "1:z", "1:x"]);
        let groups = GroupCount::build(&rows, |r| r.project(&[0]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.count(&vec!["1"].into()), 3);
        assert_eq!(groups.count(&vec!["2"].into()), 1);
        assert_eq!(groups.count(&vec!["3"].into()), 0);

        let first: Vec<usize> = groups
            .rows(&vec!["1"].into())
            .iter()
            .map(|r| r.source_line)
            .collect();
        assert_eq!(first, [2, 4, 5]);

        let order: Vec<&str> = groups.counts().map(|(k, _)| k.values()[0].as_str()).collect();
        assert_eq!(order, ["1", "2"]);
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let rows = rows(&["1:x", "1:y", "1:x", "2:y"]);

        let full = dedup_rows(&rows, |r| r.project(&[0, 1]));
        let lines: Vec<usize> = full.iter().map(|r| r.source_line).collect();
        assert_eq!(lines, [2, 3, 5]);

        let by_id = dedup_rows(&rows, |r| r.project(&[0]));
        let lines: Vec<usize> = by_id.iter().map(|r| r.source_line).collect();
        assert_eq!(lines, [2, 5]);
    }
}
