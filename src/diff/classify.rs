//! Outer join of two group counts

use super::group::GroupCount;
use super::{ComparisonEntry, DiffLabel};

/// Label a key tuple from its occurrence count on each side.
///
/// Unequal multiplicities are settled in aggregate: the side holding the
/// excess owns the whole key tuple.
pub fn classify(left_count: usize, right_count: usize) -> DiffLabel {
    if left_count == 0 {
        DiffLabel::RightOnly
    } else if right_count == 0 || left_count > right_count {
        DiffLabel::LeftOnly
    } else if right_count > left_count {
        DiffLabel::RightOnly
    } else {
        DiffLabel::Both
    }
}

/// One entry per key tuple in the union of both sides.
///
/// Left keys come first in left order, then keys only seen on the right.
pub fn outer_join(left: &GroupCount<'_>, right: &GroupCount<'_>) -> Vec<ComparisonEntry> {
    let mut entries = Vec::with_capacity(left.len() + right.len());

    for (key, left_count) in left.counts() {
        let right_count = right.count(key);
        entries.push(ComparisonEntry::new(key.clone(), left_count, right_count));
    }
    for (key, right_count) in right.counts() {
        if left.count(key) == 0 {
            entries.push(ComparisonEntry::new(key.clone(), 0, right_count));
        }
    }

    log::debug!(
        "Joined {} left and {} right key tuples into {} entries",
        left.len(),
        right.len(),
        entries.len()
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    #[test]
    fn test_classify_rule() {
        assert_eq!(classify(0, 2), DiffLabel::RightOnly);
        assert_eq!(classify(2, 0), DiffLabel::LeftOnly);
        assert_eq!(classify(3, 1), DiffLabel::LeftOnly);
        assert_eq!(classify(1, 3), DiffLabel::RightOnly);
        assert_eq!(classify(2, 2), DiffLabel::Both);
    }

    #[test]
    fn test_outer_join_union_without_duplicates() {
        let left: Vec<Row> = ["a", "b", "b", "b"]
            .iter()
            .map(|v| Row::new(vec![v.to_string()], 0))
            .collect();
        let right: Vec<Row> = ["c", "b", "a"]
            .iter()
            .map(|v| Row::new(vec![v.to_string()], 0))
            .collect();
        let lg = GroupCount::build(&left, |r| r.project(&[0]));
        let rg = GroupCount::build(&right, |r| r.project(&[0]));

        let entries = outer_join(&lg, &rg);
        let summary: Vec<(&str, usize, usize, DiffLabel)> = entries
            .iter()
            .map(|e| (e.key.values()[0].as_str(), e.left_count, e.right_count, e.label))
            .collect();
        assert_eq!(
            summary,
            [
                ("a", 1, 1, DiffLabel::Both),
                ("b", 3, 1, DiffLabel::LeftOnly),
                ("c", 0, 1, DiffLabel::RightOnly),
            ]
        );
    }
}
