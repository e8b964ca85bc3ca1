//! Column set of a dataset

use indexmap::IndexSet;

/// Name reserved for the classification column of the report
pub const DIFF_COLUMN: &str = "diff";

/// Ordered set of column names shared by every row of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: IndexSet<String>,
}

impl Schema {
    /// Build a schema from header names.
    ///
    /// Returns the first repeated name as the error, since positional cells
    /// could no longer be addressed by name.
    pub fn from_names<I, S>(names: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns = IndexSet::new();
        for name in names {
            let name = name.into();
            if columns.contains(&name) {
                return Err(name);
            }
            columns.insert(name);
        }
        Ok(Self { columns })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Column name at a position
    pub fn name(&self, index: usize) -> Option<&str> {
        self.columns.get_index(index).map(String::as_str)
    }

    /// Column names in header order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Owned copy of the names in header order
    pub fn to_vec(&self) -> Vec<String> {
        self.columns.iter().cloned().collect()
    }

    /// True if both schemas hold the same names, in any order
    pub fn same_columns(&self, other: &Schema) -> bool {
        self.len() == other.len() && self.names().all(|n| other.contains(n))
    }
}
