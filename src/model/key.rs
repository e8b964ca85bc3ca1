//! Key column selection and projection

use indexmap::IndexSet;

use crate::error::{DiffError, Result};

use super::schema::DIFF_COLUMN;
use super::table::{Dataset, Row};

/// Projection of a row onto the key columns, in key order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyTuple(Vec<String>);

impl KeyTuple {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<&str>> for KeyTuple {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

/// Which columns rows are compared on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeySpec {
    /// Every column; both sides must have the same column set
    #[default]
    AllColumns,
    /// An explicit subset present on both sides
    Columns(Vec<String>),
}

impl From<Option<Vec<String>>> for KeySpec {
    fn from(columns: Option<Vec<String>>) -> Self {
        match columns {
            Some(columns) if !columns.is_empty() => KeySpec::Columns(columns),
            _ => KeySpec::AllColumns,
        }
    }
}

/// A key validated against both datasets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyProjection {
    names: Vec<String>,
    left_indices: Vec<usize>,
    right_indices: Vec<usize>,
    partial: bool,
}

impl KeyProjection {
    /// Validate `spec` against both datasets.
    ///
    /// The reserved column check runs first and applies in both modes.
    pub fn resolve(left: &Dataset, right: &Dataset, spec: &KeySpec) -> Result<Self> {
        for dataset in [left, right] {
            if dataset.schema.contains(DIFF_COLUMN) {
                return Err(DiffError::ReservedColumn {
                    source_name: dataset.source.clone(),
                    column: DIFF_COLUMN.to_string(),
                });
            }
        }

        match spec {
            KeySpec::AllColumns => Self::all_columns(left, right),
            KeySpec::Columns(columns) => Self::explicit(left, right, columns),
        }
    }

    fn all_columns(left: &Dataset, right: &Dataset) -> Result<Self> {
        if !left.schema.same_columns(&right.schema) {
            let difference = left
                .schema
                .names()
                .filter(|n| !right.schema.contains(n))
                .chain(right.schema.names().filter(|n| !left.schema.contains(n)))
                .map(str::to_string)
                .collect();
            return Err(DiffError::ColumnMismatch {
                difference,
                left: left.schema.to_vec(),
                right: right.schema.to_vec(),
            });
        }

        let names = left.schema.to_vec();
        let left_indices = (0..names.len()).collect();
        let right_indices = names
            .iter()
            .filter_map(|n| right.schema.index_of(n))
            .collect();
        Ok(Self {
            names,
            left_indices,
            right_indices,
            partial: false,
        })
    }

    fn explicit(left: &Dataset, right: &Dataset, columns: &[String]) -> Result<Self> {
        let names: IndexSet<&String> = columns.iter().collect();
        let missing = |dataset: &Dataset| -> Vec<String> {
            names
                .iter()
                .filter(|n| !dataset.schema.contains(n))
                .map(|n| n.to_string())
                .collect()
        };
        let left_missing = missing(left);
        let right_missing = missing(right);
        if !left_missing.is_empty() || !right_missing.is_empty() {
            return Err(DiffError::UnknownColumn {
                left_source: left.source.clone(),
                left_missing,
                right_source: right.source.clone(),
                right_missing,
            });
        }

        let names: Vec<String> = names.into_iter().cloned().collect();
        let left_indices = names
            .iter()
            .filter_map(|n| left.schema.index_of(n))
            .collect();
        let right_indices = names
            .iter()
            .filter_map(|n| right.schema.index_of(n))
            .collect();
        Ok(Self {
            names,
            left_indices,
            right_indices,
            partial: true,
        })
    }

    /// Key column names in key order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn left_indices(&self) -> &[usize] {
        &self.left_indices
    }

    pub fn right_indices(&self) -> &[usize] {
        &self.right_indices
    }

    /// True when comparing on an explicit column list
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn left_key(&self, row: &Row) -> KeyTuple {
        row.project(&self.left_indices)
    }

    pub fn right_key(&self, row: &Row) -> KeyTuple {
        row.project(&self.right_indices)
    }
}
