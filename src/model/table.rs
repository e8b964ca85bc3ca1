//! Dataset and Row data structures

use crate::error::{DiffError, Result};

use super::key::KeyTuple;
use super::schema::Schema;

/// A row in the dataset
///
/// Cells are positional; the owning [`Dataset`]'s schema names them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<String>,
    /// Original line number in the source (1-indexed, header is line 1)
    pub source_line: usize,
}

impl Row {
    pub fn new(cells: Vec<String>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Project the row onto the given column indices
    pub fn project(&self, indices: &[usize]) -> KeyTuple {
        KeyTuple::new(
            indices
                .iter()
                .map(|&i| self.cells.get(i).cloned().unwrap_or_default())
                .collect(),
        )
    }
}

/// A fully materialized csv input
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Where the data came from, used in messages
    pub source: String,
    /// Column set shared by every row
    pub schema: Schema,
    /// All rows in input order
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset, checking that every row has exactly the schema's width
    pub fn new(source: impl Into<String>, schema: Schema, rows: Vec<Row>) -> Result<Self> {
        let source = source.into();
        if let Some(row) = rows.iter().find(|r| r.cells.len() != schema.len()) {
            return Err(DiffError::malformed(
                source,
                format!(
                    "line {} has {} fields, expected {}",
                    row.source_line,
                    row.cells.len(),
                    schema.len()
                ),
            ));
        }
        Ok(Self {
            source,
            schema,
            rows,
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
