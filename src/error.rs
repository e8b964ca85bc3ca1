//! Error types for csv comparison

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiffError>;

/// Fatal errors raised while reading, validating or comparing datasets
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Invalid input path: '{}'", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Not a csv file '{source_name}': {message}")]
    MalformedInput {
        source_name: String,
        message: String,
    },

    #[error("No rows in '{source_name}'")]
    EmptyDataset { source_name: String },

    #[error(
        "Mismatch in column names {}\n\n  left: {}\n  right: {}",
        quoted_list(.difference),
        quoted_list(.left),
        quoted_list(.right)
    )]
    ColumnMismatch {
        /// Names present on exactly one side
        difference: Vec<String>,
        left: Vec<String>,
        right: Vec<String>,
    },

    #[error(
        "Unknown key column(s): {}",
        missing_by_side(.left_source, .left_missing, .right_source, .right_missing)
    )]
    UnknownColumn {
        left_source: String,
        left_missing: Vec<String>,
        right_source: String,
        right_missing: Vec<String>,
    },

    #[error("'{source_name}' includes reserved column name '{column}'")]
    ReservedColumn { source_name: String, column: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiffError {
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn empty_dataset(source_name: impl Into<String>) -> Self {
        Self::EmptyDataset {
            source_name: source_name.into(),
        }
    }
}

fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}

fn missing_by_side(
    left_source: &str,
    left_missing: &[String],
    right_source: &str,
    right_missing: &[String],
) -> String {
    let mut parts = Vec::new();
    if !left_missing.is_empty() {
        parts.push(format!("{} not in '{}'", quoted_list(left_missing), left_source));
    }
    if !right_missing.is_empty() {
        parts.push(format!("{} not in '{}'", quoted_list(right_missing), right_source));
    }
    parts.join("; ")
}
