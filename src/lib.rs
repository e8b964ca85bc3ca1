//! csvdiff - Multiset diff for csv files
//!
//! Compares two csv files as multisets of rows and labels every distinct row
//! (or key tuple, when comparing on a subset of columns) as `both`,
//! `left_only` or `right_only`.

pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;

pub use config::Config;
pub use diff::{compute_diff, DiffEngine, DiffLabel, DiffReport};
pub use error::{DiffError, Result};
pub use model::Dataset;
pub use pipeline::run;
