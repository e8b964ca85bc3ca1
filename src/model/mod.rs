//! Data model for csv datasets

mod key;
mod schema;
mod table;

pub use key::{KeyProjection, KeySpec, KeyTuple};
pub use schema::{Schema, DIFF_COLUMN};
pub use table::{Dataset, Row};
