//! Reader layer for csv inputs

mod csv;

pub use self::csv::CsvParser;
