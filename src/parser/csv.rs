//! CSV file parser

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{DiffError, Result};
use crate::model::{Dataset, Row, Schema};

/// Parser for quoted csv text.
///
/// Every field is kept as the literal string read; an empty field stays an
/// empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser;

impl CsvParser {
    /// Parse a csv file
    pub fn parse(&self, path: &Path) -> Result<Dataset> {
        if !path.exists() {
            return Err(DiffError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        log::debug!("Reading: {}", path.display());
        let file = File::open(path)?;
        self.parse_reader(path.display().to_string(), BufReader::new(file))
    }

    /// Parse csv text from any byte stream, labelling errors with `source`
    pub fn parse_reader<R: Read>(&self, source: impl Into<String>, reader: R) -> Result<Dataset> {
        let source = source.into();
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(QuoteTracker::new(reader));

        let headers = csv_reader
            .headers()
            .map_err(|e| DiffError::malformed(&source, e.to_string()))?
            .clone();
        if headers.is_empty() {
            return Err(DiffError::empty_dataset(source));
        }

        let schema = Schema::from_names(headers.iter()).map_err(|name| {
            DiffError::malformed(&source, format!("duplicate column name '{}'", name))
        })?;

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| DiffError::malformed(&source, e.to_string()))?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(rows.len() + 2);
            rows.push(Row::new(record.iter().map(str::to_string).collect(), line));
        }
        // the csv reader takes an open quote at EOF as the end of the field
        if csv_reader.get_ref().in_open_quote() {
            return Err(DiffError::malformed(
                source,
                "unterminated quoted field at end of input",
            ));
        }

        if rows.is_empty() {
            return Err(DiffError::empty_dataset(source));
        }

        log::debug!(
            "Read {} rows with columns {:?} from '{}'",
            rows.len(),
            schema.to_vec(),
            source
        );
        Dataset::new(source, schema, rows)
    }
}

/// Quoting state of the byte stream, following the csv reader's rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote inside a quoted field: closes it unless doubled
    QuoteInQuoted,
}

impl QuoteState {
    fn next(self, byte: u8) -> Self {
        match (self, byte) {
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::FieldStart, b'"') => QuoteState::Quoted,
            (_, b',' | b'\n' | b'\r') => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        }
    }
}

/// Reader that follows the quoting state of every byte it passes on
struct QuoteTracker<R> {
    inner: R,
    state: QuoteState,
}

impl<R> QuoteTracker<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            state: QuoteState::FieldStart,
        }
    }

    fn in_open_quote(&self) -> bool {
        self.state == QuoteState::Quoted
    }
}

impl<R: Read> Read for QuoteTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for &byte in &buf[..n] {
            self.state = self.state.next(byte);
        }
        Ok(n)
    }
}
