//! Configuration handling for csvdiff

use std::path::{Path, PathBuf};

use log::LevelFilter;

/// Default report location, relative to the working directory
pub const DEFAULT_OUT_FILE: &str = "csvdiff.csv";

/// Diagnostic verbosity. Never affects the comparison result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Debug,
}

impl From<u8> for Verbosity {
    /// Levels above 2 are clamped to [`Verbosity::Debug`]
    fn from(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            _ => Verbosity::Debug,
        }
    }
}

impl Verbosity {
    /// Log level the CLI installs for this verbosity
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
        }
    }
}

/// How the comparison summary is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Summary counts go to the log only
    #[default]
    Log,
    /// Additionally print a JSON summary on stdout
    Json,
}

/// Configuration for one comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the left csv file
    pub left_file: PathBuf,
    /// Path to the right csv file
    pub right_file: PathBuf,
    /// Path the report is written to
    pub out_file: PathBuf,
    /// Columns to compare on; `None` compares on all columns
    pub key_columns: Option<Vec<String>>,
    /// Collapse duplicate rows on each side before comparing
    pub ignore_duplicates: bool,
    /// Diagnostic verbosity
    pub verbosity: Verbosity,
    /// Summary reporting
    pub summary_format: SummaryFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_file: PathBuf::new(),
            right_file: PathBuf::new(),
            out_file: PathBuf::from(DEFAULT_OUT_FILE),
            key_columns: None,
            ignore_duplicates: false,
            verbosity: Verbosity::default(),
            summary_format: SummaryFormat::default(),
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(left_file: PathBuf, right_file: PathBuf) -> Self {
        Self {
            left_file,
            right_file,
            ..Default::default()
        }
    }

    /// Set the report output path
    pub fn with_out_file(mut self, out_file: PathBuf) -> Self {
        self.out_file = out_file;
        self
    }

    /// Compare on the given columns only
    pub fn with_key_columns(mut self, keys: Vec<String>) -> Self {
        self.key_columns = Some(keys);
        self
    }

    /// Collapse duplicate rows before comparing
    pub fn with_ignore_duplicates(mut self, ignore: bool) -> Self {
        self.ignore_duplicates = ignore;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_summary_format(mut self, format: SummaryFormat) -> Self {
        self.summary_format = format;
        self
    }

    /// Location of the raw counts dump, only written at debug verbosity.
    ///
    /// Placed next to the report: `out/csvdiff.csv` dumps to `out/csvdiff_raw.csv`.
    pub fn raw_counts_file(&self) -> Option<PathBuf> {
        if self.verbosity < Verbosity::Debug {
            return None;
        }
        Some(raw_sibling(&self.out_file))
    }
}

fn raw_sibling(out_file: &Path) -> PathBuf {
    let stem = out_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("csvdiff");
    let name = match out_file.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_raw.{}", stem, ext),
        None => format!("{}_raw", stem),
    };
    out_file.with_file_name(name)
}
