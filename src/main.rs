//! csvdiff - Multiset diff for csv files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use csvdiff::config::{Config, SummaryFormat, Verbosity, DEFAULT_OUT_FILE};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSummaryFormat {
    Log,
    Json,
}

impl From<CliSummaryFormat> for SummaryFormat {
    fn from(f: CliSummaryFormat) -> Self {
        match f {
            CliSummaryFormat::Log => SummaryFormat::Log,
            CliSummaryFormat::Json => SummaryFormat::Json,
        }
    }
}

/// Compare two csv files as multisets of rows.
///
/// Writes a report with a trailing 'diff' column valued 'both', 'left_only'
/// or 'right_only' for every distinct row. Exit status is 0 if the files hold
/// the same rows (in any order), 1 if they differ and 2 on error.
#[derive(Parser, Debug)]
#[command(name = "csvdiff")]
#[command(author, version, about, long_about)]
#[command(after_help = "Example: csvdiff /path/to/left.csv /path/to/right.csv")]
struct Cli {
    /// Path to first csv file
    #[arg(value_name = "LEFT_CSV")]
    left_csv: PathBuf,

    /// Path to second csv file
    #[arg(value_name = "RIGHT_CSV")]
    right_csv: PathBuf,

    /// Path to output file
    #[arg(long, default_value = DEFAULT_OUT_FILE)]
    out: PathBuf,

    /// Remove duplicate rows (by the compared columns) from both files before
    /// comparing, instead of requiring equal duplicate counts
    #[arg(long, alias = "ignore-duplicates")]
    ignoredups: bool,

    /// Column(s) to compare on (comma-separated); other columns are carried
    /// into the report but not compared
    #[arg(short = 'k', long, alias = "key", value_delimiter = ',')]
    cols: Option<Vec<String>>,

    /// Debug verbosity level between 0-2
    #[arg(long, default_value_t = 1)]
    verbose: u8,

    /// How to report the summary counts
    #[arg(long, value_enum, default_value = "log")]
    summary: CliSummaryFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbosity = Verbosity::from(cli.verbose);

    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .format_timestamp(None)
        .init();

    match run(cli, verbosity) {
        Ok(differs) => {
            if differs {
                ExitCode::from(1) // Differences found
            } else {
                ExitCode::SUCCESS // No differences
            }
        }
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli, verbosity: Verbosity) -> Result<bool> {
    let mut config = Config::new(cli.left_csv, cli.right_csv)
        .with_out_file(cli.out)
        .with_ignore_duplicates(cli.ignoredups)
        .with_verbosity(verbosity)
        .with_summary_format(cli.summary.into());
    if let Some(cols) = cli.cols {
        config = config.with_key_columns(cols);
    }

    let report = csvdiff::run(&config).with_context(|| {
        format!(
            "Failed to compare '{}' with '{}'",
            config.left_file.display(),
            config.right_file.display()
        )
    })?;

    Ok(report.differs())
}
