//! Output formatting for diff reports

mod csv;
mod json;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::diff::DiffReport;
use crate::error::Result;

pub use self::csv::{CsvReport, RawCountsReport};
pub use self::json::{JsonSummary, SummaryContext};

/// Trait for report formatters
pub trait OutputFormatter {
    /// Render the report to a writer
    fn render(&self, report: &DiffReport, writer: &mut dyn Write) -> Result<()>;
}

/// Render `report` into the file at `path`.
///
/// The file is created or truncated, fully written and flushed before this
/// returns.
pub fn write_to_file(
    formatter: &dyn OutputFormatter,
    report: &DiffReport,
    path: &Path,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    formatter.render(report, &mut writer)?;
    writer.flush()?;
    log::info!("Wrote: {}", path.display());
    Ok(())
}
