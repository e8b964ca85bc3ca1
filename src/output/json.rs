//! JSON summary output

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::diff::DiffReport;
use crate::error::Result;

use super::OutputFormatter;

/// Paths the summary refers to
#[derive(Debug, Clone)]
pub struct SummaryContext {
    pub left: String,
    pub right: String,
    pub out: String,
}

impl SummaryContext {
    pub fn new(left: &Path, right: &Path, out: &Path) -> Self {
        Self {
            left: left.display().to_string(),
            right: right.display().to_string(),
            out: out.display().to_string(),
        }
    }
}

/// Machine-readable summary of a comparison
pub struct JsonSummary {
    context: SummaryContext,
    pretty: bool,
}

impl JsonSummary {
    pub fn new(context: SummaryContext) -> Self {
        Self {
            context,
            pretty: true,
        }
    }

    pub fn compact(context: SummaryContext) -> Self {
        Self {
            context,
            pretty: false,
        }
    }
}

#[derive(Serialize)]
struct JsonSummaryOutput<'a> {
    left: &'a str,
    right: &'a str,
    out: &'a str,
    differs: bool,
    both: usize,
    left_only: usize,
    right_only: usize,
}

impl OutputFormatter for JsonSummary {
    fn render(&self, report: &DiffReport, writer: &mut dyn Write) -> Result<()> {
        let output = JsonSummaryOutput {
            left: &self.context.left,
            right: &self.context.right,
            out: &self.context.out,
            differs: report.differs(),
            both: report.summary.both,
            left_only: report.summary.left_only,
            right_only: report.summary.right_only,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
