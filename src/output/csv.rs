//! CSV report output

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::diff::DiffReport;
use crate::error::Result;
use crate::model::DIFF_COLUMN;

use super::OutputFormatter;

/// The comparison report: report columns plus a trailing `diff`, all quoted
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReport;

impl OutputFormatter for CsvReport {
    fn render(&self, report: &DiffReport, writer: &mut dyn Write) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(writer);

        csv_writer.write_record(report.header())?;
        for entry in &report.entries {
            csv_writer.write_record(entry.output_row())?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Raw classification table: key columns, both counts and the label
#[derive(Debug, Default, Clone, Copy)]
pub struct RawCountsReport;

impl OutputFormatter for RawCountsReport {
    fn render(&self, report: &DiffReport, writer: &mut dyn Write) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(writer);

        let mut header: Vec<&str> = report.key_columns.iter().map(String::as_str).collect();
        header.extend(["count_left", "count_right", DIFF_COLUMN]);
        csv_writer.write_record(&header)?;

        for entry in &report.entries {
            let mut record: Vec<String> = entry.key.values().to_vec();
            record.push(entry.left_count.to_string());
            record.push(entry.right_count.to_string());
            record.push(entry.label.to_string());
            csv_writer.write_record(&record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::model::KeySpec;
    use crate::parser::CsvParser;

    fn report(left: &str, right: &str, key: Option<&str>) -> DiffReport {
        let left = CsvParser.parse_reader("l", left.as_bytes()).unwrap();
        let right = CsvParser.parse_reader("r", right.as_bytes()).unwrap();
        let mut engine = DiffEngine::default();
        if let Some(key) = key {
            engine = engine.with_key_spec(KeySpec::Columns(vec![key.to_string()]));
        }
        engine.diff(&left, &right).unwrap()
    }

    fn render(formatter: &dyn OutputFormatter, report: &DiffReport) -> String {
        let mut buf = Vec::new();
        formatter.render(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_is_fully_quoted_with_trailing_diff() {
        let report = report("id,val\n2,\"a,b\"\n1,x\n", "id,val\n1,x\n", None);
        assert_eq!(
            render(&CsvReport, &report),
            "\"id\",\"val\",\"diff\"\n\"1\",\"x\",\"both\"\n\"2\",\"a,b\",\"left_only\"\n"
        );
    }

    #[test]
    fn test_raw_counts_include_multiplicities() {
        let report = report("id,val\n1,x\n1,y\n", "id,val\n1,z\n", Some("id"));
        assert_eq!(
            render(&RawCountsReport, &report),
            "\"id\",\"count_left\",\"count_right\",\"diff\"\n\"1\",\"2\",\"1\",\"left_only\"\n"
        );
    }
}
