//! End-to-end comparison of two csv files

use crate::config::{Config, SummaryFormat};
use crate::diff::{DiffEngine, DiffReport};
use crate::error::Result;
use crate::output::{
    write_to_file, CsvReport, JsonSummary, OutputFormatter, RawCountsReport, SummaryContext,
};
use crate::parser::CsvParser;

/// Read both inputs, compare them and write the report.
///
/// Any read or validation failure returns before the report file is touched.
pub fn run(config: &Config) -> Result<DiffReport> {
    let parser = CsvParser;
    let left = parser.parse(&config.left_file)?;
    let right = parser.parse(&config.right_file)?;

    log::info!(
        "Comparing 'LEFT_CSV={}' 'RIGHT_CSV={}'",
        config.left_file.display(),
        config.right_file.display()
    );
    let report = DiffEngine::new(config).diff(&left, &right)?;
    log_summary(&report);

    if let Some(raw_file) = config.raw_counts_file() {
        write_to_file(&RawCountsReport, &report, &raw_file)?;
    }
    write_to_file(&CsvReport, &report, &config.out_file)?;

    if config.summary_format == SummaryFormat::Json {
        let context = SummaryContext::new(&config.left_file, &config.right_file, &config.out_file);
        JsonSummary::new(context).render(&report, &mut std::io::stdout().lock())?;
    }

    Ok(report)
}

fn log_summary(report: &DiffReport) {
    let summary = &report.summary;
    if summary.both > 0 {
        log::info!("Number of common rows: {}", summary.both);
    }
    if summary.left_only > 0 {
        log::warn!("Number of LEFT_ONLY rows: {}", summary.left_only);
    }
    if summary.right_only > 0 {
        log::warn!("Number of RIGHT_ONLY rows: {}", summary.right_only);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiffError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_report_even_when_equal() {
        let dir = TempDir::new().unwrap();
        let left = dir.path().join("left.csv");
        fs::write(&left, "a,b\n1,2\n").unwrap();
        let out = dir.path().join("report.csv");

        let config = Config::new(left.clone(), left).with_out_file(out.clone());
        let report = run(&config).unwrap();

        assert!(!report.differs());
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "\"a\",\"b\",\"diff\"\n\"1\",\"2\",\"both\"\n"
        );
    }

    #[test]
    fn test_run_fails_without_output_on_empty_input() {
        let dir = TempDir::new().unwrap();
        let left = dir.path().join("left.csv");
        let right = dir.path().join("right.csv");
        fs::write(&left, "a\n1\n").unwrap();
        fs::write(&right, "a\n").unwrap();
        let out = dir.path().join("report.csv");

        let config = Config::new(left, right).with_out_file(out.clone());
        assert!(matches!(run(&config), Err(DiffError::EmptyDataset { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn test_run_dumps_raw_counts_at_debug() {
        let dir = TempDir::new().unwrap();
        let left = dir.path().join("left.csv");
        let right = dir.path().join("right.csv");
        fs::write(&left, "a\n1\n1\n").unwrap();
        fs::write(&right, "a\n1\n").unwrap();
        let out = dir.path().join("report.csv");

        let config = Config::new(left, right)
            .with_out_file(out)
            .with_verbosity(crate::config::Verbosity::Debug);
        let report = run(&config).unwrap();
        assert!(report.differs());

        let raw = fs::read_to_string(dir.path().join("report_raw.csv")).unwrap();
        assert_eq!(
            raw,
            "\"a\",\"count_left\",\"count_right\",\"diff\"\n\"1\",\"2\",\"1\",\"left_only\"\n"
        );
    }
}
