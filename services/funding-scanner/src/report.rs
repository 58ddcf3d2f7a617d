//! Report output: the console listing and the error log.

use fundtrace_models::{ErrorEntry, FundingRecord};
use fundtrace_utils::{FundtraceError, FundtraceResult, ReportFormat};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::walker::ScanReport;

const SEPARATOR_WIDTH: usize = 40;

/// Prints scan results and persists per-file errors.
#[derive(Debug, Clone)]
pub struct Reporter {
    format: ReportFormat,
    log_file_path: PathBuf,
}

impl Reporter {
    pub fn new(format: ReportFormat, log_file_path: impl Into<PathBuf>) -> Self {
        Self {
            format,
            log_file_path: log_file_path.into(),
        }
    }

    /// Writes the report to `out`. When errors exist they are written to the
    /// log file and a one-line summary follows; in JSON mode the summary goes
    /// to `notices` so `out` stays parseable.
    pub fn emit<W: Write, N: Write>(
        &self,
        report: &ScanReport,
        out: &mut W,
        notices: &mut N,
    ) -> FundtraceResult<()> {
        match self.format {
            ReportFormat::Text => render_text(&report.records, out).map_err(write_error)?,
            ReportFormat::Json => render_json(report, out)?,
        }

        if report.has_errors() {
            write_error_log(&self.log_file_path, &report.errors)?;
            let summary = error_summary(report.errors.len(), &self.log_file_path);
            let written = match self.format {
                ReportFormat::Text => writeln!(out, "{}", summary),
                ReportFormat::Json => writeln!(notices, "{}", summary),
            };
            written.map_err(write_error)?;
        }

        out.flush().map_err(write_error)
    }
}

/// Four lines per record: name, folder, sources, separator.
pub fn render_text<W: Write>(records: &[FundingRecord], out: &mut W) -> std::io::Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    for record in records {
        writeln!(out, "PDF: {}", record.pdf_name)?;
        writeln!(out, "Folder: {}", record.folder)?;
        writeln!(out, "Funding Sources: {}", record.joined_sources())?;
        writeln!(out, "{}", separator)?;
    }
    Ok(())
}

pub fn render_json<W: Write>(report: &ScanReport, out: &mut W) -> FundtraceResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(write_error)
}

/// Overwrites `path` with one line per error, newline-joined.
pub fn write_error_log(path: &Path, errors: &[ErrorEntry]) -> FundtraceResult<()> {
    let contents = errors
        .iter()
        .map(ErrorEntry::log_line)
        .collect::<Vec<_>>()
        .join("\n");

    std::fs::write(path, contents).map_err(|e| {
        FundtraceError::report(format!("cannot write error log {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), errors = errors.len(), "Wrote error log");
    Ok(())
}

pub fn error_summary(count: usize, log_path: &Path) -> String {
    format!("Encountered {} errors (see {})", count, log_path.display())
}

fn write_error(error: std::io::Error) -> FundtraceError {
    FundtraceError::report(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn record(name: &str, folder: &str, sources: &[&str]) -> FundingRecord {
        let sources: BTreeSet<String> = sources.iter().map(|s| s.to_string()).collect();
        FundingRecord::new(name, folder, sources).unwrap()
    }

    #[test]
    fn test_text_layout() {
        let mut out = Vec::new();
        render_text(&[record("a.pdf", "2020", &["NSF", "NASA"])], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "PDF: a.pdf\nFolder: 2020\nFunding Sources: NASA, NSF\n{}\n",
            "-".repeat(40)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_clean_run_writes_no_log() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("errors.log");
        let report = ScanReport {
            records: vec![record("a.pdf", ".", &["NIH"])],
            ..ScanReport::default()
        };

        let mut out = Vec::new();
        let mut notices = Vec::new();
        Reporter::new(ReportFormat::Text, &log)
            .emit(&report, &mut out, &mut notices)
            .unwrap();

        assert!(!log.exists());
        assert!(!String::from_utf8(out).unwrap().contains("Encountered"));
    }

    #[test]
    fn test_error_log_overwrites_and_summarizes() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("errors.log");
        std::fs::write(&log, "stale line from an earlier run\n").unwrap();

        let report = ScanReport {
            errors: vec![
                ErrorEntry::new("/p/one.pdf", "bad header"),
                ErrorEntry::new("/p/two.pdf", "encrypted"),
            ],
            ..ScanReport::default()
        };

        let mut out = Vec::new();
        let mut notices = Vec::new();
        Reporter::new(ReportFormat::Text, &log)
            .emit(&report, &mut out, &mut notices)
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&log).unwrap(),
            "/p/one.pdf | Error: bad header\n/p/two.pdf | Error: encrypted"
        );
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n", error_summary(2, &log)));
        assert!(notices.is_empty());
    }

    #[test]
    fn test_json_keeps_stdout_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("errors.log");
        let report = ScanReport {
            records: vec![record("a.pdf", ".", &["DOE"])],
            errors: vec![ErrorEntry::new("/p/bad.pdf", "truncated")],
            ..ScanReport::default()
        };

        let mut out = Vec::new();
        let mut notices = Vec::new();
        Reporter::new(ReportFormat::Json, &log)
            .emit(&report, &mut out, &mut notices)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["records"][0]["funding_sources"][0], "DOE");
        assert_eq!(value["errors"][0]["pdf_path"], "/p/bad.pdf");
        assert!(String::from_utf8(notices).unwrap().starts_with("Encountered 1 errors"));
        assert!(log.exists());
    }

    #[test]
    fn test_unwritable_log_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("missing-dir").join("errors.log");
        let err = write_error_log(&log, &[ErrorEntry::new("/p/x.pdf", "bad")]).unwrap_err();

        assert_eq!(err.error_code(), "REPORT_ERROR");
    }
}
