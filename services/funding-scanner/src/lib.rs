//! Fundtrace Funding Scanner
//!
//! Walks a folder of research papers, extracts the text of every PDF and
//! reports the funding acknowledgments found in each.

pub mod extraction;
pub mod pdf_processor;
pub mod report;
pub mod walker;

use fundtrace_utils::{AppConfig, FundtraceResult};
use std::io::Write;

pub use extraction::{FundingExtractor, FundingMatcher};
pub use pdf_processor::{PageTextSource, PdfExtractSource};
pub use report::Reporter;
pub use walker::{FundingScanner, PdfTarget, ScanReport};

/// Scans the configured root with the `pdf-extract` backend and emits the
/// report. Only configuration, traversal and report failures are returned.
pub fn run<W: Write, N: Write>(
    config: &AppConfig,
    out: &mut W,
    notices: &mut N,
) -> FundtraceResult<ScanReport> {
    config.validate()?;

    let scanner = FundingScanner::new(config.scan.clone())?;
    let report = scanner.scan()?;

    Reporter::new(config.report.format, config.scan.log_file_path.clone())
        .emit(&report, out, notices)?;

    Ok(report)
}
