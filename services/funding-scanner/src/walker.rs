//! Folder Walker
//!
//! Discovers PDFs under the scan root and runs the extractor over each one,
//! sequentially, collecting funding records and per-file errors.

use fundtrace_models::{ErrorEntry, FileOutcome, FundingRecord};
use fundtrace_utils::{FundtraceError, FundtraceResult, ScanConfig};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::extraction::FundingExtractor;
use crate::pdf_processor::{PageTextSource, PdfExtractSource};

/// A PDF found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfTarget {
    pub path: PathBuf,
    pub file_name: String,
    /// Containing directory relative to the root, `"."` for the root itself.
    pub folder: String,
}

/// Aggregated outcome of one scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub records: Vec<FundingRecord>,
    pub errors: Vec<ErrorEntry>,
    #[serde(skip)]
    pub discovered: usize,
    #[serde(skip)]
    pub without_funding: usize,
}

impl ScanReport {
    fn push(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Funded(record) => self.records.push(record),
            FileOutcome::NoFunding => self.without_funding += 1,
            FileOutcome::Failed(entry) => self.errors.push(entry),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Walks a root folder and extracts funding mentions from every PDF in it.
pub struct FundingScanner<S = PdfExtractSource> {
    config: ScanConfig,
    extractor: FundingExtractor<S>,
}

impl FundingScanner<PdfExtractSource> {
    pub fn new(config: ScanConfig) -> FundtraceResult<Self> {
        Self::with_source(config, PdfExtractSource::new())
    }
}

impl<S: PageTextSource> FundingScanner<S> {
    pub fn with_source(config: ScanConfig, source: S) -> FundtraceResult<Self> {
        config.root()?;
        let extractor = FundingExtractor::with_source(source, &config.pattern_list)?;
        Ok(Self { config, extractor })
    }

    /// Every file under the root whose name ends in `.pdf` (any case), in
    /// discovery order. Fails only when the root itself cannot be read;
    /// unreadable subdirectories are skipped.
    pub fn discover(&self) -> FundtraceResult<Vec<PdfTarget>> {
        let root = self.config.root()?;

        let metadata =
            std::fs::metadata(root).map_err(|e| FundtraceError::traversal(root, e.to_string()))?;
        if !metadata.is_dir() {
            return Err(FundtraceError::traversal(root, "not a directory"));
        }

        let mut walker = WalkDir::new(root).follow_links(false);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut targets = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(FundtraceError::traversal(root, err.to_string()));
                }
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable entry");
                    continue;
                }
            };

            if is_pdf_file(&entry) {
                targets.push(target_for(root, &entry));
            }
        }

        debug!(root = %root.display(), count = targets.len(), "Discovered PDFs");
        Ok(targets)
    }

    /// Extracts one PDF. Failures are captured in the outcome, never raised.
    pub fn process(&self, target: &PdfTarget) -> FileOutcome {
        match self.extractor.extract_file(&target.path) {
            Ok(sources) => {
                match FundingRecord::new(target.file_name.clone(), target.folder.clone(), sources) {
                    Some(record) => FileOutcome::Funded(record),
                    None => FileOutcome::NoFunding,
                }
            }
            Err(err) => FileOutcome::Failed(ErrorEntry::new(
                target.path.display().to_string(),
                err.to_string(),
            )),
        }
    }

    pub fn scan(&self) -> FundtraceResult<ScanReport> {
        let targets = self.discover()?;
        info!(
            root = %self.config.root()?.display(),
            files = targets.len(),
            "Scanning PDFs for funding sources"
        );

        let progress = self.progress_bar(targets.len());
        let mut report = ScanReport {
            discovered: targets.len(),
            ..ScanReport::default()
        };

        for target in &targets {
            // Hide the bar while extracting so panic output from the PDF
            // library does not land inside it.
            let outcome = progress.suspend(|| self.process(target));
            match &outcome {
                FileOutcome::Failed(entry) => progress.suspend(|| {
                    warn!(path = %entry.pdf_path, error = %entry.error_message, "Extraction failed");
                }),
                FileOutcome::NoFunding => {
                    debug!(path = %target.path.display(), "No funding information found");
                }
                FileOutcome::Funded(record) => {
                    debug!(path = %target.path.display(), sources = record.source_count(), "Funding found");
                }
            }
            report.push(outcome);
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            discovered = report.discovered,
            records = report.records.len(),
            errors = report.errors.len(),
            without_funding = report.without_funding,
            "Scan complete"
        );
        Ok(report)
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{msg} {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}<{eta_precise}]",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
        );
        bar.set_message("Processing PDFs");
        bar
    }
}

fn is_pdf_file(entry: &DirEntry) -> bool {
    let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
    is_file
        && entry
            .file_name()
            .to_string_lossy()
            .to_lowercase()
            .ends_with(".pdf")
}

fn target_for(root: &Path, entry: &DirEntry) -> PdfTarget {
    let folder = entry
        .path()
        .parent()
        .and_then(|parent| parent.strip_prefix(root).ok())
        .filter(|relative| !relative.as_os_str().is_empty())
        .map(|relative| relative.display().to_string())
        .unwrap_or_else(|| ".".to_string());

    PdfTarget {
        path: entry.path().to_path_buf(),
        file_name: entry.file_name().to_string_lossy().into_owned(),
        folder,
    }
}
