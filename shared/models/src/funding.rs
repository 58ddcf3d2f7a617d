//! Funding extraction domain models.
//!
//! This module defines the per-file outcomes of a scan: the successful
//! [`FundingRecord`] and the failed [`ErrorEntry`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Funding strings found in a single PDF.
///
/// A record only exists when at least one funding string was found; use
/// [`FundingRecord::new`] to build one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FundingRecord {
    pub pdf_name: String,
    /// Containing directory relative to the scan root, `"."` for the root itself.
    pub folder: String,
    pub funding_sources: BTreeSet<String>,
}

impl FundingRecord {
    /// Returns `None` when `funding_sources` is empty.
    pub fn new(
        pdf_name: impl Into<String>,
        folder: impl Into<String>,
        funding_sources: BTreeSet<String>,
    ) -> Option<Self> {
        if funding_sources.is_empty() {
            return None;
        }

        Some(Self {
            pdf_name: pdf_name.into(),
            folder: folder.into(),
            funding_sources,
        })
    }

    /// Funding sources joined by `", "`.
    pub fn joined_sources(&self) -> String {
        self.funding_sources
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn source_count(&self) -> usize {
        self.funding_sources.len()
    }
}

/// A PDF that could not be read or parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEntry {
    pub pdf_path: String,
    pub error_message: String,
}

impl ErrorEntry {
    pub fn new(pdf_path: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            pdf_path: pdf_path.into(),
            error_message: error_message.into(),
        }
    }

    /// Line written to the error log.
    pub fn log_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | Error: {}", self.pdf_path, self.error_message)
    }
}

/// Result of processing one PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Funded(FundingRecord),
    NoFunding,
    Failed(ErrorEntry),
}
