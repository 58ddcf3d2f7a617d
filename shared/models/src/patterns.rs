//! Funding pattern definitions.
//!
//! The default [`PatternList`] covers the major US and EU research funders by
//! full name and abbreviation, plus the generic acknowledgment phrases.

use serde::{Deserialize, Serialize};

/// Regular expressions matched case-insensitively against the document text.
pub const DEFAULT_FUNDING_PATTERNS: &[&str] = &[
    r"\bNational Science Foundation\b",
    r"\bNSF\b",
    r"\bEuropean Research Council\b",
    r"\bERC\b",
    r"\bHorizon 2020\b",
    r"\bDARPA\b",
    r"\bDefense Advanced Research Projects Agency\b",
    r"\bNIH\b",
    r"\bNational Institutes of Health\b",
    r"\bONR\b",
    r"\bOffice of Naval Research\b",
    r"\bNASA\b",
    r"\bNational Aeronautics and Space Administration\b",
    r"\bDOE\b",
    r"\bDepartment of Energy\b",
    r"\bAFOSR\b",
    r"\bAir Force Office of Scientific Research\b",
    r"\bsupported by\b",
    r"\bfunded by\b",
    r"\bgrant from\b",
    r"\bcontract\b",
];

/// Literal phrases that mark a whole sentence as a funding acknowledgment.
pub const TRIGGER_PHRASES: &[&str] = &["supported by", "funded by", "grant from", "contract"];

/// Ordered list of funding regular expressions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PatternList(Vec<String>);

impl PatternList {
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns)
    }

    pub fn patterns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PatternList {
    fn default() -> Self {
        Self(DEFAULT_FUNDING_PATTERNS.iter().map(|p| p.to_string()).collect())
    }
}
