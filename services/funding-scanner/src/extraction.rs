//! Funding Extraction
//!
//! Reads a PDF, pulls its text through a [`PageTextSource`] and collects every
//! funding mention: bare pattern matches plus whole acknowledgment sentences.

use fundtrace_models::{PatternList, TRIGGER_PHRASES};
use fundtrace_utils::{FundtraceError, FundtraceResult};
use regex::{Regex, RegexBuilder};
use std::any::Any;
use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::debug;

use crate::pdf_processor::{PageTextSource, PdfExtractSource};

/// Compiled funding patterns and the acknowledgment-sentence scanner.
#[derive(Debug, Clone)]
pub struct FundingMatcher {
    patterns: Vec<Regex>,
    sentence: Regex,
}

impl FundingMatcher {
    pub fn new(pattern_list: &PatternList) -> FundtraceResult<Self> {
        let patterns = pattern_list
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| FundtraceError::pattern(pattern, e.to_string()))
            })
            .collect::<FundtraceResult<Vec<_>>>()?;

        let triggers = TRIGGER_PHRASES
            .iter()
            .map(|phrase| regex::escape(phrase))
            .collect::<Vec<_>>()
            .join("|");
        // A sentence runs up to and including the next period.
        let sentence_pattern = format!(r"[^.]*\b(?:{})\b[^.]*\.", triggers);
        let sentence = RegexBuilder::new(&sentence_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| FundtraceError::pattern(sentence_pattern.clone(), e.to_string()))?;

        Ok(Self { patterns, sentence })
    }

    /// Literal text of every pattern match plus every trimmed acknowledgment
    /// sentence. Deduplication is exact, so case variants stay distinct.
    pub fn find_all(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();

        for pattern in &self.patterns {
            for m in pattern.find_iter(text) {
                found.insert(m.as_str().to_string());
            }
        }

        for m in self.sentence.find_iter(text) {
            found.insert(m.as_str().trim().to_string());
        }

        found
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Default for FundingMatcher {
    fn default() -> Self {
        Self::new(&PatternList::default()).expect("built-in funding patterns compile")
    }
}

/// Extracts funding strings from single PDF files.
pub struct FundingExtractor<S = PdfExtractSource> {
    source: S,
    matcher: FundingMatcher,
}

impl FundingExtractor<PdfExtractSource> {
    pub fn new(pattern_list: &PatternList) -> FundtraceResult<Self> {
        Self::with_source(PdfExtractSource::new(), pattern_list)
    }
}

impl<S: PageTextSource> FundingExtractor<S> {
    pub fn with_source(source: S, pattern_list: &PatternList) -> FundtraceResult<Self> {
        Ok(Self {
            source,
            matcher: FundingMatcher::new(pattern_list)?,
        })
    }

    /// Funding strings found in the PDF at `path`. An empty set means the
    /// document parsed but mentions no funding.
    pub fn extract_file(&self, path: &Path) -> FundtraceResult<BTreeSet<String>> {
        let data = std::fs::read(path).map_err(|e| FundtraceError::io(path, e))?;
        self.extract_bytes(&data)
    }

    /// A panic inside the text source becomes a parse error for this file.
    pub fn extract_bytes(&self, data: &[u8]) -> FundtraceResult<BTreeSet<String>> {
        let text = panic::catch_unwind(AssertUnwindSafe(|| self.source.text(data)))
            .map_err(|payload| {
                FundtraceError::parse(format!(
                    "PDF library panicked: {}",
                    panic_message(payload.as_ref())
                ))
            })??;
        let found = self.matcher.find_all(&text);

        debug!(chars = text.len(), matches = found.len(), "Scanned document text");
        Ok(found)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
