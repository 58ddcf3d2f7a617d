//! PDF Processor
//!
//! Turns PDF bytes into per-page text.

use fundtrace_utils::{FundtraceError, FundtraceResult};

/// Capability of producing the extractable text of a PDF, page by page.
pub trait PageTextSource {
    /// Text of every page in page order. A page without extractable text
    /// (scanned, image-only) is an empty string, not an error.
    fn page_texts(&self, data: &[u8]) -> FundtraceResult<Vec<String>>;

    /// All pages concatenated in page order.
    fn text(&self, data: &[u8]) -> FundtraceResult<String> {
        Ok(self.page_texts(data)?.concat())
    }
}

/// [`PageTextSource`] backed by the `pdf-extract` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractSource;

impl PdfExtractSource {
    pub fn new() -> Self {
        Self
    }
}

/// pdf-extract panics on some malformed content streams; the extractor
/// catches those and reports them as parse errors.
impl PageTextSource for PdfExtractSource {
    fn page_texts(&self, data: &[u8]) -> FundtraceResult<Vec<String>> {
        pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| FundtraceError::parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPages(Vec<&'static str>);

    impl PageTextSource for FixedPages {
        fn page_texts(&self, _data: &[u8]) -> FundtraceResult<Vec<String>> {
            Ok(self.0.iter().map(|p| p.to_string()).collect())
        }
    }

    #[test]
    fn test_text_concatenates_pages_in_order() {
        let source = FixedPages(vec!["Funded by ", "", "DARPA."]);
        assert_eq!(source.text(b"").unwrap(), "Funded by DARPA.");
    }

    #[test]
    fn test_plain_text_is_not_a_pdf() {
        let err = PdfExtractSource::new()
            .page_texts(b"just some notes renamed to .pdf\n")
            .unwrap_err();

        assert_eq!(err.error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_empty_input_is_a_parse_error() {
        assert!(PdfExtractSource::new().page_texts(&[]).is_err());
    }
}
