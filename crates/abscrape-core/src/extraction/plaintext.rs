use crate::error::AbscrapeError;
use crate::extraction::{split_form_feed_pages, PageContent, PdfExtractor};

/// Backend for text that was already pulled out of the PDF,
/// e.g. with `pdftotext program.pdf program.txt`.
///
/// Form feeds are treated as page breaks, so the page counters match
/// what the pdftotext backend would report.
pub struct PlainTextExtractor;

impl PdfExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, AbscrapeError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(split_form_feed_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "plaintext"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_pages() {
        let pages = PlainTextExtractor
            .extract_pages("Session A\n\x0cSession B\n\x0c".as_bytes())
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].text, "Session B");
    }

    #[test]
    fn test_plaintext_invalid_utf8_is_lossy() {
        let pages = PlainTextExtractor.extract_pages(&[0x41, 0xff, 0x42]).unwrap();
        assert_eq!(pages[0].text, "A\u{fffd}B");
    }
}
