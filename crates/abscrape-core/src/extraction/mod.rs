pub mod pdftotext;
pub mod plaintext;

use crate::error::AbscrapeError;

/// Text of a single page, in reading order.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

impl PageContent {
    /// Whether the page produced any text at all.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, AbscrapeError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join all pages into one text blob, each page followed by a newline.
///
/// Pages without text contribute nothing.
pub fn concatenate_pages(pages: &[PageContent]) -> String {
    let total = pages.len();
    tracing::info!("Processing {total} pages...");

    let mut full_text = String::new();
    for (i, page) in pages.iter().enumerate() {
        let n = i + 1;
        if n % 10 == 0 {
            tracing::info!("  Page {n}/{total}...");
        }
        if page.has_text() {
            full_text.push_str(&page.text);
            full_text.push('\n');
        } else {
            tracing::debug!(page = page.page_number, "page has no text");
        }
    }
    full_text
}

/// Split form-feed separated text (pdftotext's page delimiter) into pages.
///
/// The segment after a trailing form feed is not a page. Trailing line
/// breaks are stripped so a page join adds exactly one newline.
pub(crate) fn split_form_feed_pages(text: &str) -> Vec<PageContent> {
    let mut segments: Vec<&str> = text.split('\x0c').collect();
    if segments.len() > 1 && segments.last().is_some_and(|s| s.trim().is_empty()) {
        segments.pop();
    }

    segments
        .into_iter()
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            text: page_text.trim_end_matches(['\n', '\r']).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, text: &str) -> PageContent {
        PageContent {
            page_number: number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_concatenate_appends_newline_per_page() {
        let pages = vec![page(1, "first page"), page(2, "second page")];
        assert_eq!(concatenate_pages(&pages), "first page\nsecond page\n");
    }

    #[test]
    fn test_concatenate_skips_blank_pages() {
        let pages = vec![page(1, "cover"), page(2, ""), page(3, "  \n"), page(4, "end")];
        assert_eq!(concatenate_pages(&pages), "cover\nend\n");
    }

    #[test]
    fn test_concatenate_no_pages() {
        assert_eq!(concatenate_pages(&[]), "");
    }

    #[test]
    fn test_split_form_feed_drops_trailing_segment() {
        let pages = split_form_feed_pages("one\n\x0ctwo\n\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text, "one");
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].text, "two");
    }

    #[test]
    fn test_split_form_feed_keeps_empty_inner_pages() {
        let pages = split_form_feed_pages("one\x0c\x0cthree\x0c");
        assert_eq!(pages.len(), 3);
        assert!(!pages[1].has_text());
        assert_eq!(pages[2].page_number, 3);
    }

    #[test]
    fn test_page_join_is_a_single_newline() {
        let pages = split_form_feed_pages("end of a line\r\n\x0cstart of the next\n\x0c");
        assert_eq!(
            concatenate_pages(&pages),
            "end of a line\nstart of the next\n"
        );
    }

    #[test]
    fn test_split_without_form_feed_is_single_page() {
        let pages = split_form_feed_pages("just text");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "just text");
    }
}
