pub mod cascade;
pub mod error;
pub mod extraction;
pub mod model;
pub mod output;

use cascade::{run_cascade, Strategy};
use error::AbscrapeError;
use extraction::{concatenate_pages, PageContent, PdfExtractor};
use model::AbstractSet;

/// Result of one extraction run over a document.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub page_count: usize,
    /// Pass that produced the records, `None` if nothing qualified.
    pub strategy: Option<Strategy>,
    pub records: AbstractSet,
}

/// Main API entry point: pull abstract records out of a program PDF.
///
/// The whole document is read before any pattern runs. Extraction errors
/// are fatal; an empty result is not an error.
pub fn extract_abstracts(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Extraction, AbscrapeError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "page text extracted"
    );
    Ok(extract_abstracts_from_pages(&pages))
}

/// Run the cascade over already-extracted pages.
pub fn extract_abstracts_from_pages(pages: &[PageContent]) -> Extraction {
    let full_text = concatenate_pages(pages);
    let outcome = run_cascade(&full_text);

    Extraction {
        page_count: pages.len(),
        strategy: outcome.strategy,
        records: outcome.records,
    }
}
