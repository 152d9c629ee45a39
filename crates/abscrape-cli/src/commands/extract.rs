use abscrape_core::error::AbscrapeError;
use abscrape_core::extraction::pdftotext::PdftotextExtractor;
use abscrape_core::extraction::plaintext::PlainTextExtractor;
use abscrape_core::extraction::PdfExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_file: PathBuf,
    preview: usize,
) -> Result<(), AbscrapeError> {
    // Pre-extracted text skips pdftotext entirely
    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    let extractor: Box<dyn PdfExtractor> = if is_text {
        Box::new(PlainTextExtractor)
    } else {
        if !PdftotextExtractor::is_available() {
            return Err(AbscrapeError::PdftotextNotFound);
        }
        Box::new(PdftotextExtractor::new())
    };

    if !input_file.is_file() {
        return Err(AbscrapeError::InputNotFound(input_file));
    }

    println!("Extracting abstracts from {}...", input_file.display());
    let bytes = std::fs::read(&input_file)?;
    let extraction = abscrape_core::extract_abstracts(&bytes, extractor.as_ref())?;

    if extraction.records.is_empty() {
        output::summary::print_empty_warning();
        return Ok(());
    }

    println!(
        "\nWriting {} abstracts to {}...",
        extraction.records.len(),
        output_file.display()
    );
    abscrape_core::output::write_records(&output_file, &extraction.records)?;
    println!("Successfully created {}", output_file.display());

    output::summary::print(&extraction, preview);
    Ok(())
}
