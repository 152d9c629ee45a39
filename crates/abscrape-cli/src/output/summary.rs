use abscrape_core::cascade::normalize::truncate_chars;
use abscrape_core::Extraction;

/// Characters of each sample abstract shown in the preview.
const PREVIEW_CHARS: usize = 200;

pub fn print(extraction: &Extraction, preview: usize) {
    if let Some(strategy) = extraction.strategy {
        println!(
            "  {} page(s) scanned, records from the {}",
            extraction.page_count, strategy
        );
    }

    if preview == 0 {
        return;
    }

    let samples: Vec<_> = extraction.records.iter().take(preview).collect();
    let ids: Vec<&str> = samples.iter().map(|r| r.id.as_str()).collect();
    println!("\nSample abstracts (IDs: {}):", ids.join(", "));

    for record in samples {
        println!("\n  ID {}:", record.id);
        println!("  {}...", truncate_chars(&record.summary, PREVIEW_CHARS));
    }
}

pub fn print_empty_warning() {
    println!("\nWarning: No abstracts were extracted from the PDF.");
    println!("The PDF may have a different format than expected.");
    println!("Please check the PDF structure manually.");
}
