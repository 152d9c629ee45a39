//! Candidate matchers. Each walks the text left to right and yields
//! non-overlapping `(id, raw body)` pairs; none of them apply the length gate.

use regex::Regex;
use std::sync::LazyLock;

/// An unfiltered match: the record id and its body exactly as it appears in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub id: &'a str,
    pub raw_body: &'a str,
}

/// "ID: 7021007" / "Abstract 7021007" / "Presentation:7021007", then a line break.
static LABELED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:ID|Abstract|Presentation)[\s:]*([0-9]{7})\s*\n").unwrap()
});

/// Where a labeled body stops. No line break required after the number.
static LABELED_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:ID|Abstract|Presentation)[\s:]*[0-9]{7}").unwrap());

static BARE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([0-9]{7})\s*\n").unwrap());

static STANDALONE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([0-9]{7})\b").unwrap());

static BLOCK_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").unwrap());

/// Uppercase initial plus at least 20 more characters.
const MIN_BARE_BODY_CHARS: usize = 21;

/// Labeled-ID matcher. The body runs from the header to the next
/// label-and-number occurrence, or to the end of the text.
pub fn labeled_id_candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        let caps = LABELED_HEADER.captures_at(text, pos)?;
        let body_start = caps.get(0)?.end();
        let body_end = LABELED_BOUNDARY
            .find_at(text, body_start)
            .map_or(text.len(), |m| m.start());
        pos = body_end;
        Some(Candidate {
            id: caps.get(1)?.as_str(),
            raw_body: &text[body_start..body_end],
        })
    })
}

/// Bare-ID matcher: a standalone 7-digit number on its own line, followed by
/// an uppercase-initial body of at least 21 characters. The body runs to the
/// next standalone 7-digit number, or to the end of the text.
pub fn bare_id_candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    let mut pos = 0;
    std::iter::from_fn(move || loop {
        let caps = BARE_HEADER.captures_at(text, pos)?;
        let header = caps.get(0)?;
        match bare_body_end(text, header.end()) {
            Some(body_end) => {
                pos = body_end;
                return Some(Candidate {
                    id: caps.get(1)?.as_str(),
                    raw_body: &text[header.end()..body_end],
                });
            }
            // Headers start with an ASCII digit, so +1 stays on a char boundary.
            None => pos = header.start() + 1,
        }
    })
}

fn bare_body_end(text: &str, body_start: usize) -> Option<usize> {
    let body = &text[body_start..];
    if !body.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }

    let min_end = match body.char_indices().nth(MIN_BARE_BODY_CHARS) {
        Some((offset, _)) => body_start + offset,
        None if body.chars().count() == MIN_BARE_BODY_CHARS => text.len(),
        None => return None,
    };

    Some(
        STANDALONE_ID
            .find_at(text, min_end)
            .map_or(text.len(), |m| m.start()),
    )
}

/// Paragraph-like blocks: the text split on runs of two or more line breaks.
pub fn split_blocks(text: &str) -> impl Iterator<Item = &str> {
    BLOCK_SEPARATOR.split(text)
}

/// Block matcher: every block containing a standalone 7-digit number,
/// keyed by the first such number.
pub fn block_candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    split_blocks(text).filter_map(|block| {
        let id = STANDALONE_ID.find(block)?.as_str();
        Some(Candidate {
            id,
            raw_body: block,
        })
    })
}
