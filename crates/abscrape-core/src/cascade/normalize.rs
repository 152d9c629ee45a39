/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `s` (characters, not bytes).
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(
            normalize_whitespace("  Living\tData\n\n 2025 \r\n program "),
            "Living Data 2025 program"
        );
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_non_breaking_space_counts_as_whitespace() {
        assert_eq!(normalize_whitespace("a\u{a0}\u{a0}b"), "a b");
    }

    #[test]
    fn test_truncate_shorter_than_limit() {
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_chars("Müller-Lüdenscheid", 8), "Müller-L");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
