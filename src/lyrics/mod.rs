//! Lyrics text inspection.
//!
//! Transliterated lyric files pair each original line with its reading,
//! joined by a spaced slash (`こんにちは / konnichiwa`). That separator is the
//! only signal used to tell romaji-annotated lyrics apart from plain ones.

use crate::constants::scan::ROMAJI_MARKER;

/// Whether synced lyrics carry romaji annotations
pub fn has_romaji_marker(synced: &str) -> bool {
    synced.contains(ROMAJI_MARKER)
}

/// First `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn snippet(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn detects_spaced_slash_only() {
        assert!(has_romaji_marker("A / B"));
        assert!(has_romaji_marker("[00:12.30] 夜に駆ける / yoru ni kakeru"));
        assert!(!has_romaji_marker("AC/DC"));
        assert!(!has_romaji_marker("either/or /tmp"));
        assert!(!has_romaji_marker(""));
    }

    #[test]
    fn snippet_keeps_short_text_whole() {
        assert_eq!(snippet("konnichiwa / こんにちは", 200), "konnichiwa / こんにちは");
    }

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let text = "あいうえお".repeat(50);
        let cut = snippet(&text, 200);
        assert_eq!(cut.chars().count(), 200);
        assert!(text.starts_with(&cut));
    }

    #[test]
    fn snippet_at_exact_length_is_unchanged() {
        assert_eq!(snippet("abc", 3), "abc");
        assert_eq!(snippet("abcd", 3), "abc");
        assert_eq!(snippet("abc", 0), "");
    }
}
