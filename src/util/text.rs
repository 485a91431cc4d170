// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text utility functions.
//!
//! This module provides pure helpers for storage-safe file naming and for
//! truncating descriptions in the feed.

/// Lowercase the trimmed name and collapse whitespace runs to underscores.
pub fn sanitize_file_stem(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Lowercased extension after the last `.`, or empty when there is none.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => file_name[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// Shorten `text` to `max_chars` characters with a trailing ellipsis.
/// Returns `None` when the text already fits.
pub fn truncated(text: &str, max_chars: usize) -> Option<String> {
    if text.chars().count() <= max_chars {
        return None;
    }
    let mut short: String = text.chars().take(max_chars).collect();
    short.push_str("...");
    Some(short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_trims_lowercases_and_underscores() {
        assert_eq!(sanitize_file_stem("  Ana María  "), "ana_maría");
        assert_eq!(sanitize_file_stem("Juan Pablo Rodríguez"), "juan_pablo_rodríguez");
    }

    #[test]
    fn test_sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize_file_stem("Ana \t  María"), "ana_maría");
    }

    #[test]
    fn test_file_extension_is_lowercased() {
        assert_eq!(file_extension("photo.PNG"), "png");
        assert_eq!(file_extension("reel.Mp4"), "mp4");
    }

    #[test]
    fn test_file_extension_takes_last_segment() {
        assert_eq!(file_extension("archive.tar.gz"), "gz");
    }

    #[test]
    fn test_file_extension_absent_yields_empty() {
        assert_eq!(file_extension("portfolio"), "");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_truncated_leaves_short_text_alone() {
        assert_eq!(truncated("corto", 150), None);

        let exact: String = "a".repeat(150);
        assert_eq!(truncated(&exact, 150), None);
    }

    #[test]
    fn test_truncated_appends_ellipsis_past_the_limit() {
        let long: String = "a".repeat(151);
        let short = truncated(&long, 150).unwrap();
        assert_eq!(short.chars().count(), 153);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn test_truncated_counts_characters_not_bytes() {
        // Multi-byte characters must not be split.
        let long: String = "ñ".repeat(200);
        let short = truncated(&long, 150).unwrap();
        assert_eq!(short.chars().count(), 153);
    }
}
