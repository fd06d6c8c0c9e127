//! Compiled regex patterns for tag and title cleanup.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are organized by the normalizer that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Tag Name Patterns
// =============================================================================

/// Trailing usage count in parentheses: `touhou (12.3k)`, `solo (1,204)`, `(12M)`.
pub static TRAILING_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(\d+(?:[.,]\d+)*\s*[kKmM]?\)$").expect("TRAILING_COUNT regex")
});

/// Trailing bare integer separated by whitespace: `touhou 120345`.
pub static TRAILING_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+\d+$").expect("TRAILING_INTEGER regex")
});

/// Leading `?` wiki-link marker: `? touhou`.
pub static LEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\?\s*").expect("LEADING_MARKER regex")
});

// =============================================================================
// Title Patterns
// =============================================================================

/// Site names that appear as title prefixes or suffixes.
const BRANDS: &str = r"danbooru|safebooru|gelbooru(?: - free anime and hentai gallery)?|rule ?34|yande\.re|konachan\.(?:com|net)(?: - anime wallpapers)?|aibooru|e621|anime-pictures\.net|zerochan anime image board|zerochan|e-shuushuu|tbib|hijiribe|pixiv|fur affinity(?: \[dot\] net)?|derpibooru";

/// AIBooru's `aibooru | #123 | ` prefix.
pub static AIBOORU_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)aibooru \| #\d+ \| ").expect("AIBOORU_PREFIX regex")
});

/// The `»` separator some themes use between title parts.
pub static GUILLEMET_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+»\s+").expect("GUILLEMET_SEPARATOR regex")
});

/// Site brand at the start of the title, with its separator.
pub static LEADING_BRAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^(?:{BRANDS})\s*(?:[-|:/–—]+\s*)+")).expect("LEADING_BRAND regex")
});

/// Site brand at the end of the title, with its separator.
pub static TRAILING_BRAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\s*(?:[-|–—]+\s*)+(?:{BRANDS})\s*(?:[-|]\s*)?$"))
        .expect("TRAILING_BRAND regex")
});

/// `[pixiv]` marker at the end of Pixiv titles.
pub static BRACKETED_BRAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\[(?:pixiv|fur affinity)\]$").expect("BRACKETED_BRAND regex")
});

/// `Post #123` / `Image #123` / `#123` at the start of the title.
pub static LEADING_POST_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:post|image) )?#\d+\s*(?:[-|:]\s*)?").expect("LEADING_POST_INDEX regex")
});

/// `- Image #123` / `| Post #123` at the end of the title.
pub static TRAILING_POST_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:[-|]\s*)?(?:post|image) #\d+$").expect("TRAILING_POST_INDEX regex")
});

/// Anime-Pictures' `Anime picture 1000x1414 with ` preamble.
pub static ANIME_PICTURE_PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^anime picture \d+x\d+ with ").expect("ANIME_PICTURE_PREAMBLE regex")
});

/// Anime-Pictures appends the tag dump after a `single tall image` marker.
pub static SINGLE_IMAGE_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+single (?:tall|wide) image\b.*$").expect("SINGLE_IMAGE_TAIL regex")
});

/// Pixel dimensions and file size: `(1200✕1600 245 kB)`, `(800x600)`.
pub static DIMENSIONS_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\(\d+\s*[x✕×]\s*\d+(?:,?\s+\d+(?:\.\d+)?\s*[kmg]?i?b)?\)$")
        .expect("DIMENSIONS_SUFFIX regex")
});

/// Separator debris left at either end after substitutions.
pub static EDGE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\-|:–—»]+|[\s\-|:–—»]+$").expect("EDGE_SEPARATORS regex")
});

/// Matches whitespace runs for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Title made of digits and punctuation only.
pub static NUMERIC_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d\s#.,:_-]+$").expect("NUMERIC_ONLY regex")
});

// =============================================================================
// Charset Patterns
// =============================================================================

/// `<meta charset="...">`
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET_META regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET regex")
});
