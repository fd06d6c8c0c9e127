//! Error types for booru-tags.
//!
//! Site strategies never fail; these errors only come out of the top-level
//! convenience API in `lib.rs`, where the caller hands over a raw URL.

use crate::blocked::BlockKind;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The post URL is not an absolute http(s) URL.
    #[error("Invalid post URL: {0}")]
    InvalidUrl(String),

    /// No registered site matches the post URL.
    #[error("URL does not match any supported site: {0}")]
    UnsupportedSite(String),

    /// The document is an anti-bot, rate-limit, login or empty page.
    #[error("Blocked page ({kind}): {details}")]
    Blocked {
        /// What kind of block page was recognized.
        kind: BlockKind,
        /// Human-readable evidence for the decision.
        details: String,
    },

    /// Neither tags nor an image were found (only with `Options::require_content`).
    #[error("No tags or image found on {0}")]
    NoContent(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
