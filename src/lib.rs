//! # booru-tags
//!
//! Categorized tag, image and title extraction for booru-style imageboard
//! post pages.
//!
//! Given a post URL and the page's HTML, the crate picks the site's
//! extraction strategy from a registry of supported boorus and returns the
//! post's tags grouped into canonical categories (copyright, character,
//! general, meta, other), the primary image URL and a cleaned title.
//! Fetching the page is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use booru_tags::{extract, TagCategory};
//!
//! let html = r#"<html><head><title>hakurei reimu (touhou) drawn by zun | Danbooru</title></head>
//! <body><section id="tag-list"><ul>
//!   <li class="tag-type-3"><a class="search-tag">touhou</a> <span>1.2M</span></li>
//!   <li class="tag-type-4"><a class="search-tag">hakurei reimu</a></li>
//! </ul></section>
//! <img id="image" src="https://cdn.donmai.us/original/aa/bb/aabb.jpg"></body></html>"#;
//!
//! let extraction = extract("https://danbooru.donmai.us/posts/1", html)?;
//! assert_eq!(extraction.site, "Danbooru");
//! assert_eq!(extraction.result.names(TagCategory::Copyright), ["touhou"]);
//! assert_eq!(extraction.result.title.as_deref(), Some("hakurei reimu (touhou) drawn by zun"));
//! # Ok::<(), booru_tags::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Site Registry**: ordered URL patterns for 17 sites over 14 strategies
//! - **Category Normalization**: class, attribute, header and prefix tables
//! - **Title Cleanup**: brand, index and dimension noise removal with a
//!   plausibility check
//! - **Block-Page Detection**: anti-bot, rate-limit, login and empty pages

mod blocked;
mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Canonical tag categories and the tables that map site vocabularies to them.
pub mod category;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Shared extraction primitives (tag grouping, sweeps, image and title resolution).
pub mod extractor;

/// Tag-name and title normalizers.
pub mod normalize;

/// Parsed document plus the URL context it was fetched from.
pub mod page;

/// Site registry: post-URL patterns mapped to strategies.
pub mod registry;

/// Per-site extraction strategies.
pub mod sites;

/// URL utilities for validation and resolution.
pub mod url_utils;

/// Character encoding detection and decoding.
pub mod encoding;

// Public API - re-exports
pub use blocked::{detect_blocked_page, BlockKind, BlockedPage};
pub use category::TagCategory;
pub use error::{Error, Result};
pub use options::Options;
pub use page::Page;
pub use registry::{list_supported_sites, lookup, SiteDescriptor, SupportedSite};
pub use result::{Extraction, ExtractionResult};
pub use sites::{Extractor, SiteKind};

/// Extracts tags, image and title from a post page using default options.
///
/// # Errors
///
/// `Error::UnsupportedSite` when no registered site matches `url`,
/// `Error::InvalidUrl` when it is not an absolute http(s) URL, and
/// `Error::Blocked` when the document is an anti-bot or login page.
pub fn extract(url: &str, html: &str) -> Result<Extraction> {
    extract_with_options(url, html, &Options::default())
}

/// Extracts tags, image and title from a post page with custom options.
///
/// # Example
///
/// ```rust
/// use booru_tags::{extract_with_options, Error, Options};
///
/// let options = Options {
///     require_content: true,
///     ..Options::default()
/// };
/// let html = "<html><body><p>nothing here</p></body></html>";
/// let err = extract_with_options("https://e621.net/posts/1", html, &options).unwrap_err();
/// assert!(matches!(err, Error::NoContent(_)));
/// ```
pub fn extract_with_options(url: &str, html: &str, options: &Options) -> Result<Extraction> {
    extract::extract_document(url, html, options)
}

/// Extracts from raw page bytes, detecting the character encoding first.
///
/// The charset comes from a byte order mark or a `<meta>` declaration and
/// defaults to UTF-8; malformed sequences are replaced, not rejected.
///
/// # Example
///
/// ```rust
/// use booru_tags::{extract_bytes, TagCategory};
///
/// // "東方" in Shift_JIS
/// let html = b"<meta charset=\"Shift_JIS\"><div id=\"large\"><p>\x93\x8C\x95\xFB, solo</p></div>";
/// let extraction = extract_bytes("https://www.zerochan.net/1", html)?;
/// assert_eq!(extraction.result.names(TagCategory::General), ["東方", "solo"]);
/// # Ok::<(), booru_tags::Error>(())
/// ```
pub fn extract_bytes(url: &str, html: &[u8]) -> Result<Extraction> {
    extract_bytes_with_options(url, html, &Options::default())
}

/// [`extract_bytes`] with custom options.
pub fn extract_bytes_with_options(url: &str, html: &[u8], options: &Options) -> Result<Extraction> {
    let html = encoding::decode_html(html);
    extract_with_options(url, &html, options)
}

/// Runs the matching strategy over an already-parsed page.
///
/// No block-page check and no content requirement; `None` when the page's
/// URL matches no registered site.
#[must_use]
pub fn extract_page(page: &Page) -> Option<Extraction> {
    let site = lookup(page.url().as_str())?;
    Some(Extraction {
        site: site.name,
        result: site.extract(page),
    })
}
