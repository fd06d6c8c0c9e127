//! Shared extraction primitives.
//!
//! Site strategies are assembled from these pieces.
//!
//! # Module Structure
//!
//! - `tags`: extracted tag type, noise labels and grouping/dedup
//! - `state`: sectioned-list scan state machine
//! - `sweep`: class-, section- and attribute-driven tag sweeps
//! - `image`: primary image URL resolution
//! - `title`: title fallback chain
//!
//! # Usage
//!
//! ```rust
//! use booru_tags::extractor::{group, image, sweep, title};
//! use booru_tags::{ExtractionResult, Page};
//!
//! let html = r#"<ul id="tag-list"><li class="tag-type-4"><a class="search-tag">hakurei reimu</a></li></ul>"#;
//! let page = Page::parse(html, "https://danbooru.donmai.us/posts/1")?;
//!
//! let result = ExtractionResult {
//!     tags: group(sweep::sweep_class_tagged(&page, "#tag-list li", "a.search-tag")),
//!     image_url: image::image_url(&page, "#image"),
//!     title: title::title(&page, &[], Some("#image")),
//! };
//! assert_eq!(result.total_tags(), 1);
//! # Ok::<(), booru_tags::Error>(())
//! ```

pub mod image;
pub mod state;
pub mod sweep;
pub mod tags;
pub mod title;

pub use state::{ScanEvent, SectionScan};
pub use tags::{group, ExtractedTag};
pub use title::TitleSource;

use crate::page::Page;
use crate::result::ExtractionResult;

/// Runs `structured` and, when it finds nothing, `dom`.
///
/// For sites that embed their post data as JSON next to the rendered
/// markup: the structured path is exact when present, the DOM path keeps
/// working when the blob is missing or its shape changed.
pub fn structured_or_dom<S, D>(page: &Page, structured: S, dom: D) -> ExtractionResult
where
    S: FnOnce(&Page) -> Option<ExtractionResult>,
    D: FnOnce(&Page) -> ExtractionResult,
{
    match structured(page) {
        Some(result) if !result.is_empty() => result,
        _ => {
            log::trace!("structured data unavailable for {}, scraping markup", page.url());
            dom(page)
        }
    }
}
