//! Title resolution through an ordered fallback chain.

use crate::dom;
use crate::normalize;
use crate::page::Page;

/// A site-specific place to read a title from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// Text of the first element matching the selector (`alt` for `<img>`).
    Selector(&'static str),
    /// Value of the attribute on the first element carrying it.
    Attribute(&'static str),
}

impl TitleSource {
    fn read(self, page: &Page) -> Option<String> {
        match self {
            TitleSource::Selector(selector) => page.first(selector).and_then(|el| {
                if dom::is_tag(&el, "img") {
                    dom::attr(&el, "alt")
                } else {
                    dom::text(&el)
                }
            }),
            TitleSource::Attribute(name) => page
                .first(&format!("[{name}]"))
                .and_then(|el| dom::attr(&el, name)),
        }
    }
}

/// First non-empty raw title candidate.
///
/// Order: the site's own sources, `og:title`, the first `<h1>`, the `alt`
/// of the element matching `image_selector`, then `<title>`.
#[must_use]
pub fn raw_title(page: &Page, sources: &[TitleSource], image_selector: Option<&str>) -> Option<String> {
    sources
        .iter()
        .find_map(|source| source.read(page))
        .or_else(|| page.meta("og:title"))
        .or_else(|| page.first("h1").and_then(|h1| dom::text(&h1)))
        .or_else(|| {
            image_selector
                .and_then(|selector| page.first(selector))
                .and_then(|img| dom::attr(&img, "alt"))
        })
        .or_else(|| page.title())
}

/// Resolves and cleans the post title; `None` when the first candidate
/// does not survive cleanup.
#[must_use]
pub fn title(page: &Page, sources: &[TitleSource], image_selector: Option<&str>) -> Option<String> {
    let raw = raw_title(page, sources, image_selector)?;
    let cleaned = normalize::clean_title(&raw);
    if cleaned.is_none() {
        log::trace!("rejected title candidate {raw:?}");
    }
    cleaned
}
