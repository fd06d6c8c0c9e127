//! Primary image resolution.

use crate::dom;
use crate::page::Page;
use crate::url_utils;

/// Attributes tried after the caller's preferred one.
const FALLBACK_ATTRIBUTES: [&str; 2] = ["src", "data-src"];

/// Resolves the URL of the first element matching `selector`.
///
/// Tries `preferred` first, then `src`, then `data-src`; a `<video>` with
/// none of those falls back to its first `<source src>`. The value is
/// normalized to an absolute URL against the page base. Returns `None`
/// when no element matches or nothing resolves.
#[must_use]
pub fn image_url_from(page: &Page, selector: &str, preferred: &str) -> Option<String> {
    let element = page.first(selector)?;

    let raw = std::iter::once(preferred)
        .chain(FALLBACK_ATTRIBUTES)
        .find_map(|name| dom::attr(&element, name))
        .or_else(|| {
            if dom::is_tag(&element, "video") {
                dom::first(&element, "source[src]").and_then(|source| dom::attr(&source, "src"))
            } else {
                None
            }
        })?;

    url_utils::normalize_url(&raw, page.base_url())
}

/// [`image_url_from`] preferring the `src` attribute.
#[must_use]
pub fn image_url(page: &Page, selector: &str) -> Option<String> {
    image_url_from(page, selector, "src")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Page {
        Page::parse(html, "https://gelbooru.com/index.php?page=post&s=view&id=1").unwrap()
    }

    #[test]
    fn prefers_requested_attribute() {
        let p = page(r#"<a id="full" href="/full.png" src="/ignored.png">x</a>"#);
        assert_eq!(
            image_url_from(&p, "#full", "href").as_deref(),
            Some("https://gelbooru.com/full.png")
        );
    }

    #[test]
    fn falls_back_to_data_src() {
        let p = page(r#"<img id="image" data-src="//img.gelbooru.com/images/a.jpg">"#);
        assert_eq!(image_url(&p, "#image").as_deref(), Some("https://img.gelbooru.com/images/a.jpg"));
    }

    #[test]
    fn video_uses_nested_source() {
        let p = page(r#"<video id="gelcomVideoPlayer"><source src="https://video.gelbooru.com/a.webm" type="video/webm"></video>"#);
        assert_eq!(
            image_url(&p, "#gelcomVideoPlayer").as_deref(),
            Some("https://video.gelbooru.com/a.webm")
        );
    }

    #[test]
    fn missing_element_or_attribute_is_none() {
        let p = page(r#"<img id="image">"#);
        assert_eq!(image_url(&p, "#image"), None);
        assert_eq!(image_url(&p, "#nothing"), None);
    }

    #[test]
    fn group_selector_takes_first_in_document_order() {
        let p = page(r#"<img class="fit-width" src="/second.jpg"><img id="image" src="/first.jpg">"#);
        assert_eq!(
            image_url(&p, "#image, img.fit-width").as_deref(),
            Some("https://gelbooru.com/second.jpg")
        );
    }
}
