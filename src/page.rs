//! The input every site strategy works on: a parsed document plus the URL
//! it was fetched from.

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::url_utils;

/// A parsed post page.
///
/// The base URL used for relative resolution is the document's
/// `<base href>` (itself resolved against the post URL) when present,
/// otherwise the post URL.
pub struct Page {
    document: Document,
    url: Url,
    base_url: Url,
}

impl Page {
    /// Parses `html` fetched from `url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if `url` is not an absolute http(s) URL.
    pub fn parse(html: &str, url: &str) -> Result<Self> {
        let url = url_utils::parse_url(url).ok_or_else(|| Error::InvalidUrl(url.to_string()))?;
        Ok(Self::from_document(dom::parse(html), url))
    }

    /// Wraps an already-parsed document.
    #[must_use]
    pub fn from_document(document: Document, url: Url) -> Self {
        let base_url = dom::first(&document.select("head"), "base[href]")
            .and_then(|base| dom::attr(&base, "href"))
            .and_then(|href| url.join(&href).ok())
            .unwrap_or_else(|| url.clone());

        Self {
            document,
            url,
            base_url,
        }
    }

    /// Replaces the base URL used for relative resolution.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// The parsed document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The post URL the document was fetched from.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Base URL for resolving relative links.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// All elements matching `selector`.
    #[must_use]
    pub fn select(&self, selector: &str) -> Selection<'_> {
        self.document.select(selector)
    }

    /// First element matching `selector`, in document order.
    #[must_use]
    pub fn first(&self, selector: &str) -> Option<Selection<'_>> {
        let found = self.document.select(selector);
        if found.is_empty() {
            None
        } else {
            Some(found.first())
        }
    }

    /// Content of a `<meta property=..>` or `<meta name=..>` tag.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<String> {
        self.first(&format!(r#"meta[property="{key}"], meta[name="{key}"]"#))
            .and_then(|meta| dom::attr(&meta, "content"))
    }

    /// Text of the `<title>` element.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.first("title").and_then(|title| dom::text(&title))
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.url.as_str())
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_post_url() {
        let page = Page::parse("<html><body></body></html>", "https://yande.re/post/show/1").unwrap();
        assert_eq!(page.base_url().as_str(), "https://yande.re/post/show/1");
    }

    #[test]
    fn base_href_is_resolved_against_post_url() {
        let html = r#"<html><head><base href="/static/"></head><body></body></html>"#;
        let page = Page::parse(html, "https://yande.re/post/show/1").unwrap();
        assert_eq!(page.base_url().as_str(), "https://yande.re/static/");
    }

    #[test]
    fn invalid_post_url_is_rejected() {
        assert!(matches!(Page::parse("<html></html>", "/posts/1"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn meta_and_title_lookups() {
        let html = r#"<html><head><title> Some Title </title>
            <meta property="og:title" content="OG Title">
            <meta name="description" content="desc"></head></html>"#;
        let page = Page::parse(html, "https://e621.net/posts/1").unwrap();
        assert_eq!(page.title().as_deref(), Some("Some Title"));
        assert_eq!(page.meta("og:title").as_deref(), Some("OG Title"));
        assert_eq!(page.meta("description").as_deref(), Some("desc"));
        assert_eq!(page.meta("og:image"), None);
    }
}
