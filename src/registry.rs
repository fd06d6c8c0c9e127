//! Site registry and dispatcher.
//!
//! An ordered list of supported sites, each a display name, a post-URL
//! pattern and the strategy that handles it. [`lookup`] returns the first
//! entry whose pattern matches; ordering only matters for hosts that share
//! an engine, since the patterns are anchored on a host boundary.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::page::Page;
use crate::result::ExtractionResult;
use crate::sites::{Extractor, SiteKind};

/// A registered site.
#[derive(Debug, Clone)]
pub struct SiteDescriptor {
    /// Display name, e.g. `Safebooru (Donmai)`.
    pub name: &'static str,
    /// Case-insensitive post-URL pattern.
    pub url_pattern: Regex,
    /// Strategy used for the site's post pages.
    pub kind: SiteKind,
}

impl SiteDescriptor {
    /// Returns true when `url` is a post URL of this site.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        self.url_pattern.is_match(url.trim())
    }
}

impl Extractor for SiteDescriptor {
    fn extract(&self, page: &Page) -> ExtractionResult {
        self.kind.extract(page)
    }
}

/// Read-only view of a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedSite {
    pub name: &'static str,
    pub url_pattern: String,
}

/// Scheme, subdomains and the host-boundary anchor shared by every pattern.
const URL_PREFIX: &str = r"(?i)^(?:https?://)?(?:[a-z0-9-]+\.)*";

#[allow(clippy::expect_used)]
fn site(name: &'static str, host_and_path: &str, kind: SiteKind) -> SiteDescriptor {
    SiteDescriptor {
        name,
        url_pattern: Regex::new(&format!("{URL_PREFIX}{host_and_path}")).expect("registry pattern"),
        kind,
    }
}

static REGISTRY: LazyLock<Vec<SiteDescriptor>> = LazyLock::new(|| {
    vec![
        site("Danbooru", r"danbooru\.donmai\.us(?::\d+)?/posts/\d+", SiteKind::Danbooru),
        site("Safebooru (Donmai)", r"safebooru\.donmai\.us(?::\d+)?/posts/\d+", SiteKind::Danbooru),
        site("Hijiribe", r"hijiribe\.donmai\.us(?::\d+)?/posts/\d+", SiteKind::Danbooru),
        site(
            "Safebooru (Org)",
            r"safebooru\.org(?::\d+)?/(?:index\.php\?page=post&s=view&id=\d+|post/view/\d+)",
            SiteKind::Safebooru,
        ),
        site("TBIB", r"tbib\.org(?::\d+)?/index\.php\?page=post&s=view&id=\d+", SiteKind::Safebooru),
        site("Gelbooru", r"gelbooru\.com(?::\d+)?/index\.php\?page=post&s=view&id=\d+", SiteKind::Gelbooru),
        site("Rule34", r"rule34\.xxx(?::\d+)?/index\.php\?page=post&s=view&id=\d+", SiteKind::Rule34),
        site("e621", r"e621\.net(?::\d+)?/posts/\d+", SiteKind::E621),
        site("AIBooru", r"aibooru\.online(?::\d+)?/posts/\d+", SiteKind::AiBooru),
        site("Yande.re", r"yande\.re(?::\d+)?/post/show/\d+", SiteKind::Yandere),
        site("Konachan", r"konachan\.(?:com|net)(?::\d+)?/post/show/\d+", SiteKind::Konachan),
        site("Anime-Pictures", r"anime-pictures\.net(?::\d+)?/posts/\d+", SiteKind::AnimePictures),
        site("Zerochan", r"zerochan\.net(?::\d+)?/\d+", SiteKind::Zerochan),
        site("E-Shuushuu", r"e-shuushuu\.net(?::\d+)?/image/\d+", SiteKind::EShuushuu),
        site("Pixiv", r"pixiv\.net(?::\d+)?/(?:[a-z]{2}(?:-[a-z]{2})?/)?artworks/\d+", SiteKind::Pixiv),
        site("Fur Affinity", r"furaffinity\.net(?::\d+)?/view/\d+", SiteKind::FurAffinity),
        site("Derpibooru", r"derpibooru\.org(?::\d+)?/(?:images/)?\d+", SiteKind::Derpibooru),
    ]
});

/// All registered sites, in lookup order.
#[must_use]
pub fn sites() -> &'static [SiteDescriptor] {
    &REGISTRY
}

/// First registered site whose pattern matches `url`.
///
/// # Example
///
/// ```rust
/// use booru_tags::{lookup, SiteKind};
///
/// let site = lookup("https://safebooru.donmai.us/posts/123").unwrap();
/// assert_eq!(site.name, "Safebooru (Donmai)");
/// assert_eq!(site.kind, SiteKind::Danbooru);
/// assert!(lookup("https://unknown-site.example/post/1").is_none());
/// ```
#[must_use]
pub fn lookup(url: &str) -> Option<&'static SiteDescriptor> {
    let found = REGISTRY.iter().find(|site| site.matches(url));
    match found {
        Some(site) => log::debug!("{url} handled by {}", site.name),
        None => log::debug!("no registered site matches {url}"),
    }
    found
}

/// Names and patterns of every registered site, in lookup order.
#[must_use]
pub fn list_supported_sites() -> Vec<SupportedSite> {
    REGISTRY
        .iter()
        .map(|site| SupportedSite {
            name: site.name,
            url_pattern: site.url_pattern.as_str().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donmai_hosts_do_not_cross_match() {
        assert_eq!(lookup("https://danbooru.donmai.us/posts/1").map(|s| s.name), Some("Danbooru"));
        assert_eq!(
            lookup("https://safebooru.donmai.us/posts/1").map(|s| s.name),
            Some("Safebooru (Donmai)")
        );
        assert!(lookup("https://notdanbooru.donmai.us/posts/1").is_none());
    }

    #[test]
    fn lookup_is_case_insensitive_and_scheme_optional() {
        assert_eq!(lookup("HTTPS://Danbooru.Donmai.US/posts/9").map(|s| s.name), Some("Danbooru"));
        assert_eq!(lookup("e621.net/posts/9").map(|s| s.kind), Some(SiteKind::E621));
        assert_eq!(lookup("https://www.zerochan.net/4151531").map(|s| s.kind), Some(SiteKind::Zerochan));
    }

    #[test]
    fn non_post_urls_do_not_match() {
        assert!(lookup("https://danbooru.donmai.us/posts").is_none());
        assert!(lookup("https://gelbooru.com/index.php?page=post&s=list&tags=all").is_none());
        assert!(lookup("https://example.com/?u=https://e621.net/posts/1").is_none());
    }

    #[test]
    fn registry_listing_preserves_order() {
        let names: Vec<&str> = list_supported_sites().iter().map(|s| s.name).collect();
        assert_eq!(names.first(), Some(&"Danbooru"));
        assert_eq!(names.last(), Some(&"Derpibooru"));
        assert_eq!(names.len(), sites().len());
    }
}
