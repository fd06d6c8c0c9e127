//! Top-level extraction pipeline.
//!
//! URL validation, site lookup, block-page detection, the site strategy,
//! and the content requirement, in that order.

use crate::blocked::detect_blocked_page;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::page::Page;
use crate::registry::{self, SiteDescriptor};
use crate::result::Extraction;
use crate::sites::Extractor;
use crate::url_utils;

/// Parses `html` for `url` and runs the matching site strategy.
pub(crate) fn extract_document(url: &str, html: &str, options: &Options) -> Result<Extraction> {
    if url_utils::parse_url(url).is_none() {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    let site = registry::lookup(url).ok_or_else(|| Error::UnsupportedSite(url.to_string()))?;
    let page = build_page(url, html, options)?;
    run(site, &page, options)
}

fn build_page(url: &str, html: &str, options: &Options) -> Result<Page> {
    let page = Page::parse(html, url)?;
    match options.base_url.as_deref() {
        Some(raw) => {
            let base = url_utils::parse_url(raw).ok_or_else(|| Error::InvalidUrl(raw.to_string()))?;
            Ok(page.with_base_url(base))
        }
        None => Ok(page),
    }
}

/// Runs `site`'s strategy over an already-parsed page.
pub(crate) fn run(site: &'static SiteDescriptor, page: &Page, options: &Options) -> Result<Extraction> {
    if options.detect_blocked_pages {
        if let Some(blocked) = detect_blocked_page(page) {
            log::warn!("{} returned a blocked page ({}): {}", site.name, blocked.kind, blocked.details);
            return Err(blocked.into());
        }
    }

    let result = site.extract(page);

    if result.is_empty() {
        if options.require_content {
            return Err(Error::NoContent(page.url().to_string()));
        }
        log::warn!(
            "no tags or image found on {} page {}; the page layout may have changed",
            site.name,
            page.url()
        );
    }

    Ok(Extraction {
        site: site.name,
        result,
    })
}
