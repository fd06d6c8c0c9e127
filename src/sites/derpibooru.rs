//! Derpibooru: categories are written into the tag name as a namespace
//! prefix (`artist:`, `oc:`, `series:`).

use std::collections::HashMap;

use crate::category::split_name_prefix;
use crate::dom;
use crate::extractor::{group, image, title, ExtractedTag};
use crate::page::Page;
use crate::result::ExtractionResult;
use crate::url_utils;

fn prefixed_tags(page: &Page) -> Vec<ExtractedTag> {
    dom::select_all(&page.select("html"), ".tag-list .tag")
        .iter()
        .filter_map(|tag| {
            dom::attr(tag, "data-tag-name")
                .or_else(|| dom::first(tag, ".tag__name").and_then(|el| dom::text(&el)))
        })
        .map(|raw| {
            let (category, name) = split_name_prefix(&raw);
            ExtractedTag::new(name, category)
        })
        .collect()
}

/// Full-size URL from the `data-uris` map on the image container.
fn full_image(page: &Page) -> Option<String> {
    let raw = page
        .first(".image-show-container[data-uris]")
        .and_then(|el| dom::attr(&el, "data-uris"))?;
    let uris: HashMap<String, String> = serde_json::from_str(&raw)
        .map_err(|err| log::debug!("derpibooru data-uris did not parse: {err}"))
        .ok()?;
    uris.get("full")
        .and_then(|full| url_utils::normalize_url(full, page.base_url()))
}

pub(super) fn extract(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(prefixed_tags(page)),
        image_url: full_image(page)
            .or_else(|| image::image_url(page, "#image-display"))
            .or_else(|| {
                page.meta("og:image")
                    .and_then(|raw| url_utils::normalize_url(&raw, page.base_url()))
            }),
        title: title::title(page, &[], None),
    }
}
