//! Pixiv: post data is embedded as JSON in `meta#meta-preload-data`.
//!
//! The JSON path is exact; when the blob is missing or unparseable the
//! strategy falls back to scraping tag anchors and `og:image`.

use std::collections::HashMap;

use serde::Deserialize;

use crate::category::TagCategory;
use crate::dom;
use crate::extractor::{group, structured_or_dom, sweep, title, ExtractedTag};
use crate::normalize;
use crate::page::Page;
use crate::result::ExtractionResult;
use crate::url_utils;

#[derive(Debug, Default, Deserialize)]
struct Preload {
    #[serde(default)]
    illust: HashMap<String, Illust>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Illust {
    illust_title: Option<String>,
    user_name: Option<String>,
    urls: Urls,
    tags: TagBlock,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Urls {
    original: Option<String>,
    regular: Option<String>,
    small: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TagBlock {
    tags: Vec<IllustTag>,
}

#[derive(Debug, Deserialize)]
struct IllustTag {
    tag: String,
    #[serde(default)]
    translation: Option<Translation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Translation {
    en: Option<String>,
}

impl IllustTag {
    /// English translation when the uploader's tag has one.
    fn display_name(&self) -> &str {
        self.translation
            .as_ref()
            .and_then(|t| t.en.as_deref())
            .filter(|en| !en.trim().is_empty())
            .unwrap_or(&self.tag)
    }
}

/// Artwork id from `/artworks/<id>` or `/en/artworks/<id>`.
fn artwork_id(page: &Page) -> Option<String> {
    page.url()
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .filter(|segment| segment.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
}

fn structured(page: &Page) -> Option<ExtractionResult> {
    let raw = page
        .first("meta#meta-preload-data")
        .and_then(|meta| dom::attr(&meta, "content"))?;

    let mut preload: Preload = match serde_json::from_str(&raw) {
        Ok(preload) => preload,
        Err(err) => {
            log::debug!("pixiv preload data did not parse: {err}");
            return None;
        }
    };

    let illust = match artwork_id(page).and_then(|id| preload.illust.remove(&id)) {
        Some(illust) => illust,
        None => preload.illust.into_values().next()?,
    };

    let tags = illust
        .tags
        .tags
        .iter()
        .map(|tag| ExtractedTag::new(tag.display_name(), TagCategory::General));

    let image_url = [&illust.urls.original, &illust.urls.regular, &illust.urls.small]
        .into_iter()
        .flatten()
        .find_map(|raw| url_utils::normalize_url(raw, page.base_url()));

    let title = illust.illust_title.as_deref().and_then(|title| {
        let composed = match illust.user_name.as_deref() {
            Some(user) if !user.trim().is_empty() => format!("{title} by {user}"),
            _ => title.to_string(),
        };
        normalize::clean_title(&composed)
    });

    Some(ExtractionResult {
        tags: group(tags),
        image_url,
        title,
    })
}

fn markup(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_tags(page, r#"a[href*="/tags/"]"#, None, |_| {
            TagCategory::General
        })),
        image_url: page
            .meta("og:image")
            .and_then(|raw| url_utils::normalize_url(&raw, page.base_url())),
        title: title::title(page, &[], None),
    }
}

pub(super) fn extract(page: &Page) -> ExtractionResult {
    structured_or_dom(page, structured, markup)
}
