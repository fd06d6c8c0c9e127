//! Zerochan: tags are a comma-separated paragraph under the image.

use crate::category::TagCategory;
use crate::dom;
use crate::extractor::{group, image, title, ExtractedTag, TitleSource};
use crate::normalize;
use crate::page::Page;
use crate::result::ExtractionResult;

const PREVIEW_IMAGE: &str = "#large > a.preview > img.jpg";

fn comma_tags(page: &Page) -> Vec<ExtractedTag> {
    page.first("#large > p")
        .and_then(|p| dom::text(&p))
        .map(|blob| {
            blob.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| ExtractedTag::new(name, TagCategory::General))
                .collect()
        })
        .unwrap_or_default()
}

/// The preview `<img title>` reads `Hatsune Miku (1200x1600)`.
fn preview_title(page: &Page) -> Option<String> {
    let raw = page.first(PREVIEW_IMAGE).and_then(|img| dom::attr(&img, "title"))?;
    let name = raw.split(" (").next().unwrap_or(&raw);
    normalize::clean_title(name)
}

pub(super) fn extract(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(comma_tags(page)),
        image_url: image::image_url_from(page, "#large > a.preview", "href")
            .or_else(|| image::image_url(page, PREVIEW_IMAGE)),
        title: title::title(page, &[TitleSource::Selector("title")], None).or_else(|| preview_title(page)),
    }
}
