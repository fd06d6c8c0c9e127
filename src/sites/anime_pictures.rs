//! Anime-Pictures: tag anchors carry bare category classes.

use dom_query::Selection;

use crate::category::TagCategory;
use crate::dom;
use crate::extractor::{group, image, sweep, title, TitleSource};
use crate::page::Page;
use crate::result::ExtractionResult;

const IMAGE: &str = "img#big_preview";

fn anchor_category(anchor: &Selection) -> TagCategory {
    sweep::bare_class_category(anchor)
        .or_else(|| {
            dom::ancestors(anchor)
                .iter()
                .find(|el| dom::is_tag(el, "li"))
                .and_then(sweep::bare_class_category)
        })
        .unwrap_or(TagCategory::General)
}

pub(super) fn extract(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_tags(page, "ul.tags li a", None, anchor_category)),
        image_url: image::image_url(page, IMAGE),
        title: title::title(page, &[TitleSource::Selector(IMAGE)], Some(IMAGE)),
    }
}
