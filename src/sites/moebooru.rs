//! Moebooru engine: Yande.re and Konachan.

use crate::extractor::{group, image, sweep, title, ExtractedTag, TitleSource};
use crate::normalize::clean_tag_name;
use crate::page::Page;
use crate::result::ExtractionResult;

/// Placeholder tag Konachan attaches to untagged characters.
const KONACHAN_PLACEHOLDER: &str = "tagme (character)";

pub(super) fn yandere(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_class_tagged(
            page,
            r#"#tag-sidebar li[class*="tag-type-"]"#,
            r#"a[href*="/post?tags="]"#,
        )),
        image_url: image::image_url(page, "#image").or_else(|| image::image_url(page, "img.fit-width")),
        title: title::title(page, &[TitleSource::Selector("title")], Some("#image")),
    }
}

pub(super) fn konachan(page: &Page) -> ExtractionResult {
    let tags: Vec<ExtractedTag> = sweep::sweep_tags(
        page,
        "ul#tag-sidebar li.tag-link",
        Some("a:nth-of-type(2)"),
        |li| sweep::attribute_category(li, "data-type"),
    )
    .into_iter()
    .filter(|tag| !clean_tag_name(&tag.name).eq_ignore_ascii_case(KONACHAN_PLACEHOLDER))
    .collect();

    ExtractionResult {
        tags: group(tags),
        image_url: image::image_url(page, "#image"),
        title: title::title(page, &[TitleSource::Selector("title")], Some("#image")),
    }
}
