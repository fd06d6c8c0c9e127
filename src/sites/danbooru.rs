//! Danbooru engine: Danbooru, its Donmai mirrors, and AIBooru.

use crate::extractor::{group, image, sweep, title, TitleSource};
use crate::page::Page;
use crate::result::ExtractionResult;

const IMAGE: &str = "#image";
const TAG_NAME: &str = "a.search-tag";

pub(super) fn danbooru(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_class_tagged(
            page,
            r#"#tag-list li[class*="tag-type-"]"#,
            TAG_NAME,
        )),
        image_url: image::image_url(page, IMAGE),
        title: title::title(page, &[TitleSource::Selector("title")], Some(IMAGE)),
    }
}

pub(super) fn aibooru(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_class_tagged(
            page,
            r#"div.categorized-tag-list li[class*="tag-type-"]"#,
            TAG_NAME,
        )),
        image_url: image::image_url(page, IMAGE),
        title: title::title(page, &[TitleSource::Selector("title")], Some(IMAGE)),
    }
}
