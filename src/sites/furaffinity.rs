//! Fur Affinity: keyword anchors, plus the submitting artist.

use crate::category::TagCategory;
use crate::dom;
use crate::extractor::{group, image, sweep, title, ExtractedTag, TitleSource};
use crate::page::Page;
use crate::result::ExtractionResult;

const IMAGE: &str = "img#submissionImg";

pub(super) fn extract(page: &Page) -> ExtractionResult {
    let mut tags = sweep::sweep_tags(page, "section.tags-row span.tags a, #keywords a", None, |_| {
        TagCategory::General
    });

    if let Some(artist) = page
        .first(r#".submission-id-sub-container a[href*="/user/"] strong"#)
        .and_then(|el| dom::text(&el))
    {
        tags.push(ExtractedTag::new(artist, TagCategory::Other));
    }

    ExtractionResult {
        tags: group(tags),
        image_url: image::image_url_from(page, IMAGE, "data-fullview-src"),
        title: title::title(
            page,
            &[
                TitleSource::Selector(".submission-title h2 p"),
                TitleSource::Selector(".classic-submission-title h2"),
            ],
            Some(IMAGE),
        ),
    }
}
