//! E-Shuushuu: a definition list per post, `dt` labels and `dd.quicktag`
//! tag rows.

use crate::extractor::{group, image, sweep, title, TitleSource};
use crate::page::Page;
use crate::result::ExtractionResult;

pub(super) fn extract(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_definition_list(page, "div.meta dl", "quicktag", "span.tag a")),
        image_url: image::image_url_from(page, "a.thumb_image", "href"),
        title: title::title(page, &[TitleSource::Selector("div.title h2 a")], None),
    }
}
