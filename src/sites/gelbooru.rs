//! Gelbooru engine family: Safebooru (and TBIB), Gelbooru, Rule34.
//!
//! Safebooru and Rule34 render a sectioned sidebar (headers followed by
//! tag rows); Gelbooru's current theme tags each row with a class.

use crate::extractor::{group, image, sweep, title, TitleSource};
use crate::page::Page;
use crate::result::ExtractionResult;

const POST_LINK: &str = r#"a[href*="page=post"]"#;

pub(super) fn safebooru(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_sections(
            page,
            "#tag-sidebar",
            r#"a[href*="page=post"]:last-of-type"#,
        )),
        image_url: image::image_url(page, "#image"),
        title: title::title(page, &[TitleSource::Selector("title")], Some("#image")),
    }
}

pub(super) fn gelbooru(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_class_tagged(
            page,
            r#".tag-list li[class*="tag-type-"], #tag-sidebar li[class*="tag-type-"]"#,
            POST_LINK,
        )),
        image_url: image::image_url(page, "#image, #gelcomVideoPlayer source"),
        title: title::title(page, &[TitleSource::Selector("title")], Some("#image")),
    }
}

pub(super) fn rule34(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_sections(
            page,
            "#tag-sidebar, .sidebar > div:last-of-type",
            POST_LINK,
        )),
        image_url: image::image_url(
            page,
            "#image, #gelcomVideoPlayer source, video#videoelement source",
        ),
        title: title::title(page, &[TitleSource::Selector("title")], Some("#image")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TagCategory;

    #[test]
    fn safebooru_sections_follow_headers() {
        let html = r#"<ul id="tag-sidebar">
            <li class="tag-type-header"><h6>Copyright</h6></li>
            <li class="tag"><a href="index.php?page=wiki&amp;s=list">?</a> <a href="index.php?page=post&amp;s=list&amp;tags=touhou">touhou</a> <span>4021</span></li>
            <li><h6>Character</h6></li>
            <li class="tag"><a href="index.php?page=post&amp;s=list&amp;tags=kirisame_marisa">kirisame marisa</a></li>
            <li><h6>General</h6></li>
            <li class="tag"><a href="index.php?page=post&amp;s=list&amp;tags=hat">hat</a></li>
            </ul>"#;
        let page = Page::parse(html, "https://safebooru.org/index.php?page=post&s=view&id=1").unwrap();
        let result = safebooru(&page);

        assert_eq!(result.names(TagCategory::Copyright), ["touhou"]);
        assert_eq!(result.names(TagCategory::Character), ["kirisame marisa"]);
        assert_eq!(result.names(TagCategory::General), ["hat"]);
    }

    #[test]
    fn gelbooru_video_post_uses_source_element() {
        let html = r#"<ul class="tag-list">
            <li class="tag-type-artist"><a href="index.php?page=post&amp;s=list&amp;tags=someone">someone</a></li>
            <li class="tag-type-general"><a href="index.php?page=post&amp;s=list&amp;tags=animated">animated</a></li>
            </ul>
            <video id="gelcomVideoPlayer"><source src="https://video-cdn.gelbooru.com/images/a.webm"></video>"#;
        let page = Page::parse(html, "https://gelbooru.com/index.php?page=post&s=view&id=2").unwrap();
        let result = gelbooru(&page);

        assert_eq!(result.names(TagCategory::Other), ["someone"]);
        assert_eq!(result.names(TagCategory::General), ["animated"]);
        assert_eq!(
            result.image_url.as_deref(),
            Some("https://video-cdn.gelbooru.com/images/a.webm")
        );
    }
}
