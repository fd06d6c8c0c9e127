//! e621: categories come from `data-category` on each list item.

use crate::extractor::{group, image, sweep, title, TitleSource};
use crate::page::Page;
use crate::result::ExtractionResult;

const IMAGE: &str = "#image, #image-container img, #image-container video source";

pub(super) fn extract(page: &Page) -> ExtractionResult {
    ExtractionResult {
        tags: group(sweep::sweep_tags(
            page,
            "section#tag-list > ul > li.tag-list-item",
            Some("a.tag-list-search > span:not(.tag-list-count)"),
            |li| sweep::attribute_category(li, "data-category"),
        )),
        image_url: image::image_url(page, IMAGE),
        title: title::title(
            page,
            &[
                TitleSource::Attribute("data-title"),
                TitleSource::Selector("#image-container h5"),
            ],
            Some("#image"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TagCategory;

    #[test]
    fn species_is_general_and_counts_are_ignored() {
        let html = r#"<section id="tag-list"><ul>
            <li class="tag-list-item" data-category="artist"><a class="tag-list-search"><span>someartist</span><span class="tag-list-count">120</span></a></li>
            <li class="tag-list-item" data-category="species"><a class="tag-list-search"><span>dragon</span><span class="tag-list-count">44k</span></a></li>
            <li class="tag-list-item" data-category="invalid"><a class="tag-list-search"><span>bad tag</span></a></li>
            </ul></section>
            <section id="image-container" data-title="A Dragon at Rest"><img id="image" src="https://static1.e621.net/data/aa/bb/aabb.png"></section>"#;
        let page = Page::parse(html, "https://e621.net/posts/42").unwrap();
        let result = extract(&page);

        assert_eq!(result.names(TagCategory::Other), ["someartist", "bad tag"]);
        assert_eq!(result.names(TagCategory::General), ["dragon"]);
        assert_eq!(result.title.as_deref(), Some("A Dragon at Rest"));
        assert_eq!(
            result.image_url.as_deref(),
            Some("https://static1.e621.net/data/aa/bb/aabb.png")
        );
    }
}
