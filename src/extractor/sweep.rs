//! Tag sweeps over a document.
//!
//! - [`sweep_tags`]: every element matching a container selector is one tag;
//!   its name comes from a child selector and its category from a resolver.
//! - [`sweep_sections`]: walk the children of one sidebar container in
//!   order, letting header rows set the category of the items after them.

use dom_query::Selection;

use super::state::{ScanEvent, SectionScan};
use super::tags::ExtractedTag;
use crate::category::{TagCategory, ATTRIBUTE_VALUES, CLASS_TOKENS};
use crate::dom;
use crate::page::Page;

/// Class prefix sites use to mark tag categories (`tag-type-character`).
const TAG_TYPE_PREFIX: &str = "tag-type-";

/// Row classes that mark a sidebar header rather than a tag.
const HEADER_CLASSES: [&str; 2] = ["tag-type-header", "tag-sidebar-header"];

/// Category declared by the element's own `tag-type-*` class, if any.
#[must_use]
pub fn own_class_category(sel: &Selection) -> Option<TagCategory> {
    dom::class_tokens(sel).iter().find_map(|token| {
        token
            .strip_prefix(TAG_TYPE_PREFIX)
            .filter(|fragment| !fragment.is_empty() && *fragment != "header")
            .map(|fragment| CLASS_TOKENS.resolve(fragment))
    })
}

/// Category from the element's `tag-type-*` class, falling back to the
/// nearest ancestor that carries one.
#[must_use]
pub fn class_category(sel: &Selection) -> Option<TagCategory> {
    own_class_category(sel).or_else(|| dom::ancestors(sel).iter().find_map(own_class_category))
}

/// Category from bare class tokens (`copyright`, `character`, `artist`),
/// as used by themes without the `tag-type-` prefix.
#[must_use]
pub fn bare_class_category(sel: &Selection) -> Option<TagCategory> {
    dom::class_tokens(sel)
        .iter()
        .find_map(|token| CLASS_TOKENS.get(token))
}

/// Category from a `data-*` attribute through the attribute table.
#[must_use]
pub fn attribute_category(sel: &Selection, attribute: &str) -> TagCategory {
    dom::attr(sel, attribute).map_or(ATTRIBUTE_VALUES.default_category(), |value| {
        ATTRIBUTE_VALUES.resolve(&value)
    })
}

/// Collects one tag per element matching `container`.
///
/// The name is the text of the first descendant matching `name` (or of the
/// element itself when `name` is `None`); elements without a name are
/// skipped. `resolve` receives the container element.
pub fn sweep_tags<F>(page: &Page, container: &str, name: Option<&str>, resolve: F) -> Vec<ExtractedTag>
where
    F: Fn(&Selection) -> TagCategory,
{
    dom::select_all(&page.select("html"), container)
        .iter()
        .filter_map(|item| {
            let raw = match name {
                Some(selector) => dom::first(item, selector).and_then(|el| dom::text(&el)),
                None => dom::text(item),
            }?;
            Some(ExtractedTag::new(raw, resolve(item)))
        })
        .collect()
}

/// Class-tagged list: category from `tag-type-*` classes with ancestor
/// fallback, `General` when nothing declares one.
pub fn sweep_class_tagged(page: &Page, container: &str, name: &str) -> Vec<ExtractedTag> {
    sweep_tags(page, container, Some(name), |item| {
        class_category(item).unwrap_or(TagCategory::General)
    })
}

fn is_header_row(child: &Selection) -> bool {
    if dom::is_tag(child, "h3") || dom::is_tag(child, "h6") {
        return true;
    }
    if HEADER_CLASSES.iter().any(|class| dom::has_class(child, class)) {
        return true;
    }
    dom::is_tag(child, "li") && dom::first(child, "h6").is_some()
}

/// Sectioned list: walks the children of the first element matching
/// `container`. Header rows (`h3`, `h6`, `.tag-type-header`,
/// `.tag-sidebar-header`, or an `li` wrapping an `h6`) set the current
/// category; `ul` children and bare `li.tag` rows are items.
pub fn sweep_sections(page: &Page, container: &str, name: &str) -> Vec<ExtractedTag> {
    let Some(sidebar) = page.first(container) else {
        log::debug!("no sectioned tag container matching {container:?}");
        return Vec::new();
    };

    let mut scan = SectionScan::new();
    let mut tags = Vec::new();

    for child in dom::element_children(&sidebar) {
        if is_header_row(&child) {
            if let Some(text) = dom::text(&child) {
                scan.step(ScanEvent::Header(&text));
            }
            continue;
        }

        let items = if dom::is_tag(&child, "ul") {
            dom::element_children(&child)
                .into_iter()
                .filter(|li| dom::is_tag(li, "li"))
                .collect()
        } else if dom::is_tag(&child, "li") && dom::has_class(&child, "tag") {
            vec![child]
        } else {
            Vec::new()
        };

        for item in items {
            let Some(category) = scan.step(ScanEvent::Item(own_class_category(&item))) else {
                continue;
            };
            if let Some(raw) = dom::first(&item, name).and_then(|el| dom::text(&el)) {
                tags.push(ExtractedTag::new(raw, category));
            }
        }
    }

    tags
}

/// Definition-list variant of the sectioned sweep: `dt` rows are headers,
/// `dd` rows carrying `item_class` hold the tag links. Items under headers
/// the header table does not know are skipped.
pub fn sweep_definition_list(page: &Page, container: &str, item_class: &str, name: &str) -> Vec<ExtractedTag> {
    let Some(list) = page.first(container) else {
        return Vec::new();
    };

    let mut scan = SectionScan::new().skip_unknown_sections();
    let mut tags = Vec::new();

    for child in dom::element_children(&list) {
        if dom::is_tag(&child, "dt") {
            scan.step(ScanEvent::Header(&dom::text(&child).unwrap_or_default()));
        } else if dom::is_tag(&child, "dd") && dom::has_class(&child, item_class) {
            let Some(category) = scan.step(ScanEvent::Item(None)) else {
                continue;
            };
            tags.extend(
                dom::select_all(&child, name)
                    .iter()
                    .filter_map(dom::text)
                    .map(|raw| ExtractedTag::new(raw, category)),
            );
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::tags::group;

    fn page(html: &str) -> Page {
        Page::parse(html, "https://example.org/post/1").unwrap()
    }

    #[test]
    fn class_category_reads_item_then_ancestors() {
        let p = page(r#"<ul class="tag-type-character"><li id="a" class="tag-type-3"><a>x</a></li><li id="b"><a>y</a></li></ul>"#);
        assert_eq!(class_category(&p.select("#a")), Some(TagCategory::Copyright));
        assert_eq!(class_category(&p.select("#b")), Some(TagCategory::Character));
        assert_eq!(class_category(&p.select("ul")), Some(TagCategory::Character));
        assert_eq!(class_category(&p.select("body")), None);
    }

    #[test]
    fn unknown_tag_type_fragment_is_other() {
        let p = page(r#"<li class="tag-type-lore"><a>x</a></li>"#);
        assert_eq!(own_class_category(&p.select("li")), Some(TagCategory::Other));
    }

    #[test]
    fn class_tagged_sweep_defaults_to_general() {
        let p = page(r#"<ul id="tags">
            <li class="tag-type-4"><a class="n">hakurei reimu</a></li>
            <li><a class="n">solo</a></li>
            <li class="tag-type-1"><span>no name link</span></li>
        </ul>"#);
        let grouped = group(sweep_class_tagged(&p, "#tags li", "a.n"));
        assert_eq!(grouped[&TagCategory::Character], vec!["hakurei reimu"]);
        assert_eq!(grouped[&TagCategory::General], vec!["solo"]);
        assert!(!grouped.contains_key(&TagCategory::Other));
    }

    #[test]
    fn sectioned_sweep_copyright_header_then_tag_row() {
        let p = page(r#"<ul id="tag-sidebar">
            <li class="tag-type-header"><h6>Copyright</h6></li>
            <li class="tag"><a>touhou</a></li>
        </ul>"#);
        let grouped = group(sweep_sections(&p, "#tag-sidebar", "a"));
        assert_eq!(grouped[&TagCategory::Copyright], vec!["touhou"]);
        assert_eq!(grouped.len(), 1);
    }

    #[test]
    fn sectioned_sweep_handles_headers_and_nested_lists() {
        let p = page(r#"<div id="side">
            <h3>Copyright</h3>
            <ul><li><a>touhou</a></li></ul>
            <h3>Characters</h3>
            <ul><li><a>hakurei reimu</a></li><li class="tag-type-metadata"><a>highres</a></li></ul>
            <h6>General</h6>
            <ul><li><a>? solo 1200</a></li></ul>
            <p>not a list</p>
        </div>"#);
        let grouped = group(sweep_sections(&p, "#side", "a"));
        assert_eq!(grouped[&TagCategory::Copyright], vec!["touhou"]);
        assert_eq!(grouped[&TagCategory::Character], vec!["hakurei reimu"]);
        assert_eq!(grouped[&TagCategory::Meta], vec!["highres"]);
        assert_eq!(grouped[&TagCategory::General], vec!["solo"]);
    }

    #[test]
    fn sectioned_sweep_missing_container_is_empty() {
        let p = page("<div></div>");
        assert!(sweep_sections(&p, "#tag-sidebar", "a").is_empty());
    }

    #[test]
    fn definition_list_skips_unknown_sections() {
        let p = page(r#"<dl>
            <dt>Submitted By:</dt><dd class="quicktag"><span class="tag"><a>uploader</a></span></dd>
            <dt>Tags:</dt><dd class="quicktag"><span class="tag"><a>smile</a></span><span class="tag"><a>hat</a></span></dd>
            <dt>Source:</dt><dd class="quicktag"><span class="tag"><a>Touhou</a></span></dd>
            <dt>Characters:</dt><dd><span class="tag"><a>not quicktag</a></span></dd>
        </dl>"#);
        let grouped = group(sweep_definition_list(&p, "dl", "quicktag", "span.tag a"));
        assert_eq!(grouped[&TagCategory::General], vec!["smile", "hat"]);
        assert_eq!(grouped[&TagCategory::Copyright], vec!["Touhou"]);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn attribute_category_uses_table_default() {
        let p = page(r#"<li id="a" data-category="species"></li><li id="b"></li>"#);
        assert_eq!(attribute_category(&p.select("#a"), "data-category"), TagCategory::General);
        assert_eq!(attribute_category(&p.select("#b"), "data-category"), TagCategory::Other);
    }
}
