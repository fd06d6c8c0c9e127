//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` used by every site strategy. All of them
//! are null-safe: a missing element or attribute comes back as `None` or an
//! empty collection, never as a panic.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get an attribute value, trimmed; `None` when missing or blank.
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Whitespace-separated class tokens of the first node in the selection.
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    sel.attr("class")
        .map(|classes| classes.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Check whether the element carries a class token.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    class_tokens(sel).iter().any(|token| token == class)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Check whether the element has the given tag name.
#[must_use]
pub fn is_tag(sel: &Selection, tag: &str) -> bool {
    tag_name(sel).is_some_and(|name| name == tag)
}

// === Text Content ===

/// Text content of the selection, trimmed; `None` when blank.
#[must_use]
pub fn text(sel: &Selection) -> Option<String> {
    let text = sel.text();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

// === Querying ===

/// First descendant matching the selector, in document order.
#[must_use]
pub fn first<'a>(root: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = root.select(selector);
    if found.is_empty() {
        None
    } else {
        Some(found.first())
    }
}

/// All descendants matching the selector, one selection per element.
#[must_use]
pub fn select_all<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Tree Navigation ===

/// Direct element children, in document order.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Ancestor elements, nearest first. The element itself is not included.
#[must_use]
pub fn ancestors<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut ancestors = Vec::new();
    let mut current = sel.parent();

    while current.exists() && tag_name(&current).is_some() {
        ancestors.push(current.clone());
        current = current.parent();
    }

    ancestors
}
