//! Tag collection and grouping.
//!
//! Strategies emit a flat sequence of `(name, category)` pairs; [`group`]
//! folds it into the per-category ordered sets of an `ExtractionResult`.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use crate::category::TagCategory;
use crate::normalize::clean_tag_name;

/// Header and widget labels that leak into tag lists on some themes.
pub static NOISE_LABELS: [&str; 13] = [
    "tag list",
    "?",
    "copyright",
    "copyrights",
    "character",
    "characters",
    "general",
    "meta",
    "metadata",
    "artist",
    "artists",
    "tags",
    "other",
];

/// `NOISE_LABELS` as a `HashSet`
pub static NOISE_LABEL_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    NOISE_LABELS.into_iter().collect()
});

/// A tag name with its resolved category, before grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTag {
    pub name: String,
    pub category: TagCategory,
}

impl ExtractedTag {
    #[must_use]
    pub fn new(name: impl Into<String>, category: TagCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// Returns true when a cleaned, lowercased name must not become a tag.
#[must_use]
pub fn is_noise(lower_name: &str, category: TagCategory) -> bool {
    lower_name.is_empty() || NOISE_LABEL_SET.contains(lower_name) || lower_name == category.as_str()
}

/// Groups extracted tags by category.
///
/// Names are cleaned with [`clean_tag_name`] and compared ASCII
/// case-insensitively; the first occurrence keeps its casing and position.
/// Empty names, noise labels and names equal to their own category are
/// dropped.
#[must_use]
pub fn group<I>(tags: I) -> BTreeMap<TagCategory, Vec<String>>
where
    I: IntoIterator<Item = ExtractedTag>,
{
    let mut grouped: BTreeMap<TagCategory, Vec<String>> = BTreeMap::new();
    let mut seen: HashSet<(TagCategory, String)> = HashSet::new();

    for tag in tags {
        let name = clean_tag_name(&tag.name);
        let key = name.to_ascii_lowercase();
        if is_noise(&key, tag.category) {
            continue;
        }
        if seen.insert((tag.category, key)) {
            grouped.entry(tag.category).or_default().push(name);
        }
    }

    grouped
}
