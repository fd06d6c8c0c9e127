//! Canonical tag categories and the tables that normalize site vocabulary.
//!
//! Every site classifies tags with its own vocabulary: CSS class fragments
//! (`tag-type-character`, `tag-type-4`), `data-*` attribute values, sidebar
//! header text, or prefixes inside the tag name itself. Each table here maps
//! one such vocabulary onto [`TagCategory`] and carries an explicit default,
//! so resolution is total over arbitrary input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five canonical buckets every site tag is normalized into.
///
/// Declaration order is display order, and `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Copyright,
    Character,
    General,
    Meta,
    /// Artists and anything a site classifies in a way we don't map.
    Other,
}

impl TagCategory {
    /// All categories in display order.
    pub const ALL: [TagCategory; 5] = [
        TagCategory::Copyright,
        TagCategory::Character,
        TagCategory::General,
        TagCategory::Meta,
        TagCategory::Other,
    ];

    /// Lowercase identifier, as used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TagCategory::Copyright => "copyright",
            TagCategory::Character => "character",
            TagCategory::General => "general",
            TagCategory::Meta => "meta",
            TagCategory::Other => "other",
        }
    }

    /// Capitalized display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TagCategory::Copyright => "Copyright",
            TagCategory::Character => "Character",
            TagCategory::General => "General",
            TagCategory::Meta => "Meta",
            TagCategory::Other => "Other",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for TagCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// How a table compares raw input against its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matching {
    /// Whole input equals the key (ASCII case-insensitive).
    Exact,
    /// Input contains the key; entries are tried in order, first hit wins.
    Substring,
}

/// A read-only mapping from raw site vocabulary to a [`TagCategory`].
#[derive(Debug)]
pub struct CategoryTable {
    name: &'static str,
    entries: &'static [(&'static str, TagCategory)],
    default: TagCategory,
    matching: Matching,
}

impl CategoryTable {
    /// Table name, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Raw tokens this table knows, in lookup order.
    #[must_use]
    pub const fn entries(&self) -> &'static [(&'static str, TagCategory)] {
        self.entries
    }

    /// Category used for input the table does not recognize.
    #[must_use]
    pub const fn default_category(&self) -> TagCategory {
        self.default
    }

    /// Looks up a raw token, returning `None` when the table has no entry for it.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<TagCategory> {
        let raw = raw.trim().to_ascii_lowercase();
        if raw.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| match self.matching {
                Matching::Exact => raw == *key,
                Matching::Substring => raw.contains(key),
            })
            .map(|(_, category)| *category)
    }

    /// Resolves a raw token, falling back to the table default.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> TagCategory {
        self.get(raw).unwrap_or(self.default)
    }
}

/// Class fragments (the part after `tag-type-`, or a bare class token) and
/// numeric type codes.
pub static CLASS_TOKENS: CategoryTable = CategoryTable {
    name: "class",
    entries: &[
        ("copyright", TagCategory::Copyright),
        ("3", TagCategory::Copyright),
        ("character", TagCategory::Character),
        ("4", TagCategory::Character),
        ("general", TagCategory::General),
        ("0", TagCategory::General),
        ("reference", TagCategory::General),
        ("object", TagCategory::General),
        ("metadata", TagCategory::Meta),
        ("meta", TagCategory::Meta),
        ("5", TagCategory::Meta),
        ("style", TagCategory::Meta),
        ("artist", TagCategory::Other),
        ("1", TagCategory::Other),
    ],
    default: TagCategory::Other,
    matching: Matching::Exact,
};

/// `data-category` / `data-type` attribute values.
pub static ATTRIBUTE_VALUES: CategoryTable = CategoryTable {
    name: "attribute",
    entries: &[
        ("copyright", TagCategory::Copyright),
        ("character", TagCategory::Character),
        ("general", TagCategory::General),
        ("species", TagCategory::General),
        ("meta", TagCategory::Meta),
        ("style", TagCategory::Meta),
        ("artist", TagCategory::Other),
    ],
    default: TagCategory::Other,
    matching: Matching::Exact,
};

/// Sidebar header phrases, matched as substrings in this order.
pub static HEADER_TEXT: CategoryTable = CategoryTable {
    name: "header",
    entries: &[
        ("copyright", TagCategory::Copyright),
        ("source:", TagCategory::Copyright),
        ("character", TagCategory::Character),
        ("general", TagCategory::General),
        ("tags:", TagCategory::General),
        ("meta", TagCategory::Meta),
        ("artist", TagCategory::Other),
    ],
    default: TagCategory::Other,
    matching: Matching::Substring,
};

/// Namespaces written inline in the tag name (`artist:foo`, `oc:bar`).
/// Unprefixed names are ordinary descriptive tags.
pub static NAME_PREFIXES: CategoryTable = CategoryTable {
    name: "prefix",
    entries: &[
        ("artist", TagCategory::Other),
        ("editor", TagCategory::Other),
        ("photographer", TagCategory::Other),
        ("colorist", TagCategory::Other),
        ("oc", TagCategory::Character),
        ("character", TagCategory::Character),
        ("series", TagCategory::Copyright),
        ("comic", TagCategory::Copyright),
        ("fanfic", TagCategory::Copyright),
        ("art pack", TagCategory::Copyright),
        ("copyright", TagCategory::Copyright),
        ("meta", TagCategory::Meta),
    ],
    default: TagCategory::General,
    matching: Matching::Exact,
};

/// Splits a namespaced tag name into its category and the bare name.
///
/// Only prefixes present in [`NAME_PREFIXES`] are stripped, so names that
/// merely contain a colon (`re:zero`) are left intact.
#[must_use]
pub fn split_name_prefix(raw: &str) -> (TagCategory, &str) {
    if let Some((prefix, rest)) = raw.split_once(':') {
        if let Some(category) = NAME_PREFIXES.get(prefix) {
            let rest = rest.trim();
            if !rest.is_empty() {
                return (category, rest);
            }
        }
    }
    (NAME_PREFIXES.default_category(), raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: [&CategoryTable; 4] = [&CLASS_TOKENS, &ATTRIBUTE_VALUES, &HEADER_TEXT, &NAME_PREFIXES];

    #[test]
    fn every_table_entry_resolves_to_its_own_category() {
        for table in TABLES {
            for (token, category) in table.entries() {
                assert_eq!(table.get(token), Some(*category), "{} table, token {token}", table.name());
                assert!(TagCategory::ALL.contains(&table.resolve(token)));
            }
        }
    }

    #[test]
    fn unknown_tokens_fall_back_to_table_default() {
        assert_eq!(CLASS_TOKENS.resolve("lore"), TagCategory::Other);
        assert_eq!(ATTRIBUTE_VALUES.resolve("invalid"), TagCategory::Other);
        assert_eq!(HEADER_TEXT.resolve("Statistics"), TagCategory::Other);
        assert_eq!(NAME_PREFIXES.resolve("spoiler"), TagCategory::General);
        assert_eq!(CLASS_TOKENS.get(""), None);
    }

    #[test]
    fn class_tokens_cover_names_and_numeric_codes() {
        assert_eq!(CLASS_TOKENS.resolve("3"), TagCategory::Copyright);
        assert_eq!(CLASS_TOKENS.resolve("4"), TagCategory::Character);
        assert_eq!(CLASS_TOKENS.resolve("0"), TagCategory::General);
        assert_eq!(CLASS_TOKENS.resolve("5"), TagCategory::Meta);
        assert_eq!(CLASS_TOKENS.resolve("1"), TagCategory::Other);
        assert_eq!(CLASS_TOKENS.resolve("Style"), TagCategory::Meta);
    }

    #[test]
    fn header_matching_is_ordered_substring() {
        assert_eq!(HEADER_TEXT.resolve("  Copyrights  "), TagCategory::Copyright);
        assert_eq!(HEADER_TEXT.resolve("Characters:"), TagCategory::Character);
        assert_eq!(HEADER_TEXT.resolve("Metadata"), TagCategory::Meta);
        assert_eq!(HEADER_TEXT.resolve("Tags:"), TagCategory::General);
        assert_eq!(HEADER_TEXT.resolve("Artist"), TagCategory::Other);
        // "copyright" is listed before "character"
        assert_eq!(HEADER_TEXT.resolve("character copyright"), TagCategory::Copyright);
    }

    #[test]
    fn attribute_values_are_case_insensitive() {
        assert_eq!(ATTRIBUTE_VALUES.resolve("Species"), TagCategory::General);
        assert_eq!(ATTRIBUTE_VALUES.resolve("ARTIST"), TagCategory::Other);
        assert_eq!(ATTRIBUTE_VALUES.resolve("style"), TagCategory::Meta);
    }

    #[test]
    fn split_name_prefix_strips_known_namespaces_only() {
        assert_eq!(split_name_prefix("artist:somebody"), (TagCategory::Other, "somebody"));
        assert_eq!(split_name_prefix("oc:Star Chaser"), (TagCategory::Character, "Star Chaser"));
        assert_eq!(split_name_prefix("re:zero"), (TagCategory::General, "re:zero"));
        assert_eq!(split_name_prefix("safe"), (TagCategory::General, "safe"));
        assert_eq!(split_name_prefix("artist:"), (TagCategory::General, "artist:"));
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in TagCategory::ALL {
            assert_eq!(category.as_str().parse::<TagCategory>(), Ok(category));
        }
        assert!("unknown".parse::<TagCategory>().is_err());
        assert_eq!(TagCategory::Meta.label(), "Meta");
    }

    #[test]
    fn ordering_follows_display_order() {
        let mut sorted = TagCategory::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, TagCategory::ALL);
    }
}
