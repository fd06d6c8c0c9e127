//! Result types for extraction output.
//!
//! This module defines the structured output of a site strategy: tags
//! grouped by canonical category, plus the post's image URL and title.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::TagCategory;

/// Tags, image and title extracted from one post page.
///
/// Within a category, names are unique (ASCII case-insensitively) and keep
/// the casing and position of their first occurrence. Categories without
/// names are absent from `tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Tag names grouped by category, in first-seen order.
    pub tags: BTreeMap<TagCategory, Vec<String>>,

    /// Absolute URL of the post's primary image or video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Cleaned post title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ExtractionResult {
    /// Tag names in one category (empty slice when the category is absent).
    #[must_use]
    pub fn names(&self, category: TagCategory) -> &[String] {
        self.tags.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Number of tags across all categories.
    #[must_use]
    pub fn total_tags(&self) -> usize {
        self.tags.values().map(Vec::len).sum()
    }

    /// True when neither tags nor an image URL were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_tags() == 0 && self.image_url.is_none()
    }
}

/// Output of the top-level API: the matched site plus its extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    /// Registry name of the site the URL matched.
    #[serde(rename = "siteName")]
    pub site: &'static str,

    /// What the site strategy found.
    #[serde(flatten)]
    pub result: ExtractionResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        let mut tags = BTreeMap::new();
        tags.insert(TagCategory::General, vec!["1girl".to_string(), "solo".to_string()]);
        tags.insert(TagCategory::Copyright, vec!["touhou".to_string()]);
        ExtractionResult {
            tags,
            image_url: Some("https://cdn.example.com/a.jpg".to_string()),
            title: None,
        }
    }

    #[test]
    fn counts_and_lookups() {
        let result = sample();
        assert_eq!(result.total_tags(), 3);
        assert_eq!(result.names(TagCategory::Copyright), ["touhou".to_string()]);
        assert!(result.names(TagCategory::Meta).is_empty());
        assert!(!result.is_empty());
        assert!(ExtractionResult::default().is_empty());
    }

    #[test]
    fn serializes_with_lowercase_categories_and_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap_or_default();
        assert_eq!(json["tags"]["copyright"][0], "touhou");
        assert_eq!(json["imageUrl"], "https://cdn.example.com/a.jpg");
        assert!(json.get("title").is_none());
    }

    #[test]
    fn extraction_flattens_result_next_to_site_name() {
        let extraction = Extraction { site: "Danbooru", result: sample() };
        let json = serde_json::to_value(&extraction).unwrap_or_default();
        assert_eq!(json["siteName"], "Danbooru");
        assert_eq!(json["tags"]["general"][1], "solo");
    }

    #[test]
    fn deserializes_history_payload() {
        let json = r#"{"tags":{"character":["hakurei reimu"]},"imageUrl":"https://x/y.png"}"#;
        let result: ExtractionResult = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(result.names(TagCategory::Character), ["hakurei reimu".to_string()]);
        assert_eq!(result.title, None);
    }
}
