//! Text normalizers for tag names and titles.
//!
//! Both are pure string functions. Tag cleanup strips the count and marker
//! noise sidebars put around names; title cleanup runs an ordered chain of
//! substitutions and then rejects results that look like a mis-fire.

use crate::patterns;

/// Titles that are really just a placeholder or a bare site name.
const PLACEHOLDER_TITLES: &[&str] = &[
    "image",
    "post",
    "artwork",
    "illustration",
    "untitled",
    "danbooru",
    "safebooru",
    "gelbooru",
    "rule 34",
    "rule34",
    "e621",
    "aibooru",
    "yande.re",
    "konachan",
    "anime-pictures",
    "zerochan",
    "zerochan anime image board",
    "e-shuushuu",
    "pixiv",
    "fur affinity",
    "derpibooru",
];

/// Words whose presence suggests a real sentence rather than a tag dump.
const CONNECTIVES: &[&str] = &[
    "a", "an", "and", "at", "by", "for", "from", "in", "is", "of", "on", "the", "to", "with",
];

/// Minimum title length in characters.
const MIN_TITLE_CHARS: usize = 3;

/// Maximum token count for a title without sentence structure.
const MAX_DUMP_TOKENS: usize = 10;

/// Cleans a raw tag name as shown in a site sidebar.
///
/// Trims whitespace, strips a leading `?` marker, then a trailing
/// parenthesized usage count (`touhou (12.3k)`) and a trailing bare integer
/// (`touhou 120345`). Rules are applied until nothing changes, so the
/// function is idempotent.
///
/// # Example
///
/// ```rust
/// use booru_tags::normalize::clean_tag_name;
///
/// assert_eq!(clean_tag_name("? touhou (12.3k)"), "touhou");
/// assert_eq!(clean_tag_name(" hakurei reimu 4021 "), "hakurei reimu");
/// ```
#[must_use]
pub fn clean_tag_name(raw: &str) -> String {
    let mut current = raw.trim().to_string();
    loop {
        let next = patterns::LEADING_MARKER.replace(&current, "");
        let next = patterns::TRAILING_COUNT.replace(&next, "");
        let next = patterns::TRAILING_INTEGER.replace(&next, "");
        let next = next.trim();
        if next == current {
            return current;
        }
        current = next.to_string();
    }
}

/// Runs the title cleanup chain without the plausibility check.
///
/// Substitutions run in a fixed order: AIBooru prefix, `»` separators,
/// leading brand, leading `Post #N`, Anime-Pictures preamble and tag tail,
/// pixel/file-size suffix, `[pixiv]` marker, trailing brand, trailing
/// `Image #N`, trailing brand again (for `... - Image #1 - Danbooru`),
/// whitespace collapse and separator trim.
#[must_use]
pub fn strip_title_noise(raw: &str) -> String {
    let title = patterns::WHITESPACE_NORMALIZE.replace_all(raw.trim(), " ");
    let title = patterns::AIBOORU_PREFIX.replace(&title, "");
    let title = patterns::GUILLEMET_SEPARATOR.replace_all(&title, " - ");
    let title = patterns::LEADING_BRAND.replace(&title, "");
    let title = patterns::LEADING_POST_INDEX.replace(&title, "");
    let title = patterns::ANIME_PICTURE_PREAMBLE.replace(&title, "");
    let title = patterns::SINGLE_IMAGE_TAIL.replace(&title, "");
    let title = patterns::DIMENSIONS_SUFFIX.replace(&title, "");
    let title = patterns::BRACKETED_BRAND.replace(&title, "");
    let title = patterns::TRAILING_BRAND.replace(&title, "");
    let title = patterns::TRAILING_POST_INDEX.replace(&title, "");
    let title = patterns::TRAILING_BRAND.replace(&title, "");
    let title = patterns::WHITESPACE_NORMALIZE.replace_all(&title, " ");
    let title = patterns::EDGE_SEPARATORS.replace_all(&title, "");
    title.trim().to_string()
}

/// Returns true when a cleaned title looks like a real title.
///
/// Rejects titles under three characters, digit-only titles, placeholder
/// words and bare site names, and tag dumps (more than ten tokens with no
/// sentence-ending punctuation and no connective words; commas alone do not
/// count, since comma-separated tag lists are the usual dump).
#[must_use]
pub fn is_plausible_title(title: &str) -> bool {
    if title.chars().count() < MIN_TITLE_CHARS {
        return false;
    }
    if patterns::NUMERIC_ONLY.is_match(title) {
        return false;
    }
    let lower = title.to_lowercase();
    if PLACEHOLDER_TITLES.contains(&lower.as_str()) {
        return false;
    }
    let tokens: Vec<&str> = lower.split_whitespace().collect();
    if tokens.len() > MAX_DUMP_TOKENS && !has_sentence_structure(&tokens) {
        return false;
    }
    true
}

fn has_sentence_structure(tokens: &[&str]) -> bool {
    tokens.iter().any(|token| {
        CONNECTIVES.contains(token)
            || token.ends_with(['.', '!', '?'])
    })
}

/// Cleans a raw title candidate, returning `None` when the result is not a
/// plausible title.
///
/// # Example
///
/// ```rust
/// use booru_tags::normalize::clean_title;
///
/// assert_eq!(
///     clean_title("Danbooru - original (1girl) - Image #12345").as_deref(),
///     Some("original (1girl)")
/// );
/// assert_eq!(clean_title("Post #4411 - e621"), None);
/// ```
#[must_use]
pub fn clean_title(raw: &str) -> Option<String> {
    let title = strip_title_noise(raw);
    is_plausible_title(&title).then_some(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_tag_name_strips_counts_and_markers() {
        assert_eq!(clean_tag_name("touhou (12.3k)"), "touhou");
        assert_eq!(clean_tag_name("? hakurei reimu"), "hakurei reimu");
        assert_eq!(clean_tag_name("solo 1204"), "solo");
        assert_eq!(clean_tag_name("  long hair (1,204)  "), "long hair");
        assert_eq!(clean_tag_name("tagme (character)"), "tagme (character)");
    }

    #[test]
    fn clean_tag_name_keeps_numeric_only_names() {
        assert_eq!(clean_tag_name("2000"), "2000");
        assert_eq!(clean_tag_name("? 2000"), "2000");
    }

    #[test]
    fn clean_tag_name_is_idempotent() {
        let samples = [
            "touhou 12 34",
            "? ? solo (3k)",
            "name (12) 5",
            "(12)",
            "  ?  ",
            "kantai collection (44.5k) 9",
            "re:zero kara hajimeru isekai seikatsu",
        ];
        for raw in samples {
            let once = clean_tag_name(raw);
            assert_eq!(clean_tag_name(&once), once, "input {raw:?}");
            assert!(!once.starts_with('?'), "input {raw:?}");
            assert!(!patterns::TRAILING_COUNT.is_match(&once), "input {raw:?}");
        }
    }

    #[test]
    fn title_strips_leading_brand_and_trailing_index() {
        assert_eq!(
            clean_title("Danbooru - original (1girl) - Image #12345").as_deref(),
            Some("original (1girl)")
        );
    }

    #[test]
    fn title_strips_trailing_brand() {
        assert_eq!(
            clean_title("hakurei reimu (touhou) drawn by zun | Danbooru").as_deref(),
            Some("hakurei reimu (touhou) drawn by zun")
        );
        assert_eq!(
            clean_title("Cool Dragon by someartist -- Fur Affinity [dot] net").as_deref(),
            Some("Cool Dragon by someartist")
        );
        assert_eq!(clean_title("夏の日/「作者」のイラスト [pixiv]").as_deref(), Some("夏の日/「作者」のイラスト"));
    }

    #[test]
    fn title_strips_dimensions_suffix() {
        assert_eq!(
            clean_title("Hatsune Miku (1200✕1600 245 kB)").as_deref(),
            Some("Hatsune Miku")
        );
    }

    #[test]
    fn title_handles_aibooru_and_anime_pictures_forms() {
        assert_eq!(
            clean_title("aibooru | #5521 | 1girl, solo, smile").as_deref(),
            Some("1girl, solo, smile")
        );
        assert_eq!(
            clean_title("Anime picture 1000x1414 with touhou hakurei reimu single tall image long hair").as_deref(),
            Some("touhou hakurei reimu")
        );
    }

    #[test]
    fn title_rejects_misfires() {
        assert_eq!(clean_title("12345"), None);
        assert_eq!(clean_title("Post #4411 - e621"), None);
        assert_eq!(clean_title("Image"), None);
        assert_eq!(clean_title("ok"), None);
        assert_eq!(clean_title("Zerochan Anime Image Board"), None);
        assert_eq!(
            clean_title("1girl solo long_hair blue_eyes smile skirt thighhighs bow ribbon hat sitting"),
            None
        );
        assert_eq!(
            clean_title("#2931 - safe, artist:someone, oc:star, pony, smiling, solo, cute, grass, sky, tree, flower - Derpibooru"),
            None
        );
    }

    #[test]
    fn long_titles_with_sentence_structure_survive() {
        let title = "The girl in the garden at dusk waiting for the last train home";
        assert_eq!(clean_title(title).as_deref(), Some(title));
    }

    #[test]
    fn title_collapses_whitespace() {
        assert_eq!(clean_title("  Sunset \n\t over   Gensokyo ").as_deref(), Some("Sunset over Gensokyo"));
    }
}
