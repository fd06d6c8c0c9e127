//! URL utility functions.
//!
//! Validation of post URLs and normalization of the image URLs sites embed
//! in their markup (protocol-relative, root-relative, or absolute).

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse a URL string into a Url object.
///
/// # Returns
/// * `Some(Url)` if valid absolute http(s) URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}

/// Normalize an image URL found in markup to an absolute URL.
///
/// - `//host/path` becomes `https://host/path`
/// - absolute http(s) URLs are kept as-is
/// - anything else is resolved against `base`
///
/// Returns `None` for empty input, script URLs, or paths that cannot be
/// resolved.
///
/// # Example
///
/// ```rust
/// use booru_tags::url_utils::normalize_url;
/// use url::Url;
///
/// let base = Url::parse("https://danbooru.donmai.us/posts/1").unwrap();
/// assert_eq!(
///     normalize_url("//cdn.example.com/img.jpg", &base).as_deref(),
///     Some("https://cdn.example.com/img.jpg")
/// );
/// assert_eq!(
///     normalize_url("/data/sample.jpg", &base).as_deref(),
///     Some("https://danbooru.donmai.us/data/sample.jpg")
/// );
/// ```
#[must_use]
pub fn normalize_url(raw: &str, base: &Url) -> Option<String> {
    let raw = raw.trim();

    if raw.is_empty() || raw.starts_with('#') {
        return None;
    }

    if raw.get(..11).is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:")) {
        return None;
    }

    if let Some(rest) = raw.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }

    let (is_abs, _) = is_absolute_url(raw);
    if is_abs {
        return Some(raw.to_string());
    }

    match base.join(raw) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(err) => {
            log::debug!("could not resolve {raw:?} against {base}: {err}");
            None
        }
    }
}
