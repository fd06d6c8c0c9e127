//! Charset sniffing and decoding for raw page bytes.
//!
//! Most booru pages are UTF-8, but older mirrors and some archive dumps are
//! served as Shift_JIS or windows-1252. The charset is taken from a byte
//! order mark, then a `<meta>` declaration in the first kilobyte, and
//! falls back to UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns;

/// Bytes examined for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

fn meta_charset(head: &str) -> Option<&'static Encoding> {
    [&patterns::CHARSET_META, &patterns::CONTENT_TYPE_CHARSET]
        .into_iter()
        .filter_map(|re| re.captures(head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Detects the character encoding of an HTML document.
///
/// Order: byte order mark, `<meta charset>`, `<meta http-equiv="Content-Type">`,
/// then UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    meta_charset(&head).unwrap_or(UTF_8)
}

/// Charset named by an HTTP `Content-Type` header value.
///
/// ```
/// use booru_tags::encoding::charset_from_content_type;
///
/// let encoding = charset_from_content_type("text/html; charset=Shift_JIS").unwrap();
/// assert_eq!(encoding.name(), "Shift_JIS");
/// assert!(charset_from_content_type("text/html").is_none());
/// ```
#[must_use]
pub fn charset_from_content_type(header: &str) -> Option<&'static Encoding> {
    header
        .split(';')
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .and_then(|(_, value)| Encoding::for_label(value.trim().trim_matches('"').as_bytes()))
}

/// Decodes HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than failing the page.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    decode_with(html, detect_encoding(html))
}

/// Decodes with a known encoding (e.g. from the HTTP header). A byte order
/// mark still wins.
#[must_use]
pub fn decode_with(html: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("malformed {} sequences replaced while decoding", used.name());
    }
    decoded.into_owned()
}
