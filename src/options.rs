//! Configuration options for the top-level extraction API.
//!
//! Site strategies themselves take no options; these only steer the
//! checks that run around them in `extract_with_options`.

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use booru_tags::Options;
///
/// let options = Options {
///     require_content: true,
///     ..Options::default()
/// };
/// assert!(options.detect_blocked_pages);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Check the document for anti-bot, rate-limit and login pages before
    /// extracting, and fail with `Error::Blocked` when one is recognized.
    ///
    /// Default: `true`
    pub detect_blocked_pages: bool,

    /// Fail with `Error::NoContent` when a page yields neither tags nor an
    /// image URL. When disabled such pages come back as an empty result.
    ///
    /// Default: `false`
    pub require_content: bool,

    /// Base URL used to resolve relative image URLs, overriding both the
    /// post URL and any `<base href>` in the document.
    ///
    /// Default: `None`
    pub base_url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            detect_blocked_pages: true,
            require_content: false,
            base_url: None,
        }
    }
}
