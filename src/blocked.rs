//! Block-page detection.
//!
//! Fetching a post page does not always return the post: anti-bot
//! challenges, rate-limit notices, login walls and empty shells come back
//! with a 200 too. Running a site strategy over such a page yields an
//! empty result that looks like a parser failure, so the top-level API
//! checks for them first.

use std::fmt;

use serde::Serialize;

use crate::dom;
use crate::error::Error;
use crate::page::Page;

/// What kind of non-post page was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Cloudflare,
    AccessDenied,
    RateLimited,
    Captcha,
    BrowserCheck,
    LoginRequired,
    EmptyPage,
}

impl BlockKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            BlockKind::Cloudflare => "Cloudflare protection",
            BlockKind::AccessDenied => "Access denied",
            BlockKind::RateLimited => "Rate limited",
            BlockKind::Captcha => "Captcha required",
            BlockKind::BrowserCheck => "Browser check",
            BlockKind::LoginRequired => "Login required",
            BlockKind::EmptyPage => "Empty page",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recognized block page and the evidence for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockedPage {
    pub kind: BlockKind,
    pub details: String,
}

impl From<BlockedPage> for Error {
    fn from(blocked: BlockedPage) -> Self {
        Error::Blocked {
            kind: blocked.kind,
            details: blocked.details,
        }
    }
}

/// Phrases that mark a block page, checked in order.
///
/// Single words are only trusted in a short `<title>`. Several sites put the
/// post's tag list in the title, and post descriptions mention them too.
const INDICATORS: &[(&str, BlockKind)] = &[
    ("cloudflare", BlockKind::Cloudflare),
    ("ddos protection", BlockKind::Cloudflare),
    ("attention required", BlockKind::Cloudflare),
    ("access denied", BlockKind::AccessDenied),
    ("blocked", BlockKind::AccessDenied),
    ("rate limit", BlockKind::RateLimited),
    ("too many requests", BlockKind::RateLimited),
    ("captcha", BlockKind::Captcha),
    ("checking your browser", BlockKind::BrowserCheck),
    ("just a moment", BlockKind::BrowserCheck),
    ("security check", BlockKind::BrowserCheck),
    ("javascript required", BlockKind::BrowserCheck),
    ("enable cookies", BlockKind::BrowserCheck),
];

const LOGIN_PHRASES: &[&str] = &[
    "you must be logged in",
    "requires an account",
    "please login",
    "please log in",
    "sign in required",
    "authentication required",
];

/// Elements only challenge pages render.
const CHALLENGE_SELECTORS: &[&str] = &["#challenge-running", ".cf-error-code", ".cf-browser-verification"];

const DETAIL_CHARS: usize = 200;

/// Longest title, in words, still checked against single-word indicators.
const SHORT_TITLE_WORDS: usize = 4;

fn is_phrase(indicator: &str) -> bool {
    indicator.contains(' ')
}

fn excerpt(text: &str) -> String {
    text.chars().take(DETAIL_CHARS).collect()
}

/// Recognizes anti-bot, rate-limit, login and empty pages.
///
/// Checks, in order: the `<title>` against the multi-word indicators, or
/// every indicator when the title is at most four words; the body text
/// against the multi-word indicators; challenge elements; login
/// phrases in the body; an empty `<body>`.
#[must_use]
pub fn detect_blocked_page(page: &Page) -> Option<BlockedPage> {
    if let Some(title) = page.title() {
        let lower = title.to_lowercase();
        let short = lower.split_whitespace().count() <= SHORT_TITLE_WORDS;
        if let Some((_, kind)) = INDICATORS
            .iter()
            .filter(|(indicator, _)| short || is_phrase(indicator))
            .find(|(indicator, _)| lower.contains(indicator))
        {
            return Some(BlockedPage {
                kind: *kind,
                details: format!("page title: {}", excerpt(&title)),
            });
        }
    }

    let body = page.first("body");
    let body_text = body
        .as_ref()
        .and_then(dom::text)
        .map(|text| text.to_lowercase())
        .unwrap_or_default();

    if let Some((phrase, kind)) = INDICATORS
        .iter()
        .filter(|(phrase, _)| is_phrase(phrase))
        .find(|(phrase, _)| body_text.contains(phrase))
    {
        return Some(BlockedPage {
            kind: *kind,
            details: format!("page content mentions {phrase:?}"),
        });
    }

    for selector in CHALLENGE_SELECTORS {
        if let Some(el) = page.first(selector) {
            let text = dom::text(&el).unwrap_or_default();
            return Some(BlockedPage {
                kind: BlockKind::Cloudflare,
                details: format!("challenge element {selector}: {}", excerpt(&text)),
            });
        }
    }

    if let Some(phrase) = LOGIN_PHRASES.iter().find(|phrase| body_text.contains(*phrase)) {
        return Some(BlockedPage {
            kind: BlockKind::LoginRequired,
            details: format!("page content mentions {phrase:?}"),
        });
    }

    let has_content = body.is_some_and(|body| !dom::element_children(&body).is_empty());
    if !has_content {
        return Some(BlockedPage {
            kind: BlockKind::EmptyPage,
            details: "page has no body content".to_string(),
        });
    }

    None
}
