//! Per-site extraction strategies.
//!
//! Each supported site is a [`SiteKind`]; the registry maps post URLs to a
//! kind and [`Extractor::extract`] dispatches to the matching strategy.
//! Strategies never fail: a missing container yields no tags, a missing
//! image or title yields `None`.

mod anime_pictures;
mod danbooru;
mod derpibooru;
mod e621;
mod eshuushuu;
mod furaffinity;
mod gelbooru;
mod moebooru;
mod pixiv;
mod zerochan;

use serde::Serialize;

use crate::page::Page;
use crate::result::ExtractionResult;

/// Extracts tags, image and title from a parsed post page.
pub trait Extractor {
    fn extract(&self, page: &Page) -> ExtractionResult;
}

/// The closed set of extraction strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteKind {
    Danbooru,
    AiBooru,
    Safebooru,
    Gelbooru,
    Rule34,
    Yandere,
    Konachan,
    E621,
    AnimePictures,
    Zerochan,
    EShuushuu,
    Pixiv,
    FurAffinity,
    Derpibooru,
}

impl Extractor for SiteKind {
    fn extract(&self, page: &Page) -> ExtractionResult {
        let result = match self {
            SiteKind::Danbooru => danbooru::danbooru(page),
            SiteKind::AiBooru => danbooru::aibooru(page),
            SiteKind::Safebooru => gelbooru::safebooru(page),
            SiteKind::Gelbooru => gelbooru::gelbooru(page),
            SiteKind::Rule34 => gelbooru::rule34(page),
            SiteKind::Yandere => moebooru::yandere(page),
            SiteKind::Konachan => moebooru::konachan(page),
            SiteKind::E621 => e621::extract(page),
            SiteKind::AnimePictures => anime_pictures::extract(page),
            SiteKind::Zerochan => zerochan::extract(page),
            SiteKind::EShuushuu => eshuushuu::extract(page),
            SiteKind::Pixiv => pixiv::extract(page),
            SiteKind::FurAffinity => furaffinity::extract(page),
            SiteKind::Derpibooru => derpibooru::extract(page),
        };

        log::debug!(
            "{self:?}: {} tags, image {}, title {}",
            result.total_tags(),
            if result.image_url.is_some() { "found" } else { "missing" },
            if result.title.is_some() { "found" } else { "missing" },
        );

        result
    }
}
