//! Sectioned-list scan state.
//!
//! Sidebars like Safebooru's list their tags under header rows
//! ("Copyright", "Character", "General"...). Walking the sidebar is a
//! two-state machine: a header assigns the current category, an item emits
//! a tag with it. `SectionScan` holds that state apart from any DOM walking
//! so the carry-over rules can be tested on their own.

use crate::category::{TagCategory, HEADER_TEXT};

/// One step of a sectioned-list walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    /// A header row with its text.
    Header(&'a str),
    /// A tag row, with the category its own markup declares, if any.
    Item(Option<TagCategory>),
}

/// State of a sectioned-list walk: the category of the current section.
#[derive(Debug, Clone)]
pub struct SectionScan {
    current: Option<TagCategory>,
    skip_unknown_sections: bool,
}

impl SectionScan {
    /// Starts a scan using the shared header table. Items before the first
    /// header are filed under `Other`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(TagCategory::Other),
            skip_unknown_sections: false,
        }
    }

    /// Ignore items under headers the table does not recognize, instead of
    /// filing them under the table default.
    #[must_use]
    pub fn skip_unknown_sections(mut self) -> Self {
        self.skip_unknown_sections = true;
        self
    }

    /// Category of the current section, or `None` while inside a skipped one.
    #[must_use]
    pub fn current(&self) -> Option<TagCategory> {
        self.current
    }

    /// Header transition: the header text decides the current category.
    fn on_header(&mut self, text: &str) {
        self.current = if self.skip_unknown_sections {
            HEADER_TEXT.get(text)
        } else {
            Some(HEADER_TEXT.resolve(text))
        };
    }

    /// Item transition: the item's own category wins, otherwise the
    /// section's. Returns `None` when the item sits in a skipped section.
    #[must_use]
    fn on_item(&self, own: Option<TagCategory>) -> Option<TagCategory> {
        self.current.map(|section| own.unwrap_or(section))
    }

    /// Feeds one event, returning the category for item events.
    pub fn step(&mut self, event: ScanEvent<'_>) -> Option<TagCategory> {
        match event {
            ScanEvent::Header(text) => {
                self.on_header(text);
                None
            }
            ScanEvent::Item(own) => self.on_item(own),
        }
    }
}

impl Default for SectionScan {
    fn default() -> Self {
        Self::new()
    }
}
