use scraper::{ElementRef, Selector};

use crate::error::ExtractionError;

/// Position of the GDP table among the `tbody` elements of the archived page.
///
/// The first two bodies belong to layout tables above the data. Nothing checks that the
/// page still has that shape: if the archive layout changes, the wrong table is picked
/// without any error. The HTML5 parser also adds a `tbody` to every table written without
/// one, so such tables count here even though a lenient parser would not see a body.
/// Use [`HeaderTextSelector`] when the header text is known.
pub const GDP_TABLE_INDEX: usize = 2;

/// Picks the data table among the candidate table bodies, given in document order.
pub trait TableSelector {
    fn select_table<'a>(&self, candidates: &[ElementRef<'a>]) -> Result<ElementRef<'a>, ExtractionError>;
}

/// Selects the table body at a fixed ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalSelector {
    pub index: usize,
}

impl Default for PositionalSelector {
    fn default() -> Self {
        Self { index: GDP_TABLE_INDEX }
    }
}

impl TableSelector for PositionalSelector {
    fn select_table<'a>(&self, candidates: &[ElementRef<'a>]) -> Result<ElementRef<'a>, ExtractionError> {
        candidates
            .get(self.index)
            .copied()
            .ok_or(ExtractionError::TableNotFound {
                index: self.index,
                found: candidates.len(),
            })
    }
}

/// Selects the first table body with a `th` cell containing the given text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTextSelector {
    pub header: String,
}

impl HeaderTextSelector {
    pub fn new(header: impl Into<String>) -> Self {
        Self { header: header.into() }
    }
}

impl TableSelector for HeaderTextSelector {
    fn select_table<'a>(&self, candidates: &[ElementRef<'a>]) -> Result<ElementRef<'a>, ExtractionError> {
        let th = Selector::parse("th").expect("valid selector");

        candidates
            .iter()
            .copied()
            .find(|body| {
                body.select(&th)
                    .any(|cell| cell.text().collect::<String>().contains(&self.header))
            })
            .ok_or_else(|| ExtractionError::NoTableMatches {
                header: self.header.clone(),
            })
    }
}
