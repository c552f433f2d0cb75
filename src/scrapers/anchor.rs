//! Locates structures in a page by a nearby text marker.
//!
//! The FAQ has no ids or classes worth relying on, so both the difficulty grid
//! and the mission tables are found from a piece of exact text and a fixed
//! walk through the tree from there.

use super::{child_elements, has_own_text};
use scraper::{ElementRef, Html};
use std::fmt;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Anchor<'a> {
    /// The last element whose own text is the given cell label and whose style
    /// sets a colour. Resolves to its nearest enclosing `tbody`.
    ///
    /// The style check skips plain mentions of the label; picking the last
    /// match skips the decorated ones that come before the real grid.
    GridLabel(&'a str),

    /// The first `h4` whose own text is exactly the given heading. Resolves to
    /// the `tbody` of the first `table` after it at the same level.
    MissionHeading(&'a str)
}

impl<'a> Anchor<'a> {
    /// Finds the `tbody` this anchor points at.
    pub fn locate<'d>(&self, doc: &'d Html) -> Option<ElementRef<'d>> {
        match *self {
            Anchor::GridLabel(label) => {
                let marker = elements(doc)
                    .filter(|e| has_own_text(*e, label))
                    .filter(|e| e.value().attr("style").map_or(false, |s| s.contains("color")))
                    .last()?;

                marker.ancestors()
                      .filter_map(ElementRef::wrap)
                      .find(|e| e.value().name() == "tbody")
            }
            Anchor::MissionHeading(heading) => {
                let marker = elements(doc)
                    .find(|e| e.value().name() == "h4" && has_own_text(*e, heading))?;

                let table = marker.next_siblings()
                                  .filter_map(ElementRef::wrap)
                                  .find(|e| e.value().name() == "table")?;

                child_elements(table).find(|e| e.value().name() == "tbody")
            }
        }
    }
}

impl<'a> fmt::Display for Anchor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Anchor::GridLabel(label) => write!(f, "the map grid (via cell \"{}\")", label),
            Anchor::MissionHeading(heading) => write!(f, "the mission table under \"{}\"", heading)
        }
    }
}

/// Every element of the document, in document order.
fn elements<'d>(doc: &'d Html) -> impl Iterator<Item = ElementRef<'d>> {
    doc.root_element().descendants().filter_map(ElementRef::wrap)
}
