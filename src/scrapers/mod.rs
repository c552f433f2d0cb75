//! Various modules for getting data from the FAQ's HTML.

pub mod anchor;
pub mod map_page;

use scraper::{ElementRef, Selector};

fn sel<S: AsRef<str>>(sel: S) -> Selector {
    Selector::parse(sel.as_ref()).expect("selector literals are valid")
}

/// Direct element children, skipping text and comments.
fn child_elements<'a>(elem: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    elem.children().filter_map(ElementRef::wrap)
}

/// Whether one of the element's own text nodes is exactly `text`.
///
/// Text nested in child elements doesn't count, so `<h4>P-<strong>2</strong></h4>`
/// has the text "P-" but not "P-2".
fn has_own_text(elem: ElementRef, text: &str) -> bool {
    elem.children().any(|child| match child.value().as_text() {
        Some(t) => &**t == text,
        None => false
    })
}
