//! Detokenizer for the markup form
//!
//! Converts elements back into the markup accepted by
//! [`parse_markup`](super::markup::parse_markup). Useful for round-trip testing,
//! diagnostics and the command line, where decorations have to survive as plain text.

use super::core::{Decoration, Element};
use super::document::DecoratedText;
use crate::logic::lexing::tokenize;

/// Trait for rendering to the markup form
pub trait ToMarkup {
    fn to_markup(&self) -> String;
}

impl ToMarkup for [Element] {
    fn to_markup(&self) -> String {
        detokenize(self)
    }
}

impl ToMarkup for Vec<Element> {
    fn to_markup(&self) -> String {
        detokenize(self)
    }
}

impl ToMarkup for DecoratedText {
    fn to_markup(&self) -> String {
        detokenize(&tokenize(self))
    }
}

/// Detokenize a stream of elements into markup
///
/// Consecutive elements sharing a settled decoration are grouped into one run, so
/// `𝑥` followed by subscript `1` and `2` renders as `𝑥_{12}`.
pub fn detokenize(elements: &[Element]) -> String {
    let mut result = String::new();
    let mut open: Option<Decoration> = None;

    for element in elements {
        let decoration = element.decoration.settled();
        if open != Some(decoration) {
            if open.is_some_and(|d| d != Decoration::Normal) {
                result.push('}');
            }
            match decoration {
                Decoration::Superscript => result.push_str("^{"),
                Decoration::Subscript => result.push_str("_{"),
                _ => {}
            }
            open = Some(decoration);
        }
        result.push(element.glyph);
    }
    if open.is_some_and(|d| d != Decoration::Normal) {
        result.push('}');
    }

    result
}
