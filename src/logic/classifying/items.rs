//! Classifier work items

use crate::logic::ast::Symbol;
use crate::logic::token::{Decoration, Element};
use std::ops::Range;

/// One entry of the classifier's working sequence
///
/// Items start out `Raw`. A pass replaces a raw base element, together with any
/// decoration runs it owns, by a single `Symbol` item spanning all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Raw(Element),
    Symbol(Symbol, Range<usize>),
}

impl Item {
    pub fn is_raw(&self) -> bool {
        matches!(self, Item::Raw(_))
    }

    /// The undecorated raw element, if this is one
    pub fn base(&self) -> Option<&Element> {
        match self {
            Item::Raw(element) if element.decoration.settled() == Decoration::Normal => {
                Some(element)
            }
            _ => None,
        }
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Item::Symbol(symbol, _) => Some(symbol),
            Item::Raw(_) => None,
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            Item::Raw(element) => element_span(element),
            Item::Symbol(_, span) => span.clone(),
        }
    }
}

impl From<Element> for Item {
    fn from(element: Element) -> Self {
        Item::Raw(element)
    }
}

pub(crate) fn element_span(element: &Element) -> Range<usize> {
    element.position..element.position + element.glyph.len_utf16()
}
