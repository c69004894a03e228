//! Elements and decorations
//!
//! An [`Element`] is one glyph of the input together with the decoration it carries in
//! the rich-text document. Elements are produced once by the tokenizer and consumed by
//! the classifier; they are never mutated.

use serde::{Deserialize, Serialize};

/// Vertical placement of a glyph
///
/// Rich-text editors report a "transitional" variant while the user is still typing a
/// script run. Classification treats those exactly like their settled counterparts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    #[default]
    Normal,
    Superscript,
    Subscript,
    TransitionalSuperscript,
    TransitionalSubscript,
}

impl Decoration {
    pub fn is_superscript(self) -> bool {
        matches!(
            self,
            Decoration::Superscript | Decoration::TransitionalSuperscript
        )
    }

    pub fn is_subscript(self) -> bool {
        matches!(
            self,
            Decoration::Subscript | Decoration::TransitionalSubscript
        )
    }

    /// Folds transitional variants into their settled counterparts
    pub fn settled(self) -> Decoration {
        match self {
            Decoration::TransitionalSuperscript => Decoration::Superscript,
            Decoration::TransitionalSubscript => Decoration::Subscript,
            other => other,
        }
    }
}

/// A single decorated glyph
///
/// `position` is the UTF-16 offset of the glyph in the source document. Elements built
/// programmatically (template expansion, rendering) use the offset of the element they
/// stand in for, or zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    pub glyph: char,
    pub decoration: Decoration,
    pub position: usize,
}

impl Element {
    pub fn new(glyph: char, decoration: Decoration, position: usize) -> Self {
        Element {
            glyph,
            decoration,
            position,
        }
    }

    pub fn normal(glyph: char) -> Self {
        Element::new(glyph, Decoration::Normal, 0)
    }

    pub fn superscript(glyph: char) -> Self {
        Element::new(glyph, Decoration::Superscript, 0)
    }

    pub fn subscript(glyph: char) -> Self {
        Element::new(glyph, Decoration::Subscript, 0)
    }

    pub fn is_decorated(&self) -> bool {
        self.decoration.is_superscript() || self.decoration.is_subscript()
    }

    /// Equality of glyph and settled decoration, ignoring position
    pub fn same_glyph(&self, other: &Element) -> bool {
        self.glyph == other.glyph && self.decoration.settled() == other.decoration.settled()
    }
}
