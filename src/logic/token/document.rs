//! Decorated text documents
//!
//!     The input boundary of the library: linear text plus a list of decoration ranges,
//!     as a rich-text editor reports them. Text is held as UTF-16 code units and range
//!     offsets count UTF-16 code units, which is what editor widgets use. Ranges need
//!     not cover the whole text; uncovered offsets are undecorated.

use super::core::Decoration;
use serde::{Deserialize, Serialize};

/// A decoration applied to `length` code units starting at `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationRange {
    pub start: usize,
    pub length: usize,
    pub decoration: Decoration,
}

impl DecorationRange {
    pub fn new(start: usize, length: usize, decoration: Decoration) -> Self {
        DecorationRange {
            start,
            length,
            decoration,
        }
    }

    /// Ranges may be open-ended (`length == usize::MAX`)
    pub fn covers(&self, offset: usize) -> bool {
        offset >= self.start && offset - self.start < self.length
    }
}

/// Text with decoration ranges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedText {
    units: Vec<u16>,
    decorations: Vec<DecorationRange>,
}

impl DecoratedText {
    /// Undecorated text
    pub fn new(text: &str) -> Self {
        DecoratedText {
            units: text.encode_utf16().collect(),
            decorations: Vec::new(),
        }
    }

    /// Raw UTF-16 content, which may contain unpaired surrogates
    pub fn from_utf16(units: Vec<u16>, decorations: Vec<DecorationRange>) -> Self {
        DecoratedText { units, decorations }
    }

    /// Adds a decoration range (builder style)
    pub fn with_decoration(mut self, start: usize, length: usize, decoration: Decoration) -> Self {
        self.decorations
            .push(DecorationRange::new(start, length, decoration));
        self
    }

    /// Appends `text` carrying `decoration`
    ///
    /// Consecutive pushes with the same decoration extend the previous range.
    pub fn push(&mut self, text: &str, decoration: Decoration) {
        let start = self.units.len();
        self.units.extend(text.encode_utf16());
        let length = self.units.len() - start;
        if length == 0 || decoration == Decoration::Normal {
            return;
        }
        match self.decorations.last_mut() {
            Some(last)
                if last.decoration == decoration
                    && last.start.checked_add(last.length) == Some(start) =>
            {
                last.length = last.length.saturating_add(length);
            }
            _ => self
                .decorations
                .push(DecorationRange::new(start, length, decoration)),
        }
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn decorations(&self) -> &[DecorationRange] {
        &self.decorations
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The decoration covering `offset`; the first matching range wins
    pub fn decoration_at(&self, offset: usize) -> Decoration {
        self.decorations
            .iter()
            .find(|range| range.covers(offset))
            .map(|range| range.decoration)
            .unwrap_or_default()
    }

    /// The text with unpaired surrogates replaced by U+FFFD
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for DecoratedText {
    fn from(text: &str) -> Self {
        DecoratedText::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoration_lookup_defaults_to_normal() {
        let doc = DecoratedText::new("A2ab").with_decoration(1, 1, Decoration::Superscript);
        assert_eq!(doc.decoration_at(0), Decoration::Normal);
        assert_eq!(doc.decoration_at(1), Decoration::Superscript);
        assert_eq!(doc.decoration_at(2), Decoration::Normal);
        assert_eq!(doc.decoration_at(40), Decoration::Normal);
    }

    #[test]
    fn test_first_range_wins() {
        let doc = DecoratedText::new("x1")
            .with_decoration(1, 1, Decoration::Subscript)
            .with_decoration(0, 2, Decoration::Superscript);
        assert_eq!(doc.decoration_at(1), Decoration::Subscript);
        assert_eq!(doc.decoration_at(0), Decoration::Superscript);
    }

    #[test]
    fn test_push_merges_adjacent_ranges() {
        let mut doc = DecoratedText::default();
        doc.push("𝐴", Decoration::Normal);
        doc.push("1", Decoration::Superscript);
        doc.push("2", Decoration::Superscript);
        assert_eq!(doc.len(), 4);
        assert_eq!(
            doc.decorations(),
            &[DecorationRange::new(2, 2, Decoration::Superscript)]
        );
    }

    #[test]
    fn test_open_ended_range_covers_the_rest_of_the_text() {
        let doc = DecoratedText::from_utf16(
            "x12".encode_utf16().collect(),
            vec![DecorationRange::new(1, usize::MAX, Decoration::Subscript)],
        );
        assert_eq!(doc.decoration_at(0), Decoration::Normal);
        assert_eq!(doc.decoration_at(1), Decoration::Subscript);
        assert_eq!(doc.decoration_at(2), Decoration::Subscript);
        assert_eq!(doc.decoration_at(usize::MAX), Decoration::Subscript);
    }

    #[test]
    fn test_push_after_open_ended_range_starts_a_new_range() {
        let mut doc = DecoratedText::new("x").with_decoration(0, usize::MAX, Decoration::Superscript);
        doc.push("1", Decoration::Superscript);
        assert_eq!(
            doc.decorations(),
            &[
                DecorationRange::new(0, usize::MAX, Decoration::Superscript),
                DecorationRange::new(1, 1, Decoration::Superscript),
            ]
        );
    }

    #[test]
    fn test_astral_glyphs_take_two_units() {
        let doc = DecoratedText::new("𝐴");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.text(), "𝐴");
    }
}
