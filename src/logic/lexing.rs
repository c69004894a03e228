//! Tokenizer
//!
//!     Turns a decorated document into the flat, ordered list of elements the classifier
//!     works on. The text is scanned left to right one code point at a time: a single
//!     UTF-16 unit, or two when they form a surrogate pair. Each element takes the
//!     decoration covering its start offset.
//!
//!     Whitespace glyphs and unpaired surrogate halves are dropped. Neither can take part
//!     in a formula, and editors happily leave stray halves behind while glyphs are being
//!     typed or deleted.
//!
//!     The output preserves source order and is never longer than the number of code
//!     points in the input.

use crate::logic::logging::targets;
use crate::logic::token::{DecoratedText, Element};

/// Tokenize a decorated document into elements
pub fn tokenize(doc: &DecoratedText) -> Vec<Element> {
    let mut elements = Vec::with_capacity(doc.len());
    let mut offset = 0;

    for decoded in char::decode_utf16(doc.units().iter().copied()) {
        match decoded {
            Ok(glyph) => {
                if !glyph.is_whitespace() {
                    elements.push(Element::new(glyph, doc.decoration_at(offset), offset));
                }
                offset += glyph.len_utf16();
            }
            Err(err) => {
                log::trace!(
                    target: targets::TOKENIZE,
                    "Dropping unpaired surrogate {:#06x} at offset {offset}",
                    err.unpaired_surrogate()
                );
                offset += 1;
            }
        }
    }

    log::trace!(target: targets::TOKENIZE, "Tokenized {} element(s)", elements.len());
    elements
}
