//! Tokenization stage
//!
//! [`Tokenization`] turns a decorated document into its element sequence.

use crate::logic::lexing::tokenize;
use crate::logic::token::{DecoratedText, Element};
use crate::logic::transforms::{Runnable, TransformError};

/// Decorated document to elements
///
/// Never fails: every code unit becomes an element, whitespace is dropped.
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Default for Tokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<DecoratedText, Vec<Element>> for Tokenization {
    fn run(&self, input: DecoratedText) -> Result<Vec<Element>, TransformError> {
        Ok(tokenize(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::token::{parse_markup, Decoration, ToMarkup};

    #[test]
    fn test_markup_then_tokens() {
        let elements = Tokenization::new().run(parse_markup("𝐹^{12}𝑎")).unwrap();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[1].decoration, Decoration::Superscript);
        assert_eq!(elements.to_markup(), "𝐹^{12}𝑎");
    }

    #[test]
    fn test_empty_document() {
        let doc = DecoratedText::default();
        assert!(Tokenization::new().run(doc).unwrap().is_empty());
    }
}
