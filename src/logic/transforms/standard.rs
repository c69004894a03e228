//! Standard transform definitions
//!
//! Language independent transforms are static references built with
//! `once_cell::sync::Lazy`. Everything from classification on depends on a language,
//! so those pipelines are built by the constructor functions below.

use crate::logic::ast::Expression;
use crate::logic::classifying::Item;
use crate::logic::language::Language;
use crate::logic::token::{DecoratedText, Element};
use crate::logic::transforms::stages::{
    Building, Classification, Tokenization, Unabbreviation,
};
use crate::logic::transforms::Transform;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Type alias for the element sequence produced by tokenization
pub type ElementStream = Vec<Element>;

/// Type alias for a language dependent transform from a document
pub type DocumentTransform<O> = Transform<DecoratedText, O>;

/// Core tokenization transform: DecoratedText → Vec<Element>
pub static CORE_TOKENIZATION: Lazy<DocumentTransform<ElementStream>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new()));

/// DecoratedText → Vec<Item>, leaving unrecognized elements raw
pub fn classification(language: Arc<Language>) -> DocumentTransform<Vec<Item>> {
    Transform::from_fn(Ok)
        .then_transform(&CORE_TOKENIZATION)
        .then(Classification::new(language))
}

/// DecoratedText → Expression
pub fn parsing(language: Arc<Language>) -> DocumentTransform<Expression> {
    Transform::from_fn(Ok)
        .then_transform(&CORE_TOKENIZATION)
        .then(Classification::new(language.clone()))
        .then(Building::new(language))
}

/// DecoratedText → Expression with every defined construct expanded
pub fn unabbreviation(language: Arc<Language>) -> DocumentTransform<Expression> {
    Transform::from_fn(Ok)
        .then_transform(&CORE_TOKENIZATION)
        .then(Classification::new(language.clone()))
        .then(Building::new(language.clone()))
        .then(Unabbreviation::new(language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::error::ParseError;
    use crate::logic::testing::languages;
    use crate::logic::token::parse_markup;
    use crate::logic::transforms::TransformError;

    #[test]
    fn test_core_tokenization_skips_whitespace() {
        let elements = CORE_TOKENIZATION.run(parse_markup("∀𝑥 𝐹^{1}𝑥")).unwrap();
        assert_eq!(elements.len(), 5);
    }

    #[test]
    fn test_parsing_pipeline() {
        let lq = Arc::new(languages::lq());
        let expr = parsing(lq).run(parse_markup("𝐴→𝐵")).unwrap();
        assert_eq!(expr.level(), 1);
    }

    #[test]
    fn test_unabbreviation_pipeline() {
        let lq = Arc::new(languages::lq());
        let plain = parsing(lq.clone()).run(parse_markup("∼(𝐴→∼𝐵)")).unwrap();
        let expanded = unabbreviation(lq).run(parse_markup("𝐴∧𝐵")).unwrap();
        assert_eq!(expanded, plain);
    }

    #[test]
    fn test_empty_document_is_reported_distinctly() {
        let lq = Arc::new(languages::lq());
        let err = parsing(lq).run(parse_markup("  ")).unwrap_err();
        assert_eq!(err, TransformError::Parse(ParseError::Empty));
    }
}
