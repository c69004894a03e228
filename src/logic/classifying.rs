//! Symbol classifier
//!
//!     Turns the tokenizer's elements into classified symbols, following the vocabulary of
//!     one language. Classification is a fixed sequence of passes over a working list of
//!     [`Item`]s:
//!
//!         1. Fixed glyphs: brackets, angle brackets, the comma and operators.
//!         2. Relation symbols, then function symbols. Fixed-arity lists are consulted
//!            first, then the extensible ranges and the meta alphabets. The arity comes
//!            from a superscript digit run, or, in languages that do not require one, is
//!            left for the builder to infer from the terms that follow.
//!         3. Variables and constants, with an optional subscript index.
//!         4. Sentence letters and formula symbols, with an optional subscript index.
//!
//!     A pass only rewrites items that are still raw, so earlier passes win over later,
//!     more general ones, and classifying an already classified list changes nothing.
//!     Whatever is left raw at the end is reported by [`ensure_classified`].
//!
//!     Decoration runs belong to the symbol they follow: `𝐴` with superscript `2` and
//!     subscript `1` becomes a single relation symbol spanning all three elements.

mod decorations;
pub mod items;
mod passes;

pub use items::Item;

use crate::logic::ast::SymbolStream;
use crate::logic::error::{ParseError, ParseResult};
use crate::logic::language::Language;
use crate::logic::logging::targets;
use crate::logic::token::Element;

/// Classifies tokenizer output
pub fn classify(language: &Language, elements: Vec<Element>) -> Vec<Item> {
    classify_items(language, elements.into_iter().map(Item::Raw).collect())
}

/// Runs every pass over a partially or fully classified list
pub fn classify_items(language: &Language, items: Vec<Item>) -> Vec<Item> {
    let items = passes::fixed_symbols(language, items);
    let items = passes::predicates(language, items);
    let items = passes::letters(language, items);
    let items = passes::sentence_letters(language, items);
    log::debug!(
        target: targets::CLASSIFY,
        "{}: {} item(s), {} left raw",
        language.name(),
        items.len(),
        items.iter().filter(|item| item.is_raw()).count()
    );
    items
}

/// Fails on the first element no pass recognized
pub fn ensure_classified(items: Vec<Item>) -> ParseResult<SymbolStream> {
    items
        .into_iter()
        .map(|item| match item {
            Item::Symbol(symbol, span) => Ok((symbol, span)),
            Item::Raw(element) => Err(ParseError::UnrecognizedSymbol {
                glyph: element.glyph,
                position: element.position,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ast::{Arity, BracketKind, Letter, Operator, Symbol};
    use crate::logic::lexing::tokenize;
    use crate::logic::testing::languages;
    use crate::logic::token::parse_markup;

    fn symbols(language: &Language, markup: &str) -> Vec<Symbol> {
        let items = classify(language, tokenize(&parse_markup(markup)));
        ensure_classified(items)
            .unwrap()
            .into_iter()
            .map(|(symbol, _)| symbol)
            .collect()
    }

    #[test]
    fn test_fixed_symbols_and_letters() {
        let lq = languages::lq();
        assert_eq!(
            symbols(&lq, "∼(𝐴→𝐵)"),
            vec![
                Symbol::Operator(Operator::Negation),
                Symbol::OpenBracket(BracketKind::One),
                Symbol::SentenceLetter(Letter::new('𝐴')),
                Symbol::Operator(Operator::Conditional),
                Symbol::SentenceLetter(Letter::new('𝐵')),
                Symbol::CloseBracket(BracketKind::One),
            ]
        );
    }

    #[test]
    fn test_superscript_makes_relation() {
        let lq = languages::lq();
        assert_eq!(
            symbols(&lq, "𝐴^{2}𝑎𝑥"),
            vec![
                Symbol::Relation {
                    letter: Letter::new('𝐴'),
                    superscript: Some("2".to_string()),
                    arity: Arity::Fixed(2),
                },
                Symbol::Constant(Letter::new('𝑎')),
                Symbol::Variable(Letter::new('𝑥')),
            ]
        );
    }

    #[test]
    fn test_fixed_arity_symbols_take_a_subscript_but_no_superscript() {
        let lf = languages::delimited();
        assert_eq!(
            symbols(&lf, "=_{1}ab")[0],
            Symbol::Relation {
                letter: Letter::new('=').with_subscript("1"),
                superscript: None,
                arity: Arity::Fixed(2),
            }
        );
    }

    #[test]
    fn test_fixed_arity_wins_over_the_extensible_range() {
        // g and h are both in the function range; only g is listed as one-place
        let lf = languages::delimited();
        assert_eq!(
            symbols(&lf, "g"),
            vec![Symbol::Function {
                letter: Letter::new('g'),
                superscript: None,
                arity: Arity::Fixed(1),
            }]
        );
        let items = classify(&lf, tokenize(&parse_markup("h")));
        assert!(matches!(
            ensure_classified(items),
            Err(ParseError::UnrecognizedSymbol { glyph: 'h', .. })
        ));
    }

    #[test]
    fn test_subscript_and_superscript_in_either_order() {
        let lq = languages::lq();
        let expected = Symbol::Function {
            letter: Letter::new('𝑓').with_subscript("1"),
            superscript: Some("1".to_string()),
            arity: Arity::Fixed(1),
        };
        assert_eq!(symbols(&lq, "𝑓_{1}^{1}𝑎")[0], expected);
        assert_eq!(symbols(&lq, "𝑓^{1}_{1}𝑎")[0], expected);
    }

    #[test]
    fn test_subscripted_variable_spans_its_digits() {
        let lq = languages::lq();
        let items = classify(&lq, tokenize(&parse_markup("𝑥_{12}")));
        assert_eq!(
            items,
            vec![Item::Symbol(
                Symbol::Variable(Letter::new('𝑥').with_subscript("12")),
                0..4
            )]
        );
    }

    #[test]
    fn test_zero_superscript_does_not_classify() {
        let lq = languages::lq();
        let items = classify(&lq, tokenize(&parse_markup("𝐴^{0}")));
        // 𝐴 falls through to a sentence letter and the digit is left over
        assert_eq!(
            ensure_classified(items),
            Err(ParseError::UnrecognizedSymbol {
                glyph: '0',
                position: 2
            })
        );
    }

    #[test]
    fn test_unknown_glyph_is_reported() {
        let lq = languages::lq();
        let items = classify(&lq, tokenize(&parse_markup("(𝐴#𝐵)")));
        assert_eq!(
            ensure_classified(items),
            Err(ParseError::UnrecognizedSymbol {
                glyph: '#',
                position: 3
            })
        );
    }

    #[test]
    fn test_meta_symbols() {
        let lq = languages::lq();
        assert_eq!(
            symbols(&lq, "𝒜𝓍𝒶ℙ"),
            vec![
                Symbol::FormulaSymbol(Letter::new('𝒜').as_meta()),
                Symbol::Variable(Letter::new('𝓍').as_meta()),
                Symbol::Constant(Letter::new('𝒶').as_meta()),
                Symbol::SentenceLetter(Letter::new('ℙ').as_meta()),
            ]
        );
    }

    #[test]
    fn test_inferred_arity_needs_a_following_term() {
        let lp = languages::inferring();
        assert_eq!(
            symbols(&lp, "Fab")[0],
            Symbol::Relation {
                letter: Letter::new('F'),
                superscript: None,
                arity: Arity::Inferred,
            }
        );
        assert_eq!(
            symbols(&lp, "(F→G)")[1],
            Symbol::SentenceLetter(Letter::new('F'))
        );
    }

    #[test]
    fn test_reclassification_is_a_no_op() {
        let lq = languages::lq();
        let once = classify(&lq, tokenize(&parse_markup("∀𝑥(𝐹^{1}𝑥→#)")));
        let twice = classify_items(&lq, once.clone());
        assert_eq!(once, twice);
    }
}
