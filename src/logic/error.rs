//! Error types for alphabets, language definitions and parsing
//!
//! Matching and unabbreviation carry their own error types next to their code
//! ([`MatchError`](crate::logic::matching::MatchError),
//! [`UnabbreviationError`](crate::logic::unabbreviation::UnabbreviationError)).

use crate::logic::alphabets::Alphabet;
use thiserror::Error;

/// Errors raised by alphabet range queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The end glyph precedes the start glyph
    #[error("invalid character range {from}–{to} in the {alphabet} alphabet")]
    InvalidCharRange {
        alphabet: Alphabet,
        from: char,
        to: char,
    },
    /// One of the range bounds does not belong to the alphabet
    #[error("glyph '{glyph}' is not part of the {alphabet} alphabet")]
    GlyphNotInAlphabet { alphabet: Alphabet, glyph: char },
}

/// Errors raised while constructing or looking up a language
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LanguageError {
    #[error("language {language}: {source}")]
    InvalidRange {
        language: String,
        #[source]
        source: AlphabetError,
    },
    #[error("language {language}: '{text}' is not a single glyph ({field})")]
    InvalidGlyph {
        language: String,
        field: &'static str,
        text: String,
    },
    #[error("language {language}: glyph '{glyph}' is configured for both {first} and {second}")]
    DuplicateGlyph {
        language: String,
        glyph: char,
        first: &'static str,
        second: &'static str,
    },
    #[error("language {language}: at most three bracket pairs are supported, found {found}")]
    TooManyBrackets { language: String, found: usize },
    #[error("language {language}: no construct kind named '{key}' for a template")]
    UnknownTemplate { language: String, key: String },
    #[error("no language named '{0}'")]
    UnknownLanguage(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for LanguageError {
    fn from(err: config::ConfigError) -> Self {
        LanguageError::Config(err.to_string())
    }
}

/// Errors produced while turning a document into a term or formula
///
/// [`ParseError::Empty`] is the benign "nothing typed yet" case; every other variant
/// means the document does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the document is empty")]
    Empty,
    #[error("unrecognized symbol '{glyph}' at offset {position}")]
    UnrecognizedSymbol { glyph: char, position: usize },
    #[error("expected {expected} at offset {position}, found {found}")]
    Unexpected {
        position: usize,
        found: String,
        expected: &'static str,
    },
    #[error("expected {expected}, found the end of the document")]
    UnexpectedEnd { expected: &'static str },
    #[error("{symbol} at offset {position} takes {expected} argument(s), found {found}")]
    ArityMismatch {
        position: usize,
        symbol: String,
        expected: usize,
        found: usize,
    },
    #[error("the document does not reduce to a single expression: {found} left over at offset {position}")]
    Incomplete { position: usize, found: String },
    #[error("expression nested more than {limit} deep at offset {position}")]
    TooDeep { position: usize, limit: usize },
}

impl ParseError {
    /// True for the benign empty-document case
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ParseError::Empty)
    }
}

/// Type alias for parse results
pub type ParseResult<T> = Result<T, ParseError>;
