//! Expression loading utilities
//!
//! `ExpressionLoader` pairs a language with a decorated document and runs the standard
//! transforms on it. It is the entry point used by the `symlog` binary and the
//! integration tests.
//!
//! ```rust,ignore
//! use symlog::logic::language::LanguageRegistry;
//! use symlog::logic::loader::ExpressionLoader;
//!
//! let registry = LanguageRegistry::builtin()?;
//! let loader = ExpressionLoader::from_markup(registry.get("Lq")?.clone(), "∼(𝐴→𝐵)");
//! let expr = loader.parse()?;
//! let op = loader.main_operator()?;
//! ```
//!
//! Every shortcut returns a `Result`: a document that does not parse is reported as
//! [`LoaderError::Transform`], never as an empty answer.

use crate::logic::ast::{Expression, Formula, Operator};
use crate::logic::classifying::Item;
use crate::logic::error::ParseError;
use crate::logic::language::Language;
use crate::logic::queries;
use crate::logic::token::{parse_markup, DecoratedText};
use crate::logic::transforms::standard::{
    classification, parsing, unabbreviation, ElementStream, CORE_TOKENIZATION,
};
use crate::logic::transforms::{Transform, TransformError};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Error that can occur when loading expressions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    /// IO error when reading a file
    #[error("IO error: {0}")]
    Io(String),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl LoaderError {
    /// The parse error behind this failure, if any
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            LoaderError::Transform(err) => err.parse_error(),
            LoaderError::Io(_) => None,
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// A document in a language, with transform shortcuts
pub struct ExpressionLoader {
    language: Arc<Language>,
    document: DecoratedText,
}

impl ExpressionLoader {
    pub fn new(language: impl Into<Arc<Language>>, document: DecoratedText) -> Self {
        ExpressionLoader {
            language: language.into(),
            document,
        }
    }

    /// Reads `^{…}` / `_{…}` markup
    pub fn from_markup(language: impl Into<Arc<Language>>, markup: &str) -> Self {
        Self::new(language, parse_markup(markup))
    }

    /// Reads a markup file
    pub fn from_path<P: AsRef<Path>>(
        language: impl Into<Arc<Language>>,
        path: P,
    ) -> Result<Self, LoaderError> {
        let markup = fs::read_to_string(path)?;
        Ok(Self::from_markup(language, &markup))
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn document(&self) -> &DecoratedText {
        &self.document
    }

    /// Runs a custom transform on the document
    pub fn with<O: 'static>(&self, transform: &Transform<DecoratedText, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.document.clone())?)
    }

    pub fn tokenize(&self) -> Result<ElementStream, LoaderError> {
        self.with(&CORE_TOKENIZATION)
    }

    /// Classified items; unrecognized elements are left raw
    pub fn classify(&self) -> Result<Vec<Item>, LoaderError> {
        self.with(&classification(self.language.clone()))
    }

    pub fn parse(&self) -> Result<Expression, LoaderError> {
        self.with(&parsing(self.language.clone()))
    }

    /// All subformulas, lowest level first
    pub fn subformulas(&self) -> Result<Vec<Formula>, LoaderError> {
        let expr = self.parse()?;
        Ok(queries::subformulas(&expr).into_iter().cloned().collect())
    }

    pub fn atomic_subformulas(&self) -> Result<Vec<Formula>, LoaderError> {
        let expr = self.parse()?;
        Ok(queries::atomic_subformulas(&expr).into_iter().cloned().collect())
    }

    pub fn immediate_subformulas(&self) -> Result<Vec<Formula>, LoaderError> {
        let expr = self.parse()?;
        Ok(queries::immediate_subformulas(&expr)
            .into_iter()
            .cloned()
            .collect())
    }

    /// `Ok(None)` for an atomic formula or a term
    pub fn main_operator(&self) -> Result<Option<Operator>, LoaderError> {
        let expr = self.parse()?;
        Ok(queries::main_operator(&expr))
    }

    pub fn unabbreviate(&self) -> Result<Expression, LoaderError> {
        self.with(&unabbreviation(self.language.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::testing::languages;

    #[test]
    fn test_shortcuts() {
        let loader = ExpressionLoader::from_markup(languages::lq(), "∼(𝐴→𝐵)");
        assert_eq!(loader.tokenize().unwrap().len(), 6);
        assert!(loader.classify().unwrap().iter().all(|item| !item.is_raw()));
        assert_eq!(loader.main_operator().unwrap(), Some(Operator::Negation));
        assert_eq!(loader.subformulas().unwrap().len(), 4);
        assert_eq!(loader.atomic_subformulas().unwrap().len(), 2);
        assert_eq!(loader.immediate_subformulas().unwrap().len(), 1);
    }

    #[test]
    fn test_failure_is_not_an_empty_answer() {
        let loader = ExpressionLoader::from_markup(languages::lq(), "𝐴→");
        let err = loader.subformulas().unwrap_err();
        assert!(matches!(
            err.parse_error(),
            Some(ParseError::UnexpectedEnd { .. })
        ));

        let empty = ExpressionLoader::from_markup(languages::lq(), "");
        assert!(empty.main_operator().unwrap_err().parse_error().unwrap().is_empty_input());
    }

    #[test]
    fn test_missing_file() {
        let result = ExpressionLoader::from_path(languages::lq(), "/nonexistent/formula.txt");
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }
}
