//! Transform pipeline infrastructure
//!
//! The processing chain from a decorated document to an expression is a sequence of
//! stages, each implementing [`Runnable<I, O>`]. A [`Transform<I, O>`] wraps a stage
//! and composes it with the next one through [`Transform::then`]; the compiler checks
//! that the output of each stage is the input of the following one:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Tokenization::new())              // DecoratedText → Vec<Element>
//!     .then(Classification::new(lq.clone()))  // Vec<Element> → Vec<Item>
//!     .then(Building::new(lq));               // Vec<Item> → Expression
//! ```
//!
//! Stages that do not depend on a language are pre-built as `once_cell::sync::Lazy`
//! statics; the language dependent ones are assembled by constructor functions that
//! take an `Arc<Language>`. Both live in [`standard`].
//!
//! Most callers go through [`ExpressionLoader`](crate::logic::loader::ExpressionLoader)
//! rather than running transforms directly.

pub mod stages;
pub mod standard;

use crate::logic::error::ParseError;
use crate::logic::unabbreviation::UnabbreviationError;
use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Unabbreviation(#[from] UnabbreviationError),
}

impl TransformError {
    /// The parse error behind this failure, if any
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            TransformError::Parse(err)
            | TransformError::Unabbreviation(UnabbreviationError::Parse(err)) => Some(err),
            TransformError::Unabbreviation(UnabbreviationError::MalformedTemplate { .. }) => None,
        }
    }
}

/// Anything that can transform an input to an output
///
/// Implemented by the individual stages; [`Transform`] composes them.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chains `stage` after this transform
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chains a pre-built (static) transform after this one
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DoubleNumber;
    impl Runnable<i32, i32> for DoubleNumber {
        fn run(&self, input: i32) -> Result<i32, TransformError> {
            Ok(input * 2)
        }
    }

    struct AddTen;
    impl Runnable<i32, i32> for AddTen {
        fn run(&self, input: i32) -> Result<i32, TransformError> {
            Ok(input + 10)
        }
    }

    struct IntToString;
    impl Runnable<i32, String> for IntToString {
        fn run(&self, input: i32) -> Result<String, TransformError> {
            Ok(input.to_string())
        }
    }

    struct FailingStage;
    impl Runnable<i32, i32> for FailingStage {
        fn run(&self, _input: i32) -> Result<i32, TransformError> {
            Err(ParseError::Empty.into())
        }
    }

    #[test]
    fn test_stages_compose_in_order() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(DoubleNumber)
            .then(AddTen)
            .then(DoubleNumber)
            .then(IntToString);
        assert_eq!(transform.run(5).unwrap(), "40");
    }

    #[test]
    fn test_error_stops_the_pipeline() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(FailingStage)
            .then(AddTen);
        let err = transform.run(5).unwrap_err();
        assert_eq!(err, TransformError::Parse(ParseError::Empty));
        assert_eq!(err.parse_error(), Some(&ParseError::Empty));
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err = TransformError::from(ParseError::Empty);
        assert_eq!(err.to_string(), "the document is empty");

        let err = TransformError::from(UnabbreviationError::MalformedTemplate {
            kind: crate::logic::ast::ConstructKind::Negation,
            template: "|0|".to_string(),
            produced: "𝐴".to_string(),
            reason: "expected a formula".to_string(),
        });
        assert_eq!(err.parse_error(), None);
    }
}
