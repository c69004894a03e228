//! Building stage

use crate::logic::ast::Expression;
use crate::logic::building::build;
use crate::logic::classifying::{ensure_classified, Item};
use crate::logic::language::Language;
use crate::logic::transforms::{Runnable, TransformError};
use std::sync::Arc;

/// Classified items to an expression tree
///
/// Fails with the first raw item as an unrecognized symbol, or with the builder's own
/// [`ParseError`](crate::logic::error::ParseError).
pub struct Building {
    language: Arc<Language>,
}

impl Building {
    pub fn new(language: Arc<Language>) -> Self {
        Building { language }
    }
}

impl Runnable<Vec<Item>, Expression> for Building {
    fn run(&self, input: Vec<Item>) -> Result<Expression, TransformError> {
        let symbols = ensure_classified(input)?;
        Ok(build(&self.language, &symbols)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classifying::classify;
    use crate::logic::error::ParseError;
    use crate::logic::lexing::tokenize;
    use crate::logic::token::parse_markup;
    use crate::logic::testing::languages;

    #[test]
    fn test_builds_and_reports() {
        let lq = Arc::new(languages::lq());
        let stage = Building::new(lq.clone());

        let expr = stage.run(classify(&lq, tokenize(&parse_markup("∼𝐴")))).unwrap();
        assert_eq!(expr.level(), 1);

        let err = stage.run(classify(&lq, tokenize(&parse_markup("∼#")))).unwrap_err();
        assert_eq!(
            err,
            TransformError::Parse(ParseError::UnrecognizedSymbol {
                glyph: '#',
                position: 1
            })
        );
        assert_eq!(
            stage.run(Vec::new()).unwrap_err(),
            TransformError::Parse(ParseError::Empty)
        );
    }
}
