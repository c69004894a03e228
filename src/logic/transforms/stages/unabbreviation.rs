//! Unabbreviation stage

use crate::logic::ast::Expression;
use crate::logic::language::Language;
use crate::logic::transforms::{Runnable, TransformError};
use crate::logic::unabbreviation::unabbreviate;
use std::sync::Arc;

/// Expression to its fully expanded form
pub struct Unabbreviation {
    language: Arc<Language>,
}

impl Unabbreviation {
    pub fn new(language: Arc<Language>) -> Self {
        Unabbreviation { language }
    }
}

impl Runnable<Expression, Expression> for Unabbreviation {
    fn run(&self, input: Expression) -> Result<Expression, TransformError> {
        Ok(unabbreviate(&self.language, &input)?)
    }
}
