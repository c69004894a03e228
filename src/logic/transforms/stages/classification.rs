//! Classification stage

use crate::logic::classifying::{classify, Item};
use crate::logic::language::Language;
use crate::logic::token::Element;
use crate::logic::transforms::{Runnable, TransformError};
use std::sync::Arc;

/// Elements to classified items
///
/// Unrecognized elements are left raw; [`Building`](super::Building) reports them.
pub struct Classification {
    language: Arc<Language>,
}

impl Classification {
    pub fn new(language: Arc<Language>) -> Self {
        Classification { language }
    }
}

impl Runnable<Vec<Element>, Vec<Item>> for Classification {
    fn run(&self, input: Vec<Element>) -> Result<Vec<Item>, TransformError> {
        Ok(classify(&self.language, input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::lexing::tokenize;
    use crate::logic::token::parse_markup;
    use crate::logic::testing::languages;

    #[test]
    fn test_classifies_with_the_given_language() {
        let stage = Classification::new(Arc::new(languages::lq()));
        let items = stage.run(tokenize(&parse_markup("∼𝐴"))).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| !item.is_raw()));

        let items = stage.run(tokenize(&parse_markup("∼#"))).unwrap();
        assert!(items[1].is_raw());
    }
}
