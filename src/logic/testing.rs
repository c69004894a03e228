//! Testing utilities
//!
//!     Helpers shared by unit tests, integration tests and doc examples. Test content
//!     should come from the languages defined here rather than ad-hoc definitions, so
//!     that a change in a language only has to be followed up in one place.
//!
//!     The helpers panic on malformed input: they are for tests, where a broken fixture
//!     should fail loudly.

/// Builders for elements, items and expression trees
pub mod factories {
    use crate::logic::ast::{Formula, Letter, Predicate, Term};
    use crate::logic::classifying::Item;
    use crate::logic::token::{Decoration, Element};

    /// Elements from `(glyph, decoration, position)` triples
    pub fn mk_elements(spec: &[(char, Decoration, usize)]) -> Vec<Element> {
        spec.iter()
            .map(|&(glyph, decoration, position)| Element::new(glyph, decoration, position))
            .collect()
    }

    /// Raw classifier items from `(glyph, decoration, position)` triples
    pub fn mk_items(spec: &[(char, Decoration, usize)]) -> Vec<Item> {
        mk_elements(spec).into_iter().map(Item::Raw).collect()
    }

    pub fn var(base: char) -> Term {
        Term::Variable(Letter::new(base))
    }

    pub fn con(base: char) -> Term {
        Term::Constant(Letter::new(base))
    }

    pub fn sentence(base: char) -> Formula {
        Formula::Sentence(Letter::new(base))
    }

    /// A relation written with its arity as superscript, applied to `args`
    pub fn atomic(base: char, args: Vec<Term>) -> Formula {
        Formula::Atomic {
            relation: Predicate::with_superscript_arity(Letter::new(base), args.len()),
            args,
        }
    }

    /// A function written with its arity as superscript, applied to `args`
    pub fn apply(base: char, args: Vec<Term>) -> Term {
        Term::Application {
            function: Predicate::with_superscript_arity(Letter::new(base), args.len()),
            args,
        }
    }
}

/// Languages used throughout the test suite
pub mod languages {
    use crate::logic::language::{Language, LanguageRegistry, Loader};

    /// Plain-letter language where relation and function arities may be inferred
    pub const INFERRING_TOML: &str = r#"
        [languages.lp]
        name = "Lp"
        brackets = ["()"]
        operators = { negation = "∼", conditional = "→", universal = "∀" }

        [languages.lp.vocabulary]
        variables = [{ alphabet = "plain-lowercase", from = "x", to = "z" }]
        constants = [{ alphabet = "plain-lowercase", from = "a", to = "e" }]
        functions = [{ alphabet = "plain-lowercase", from = "f", to = "h" }]
        sentence_letters = [{ alphabet = "plain-uppercase" }]
        relations = [{ alphabet = "plain-uppercase" }]
    "#;

    /// Language with a comma divider and angle brackets
    pub const DELIMITED_TOML: &str = r#"
        [languages.lf]
        name = "Lf"
        brackets = ["()"]
        angle_brackets = "⟨⟩"
        comma = ","
        drop_outer_brackets = true
        operators = { negation = "¬", conditional = "⊃", universal = "∀" }

        [languages.lf.vocabulary]
        variables = [{ alphabet = "plain-lowercase", from = "x", to = "z" }]
        constants = [{ alphabet = "plain-lowercase", from = "a", to = "e" }]
        functions = [{ alphabet = "plain-lowercase", from = "f", to = "h" }]
        sentence_letters = [{ alphabet = "plain-uppercase" }]
        relations = [{ alphabet = "plain-uppercase" }]
        two_place_relations = ["="]
        one_place_functions = ["g"]

        [languages.lf.templates]
        relation_atomic = "‹r›⟨|n|⟩"
    "#;

    pub fn builtin() -> LanguageRegistry {
        LanguageRegistry::builtin().expect("built-in languages to load")
    }

    /// The built-ins plus the test languages
    pub fn registry() -> LanguageRegistry {
        Loader::new()
            .with_toml_str(INFERRING_TOML)
            .with_toml_str(DELIMITED_TOML)
            .build()
            .expect("test languages to load")
    }

    fn get(name: &str) -> Language {
        registry()
            .get(name)
            .expect("language to be registered")
            .clone()
    }

    pub fn lq() -> Language {
        get("Lq")
    }

    pub fn ls() -> Language {
        get("Ls")
    }

    pub fn inferring() -> Language {
        get("Lp")
    }

    pub fn delimited() -> Language {
        get("Lf")
    }
}
