//! Classified symbols

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Classified symbols with the UTF-16 range of the elements they were built from
pub type SymbolStream = Vec<(Symbol, Range<usize>)>;

/// Which of the (up to three) bracket pairs of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BracketKind {
    One,
    Two,
    Three,
}

impl BracketKind {
    pub const ALL: [BracketKind; 3] = [BracketKind::One, BracketKind::Two, BracketKind::Three];

    pub fn index(self) -> usize {
        match self {
            BracketKind::One => 0,
            BracketKind::Two => 1,
            BracketKind::Three => 2,
        }
    }
}

/// Connectives and quantifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    Negation,
    Conditional,
    Biconditional,
    Conjunction,
    Disjunction,
    Nand,
    Nor,
    Universal,
    Existential,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Negation,
        Operator::Conditional,
        Operator::Biconditional,
        Operator::Conjunction,
        Operator::Disjunction,
        Operator::Nand,
        Operator::Nor,
        Operator::Universal,
        Operator::Existential,
    ];

    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Operator::Conditional
                | Operator::Biconditional
                | Operator::Conjunction
                | Operator::Disjunction
                | Operator::Nand
                | Operator::Nor
        )
    }

    pub fn is_quantifier(self) -> bool {
        matches!(self, Operator::Universal | Operator::Existential)
    }

    /// Glyph used by `Display` implementations
    pub fn canonical_glyph(self) -> char {
        match self {
            Operator::Negation => '∼',
            Operator::Conditional => '→',
            Operator::Biconditional => '↔',
            Operator::Conjunction => '∧',
            Operator::Disjunction => '∨',
            Operator::Nand => '↑',
            Operator::Nor => '↓',
            Operator::Universal => '∀',
            Operator::Existential => '∃',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Negation => "negation",
            Operator::Conditional => "conditional",
            Operator::Biconditional => "biconditional",
            Operator::Conjunction => "conjunction",
            Operator::Disjunction => "disjunction",
            Operator::Nand => "nand",
            Operator::Nor => "nor",
            Operator::Universal => "universal",
            Operator::Existential => "existential",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_glyph())
    }
}

/// A letter-like symbol: base glyph plus an optional subscript index
///
/// `meta` marks letters drawn from one of the language's meta-symbol alphabets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Letter {
    pub base: char,
    pub subscript: Option<String>,
    pub meta: bool,
}

impl Letter {
    pub fn new(base: char) -> Self {
        Letter {
            base,
            subscript: None,
            meta: false,
        }
    }

    pub fn with_subscript(mut self, subscript: impl Into<String>) -> Self {
        self.subscript = Some(subscript.into());
        self
    }

    pub fn as_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(subscript) = &self.subscript {
            write!(f, "_{{{subscript}}}")?;
        }
        Ok(())
    }
}

/// How many arguments a relation or function symbol takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    /// From a superscript or a fixed-arity symbol list
    Fixed(usize),
    /// Resolved by the builder from the terms that follow
    Inferred,
}

/// A relation or function symbol with a resolved arity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub letter: Letter,
    pub superscript: Option<String>,
    pub arity: usize,
}

impl Predicate {
    /// A symbol written with its arity as superscript, as in `𝐴²`
    pub fn with_superscript_arity(letter: Letter, arity: usize) -> Self {
        Predicate {
            letter,
            superscript: Some(arity.to_string()),
            arity,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(superscript) = &self.superscript {
            write!(f, "^{{{superscript}}}")?;
        }
        Ok(())
    }
}

/// A classified symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    OpenBracket(BracketKind),
    CloseBracket(BracketKind),
    OpenAngle,
    CloseAngle,
    Comma,
    Operator(Operator),
    Variable(Letter),
    Constant(Letter),
    SentenceLetter(Letter),
    /// Meta-symbol standing for an arbitrary formula
    FormulaSymbol(Letter),
    Relation {
        letter: Letter,
        superscript: Option<String>,
        arity: Arity,
    },
    Function {
        letter: Letter,
        superscript: Option<String>,
        arity: Arity,
    },
}

impl Symbol {
    /// Short description used in error messages
    pub fn describe(&self) -> String {
        match self {
            Symbol::OpenBracket(_) => "an opening bracket".to_string(),
            Symbol::CloseBracket(_) => "a closing bracket".to_string(),
            Symbol::OpenAngle => "an opening angle bracket".to_string(),
            Symbol::CloseAngle => "a closing angle bracket".to_string(),
            Symbol::Comma => "a comma".to_string(),
            Symbol::Operator(op) => format!("the {} '{}'", op.name(), op),
            Symbol::Variable(letter) => format!("the variable {letter}"),
            Symbol::Constant(letter) => format!("the constant {letter}"),
            Symbol::SentenceLetter(letter) => format!("the sentence letter {letter}"),
            Symbol::FormulaSymbol(letter) => format!("the formula symbol {letter}"),
            Symbol::Relation { letter, .. } => format!("the relation symbol {letter}"),
            Symbol::Function { letter, .. } => format!("the function symbol {letter}"),
        }
    }

    /// True for symbols that begin a term
    pub fn starts_term(&self) -> bool {
        matches!(
            self,
            Symbol::Variable(_) | Symbol::Constant(_) | Symbol::Function { .. }
        )
    }
}
