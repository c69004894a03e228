//! Formulas

use super::symbol::{Letter, Operator, Predicate};
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-place connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Connective {
    Conditional,
    Biconditional,
    Conjunction,
    Disjunction,
    Nand,
    Nor,
}

impl Connective {
    pub fn from_operator(op: Operator) -> Option<Connective> {
        match op {
            Operator::Conditional => Some(Connective::Conditional),
            Operator::Biconditional => Some(Connective::Biconditional),
            Operator::Conjunction => Some(Connective::Conjunction),
            Operator::Disjunction => Some(Connective::Disjunction),
            Operator::Nand => Some(Connective::Nand),
            Operator::Nor => Some(Connective::Nor),
            _ => None,
        }
    }
}

impl From<Connective> for Operator {
    fn from(connective: Connective) -> Self {
        match connective {
            Connective::Conditional => Operator::Conditional,
            Connective::Biconditional => Operator::Biconditional,
            Connective::Conjunction => Operator::Conjunction,
            Connective::Disjunction => Operator::Disjunction,
            Connective::Nand => Operator::Nand,
            Connective::Nor => Operator::Nor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quantifier {
    Universal,
    Existential,
}

impl Quantifier {
    pub fn from_operator(op: Operator) -> Option<Quantifier> {
        match op {
            Operator::Universal => Some(Quantifier::Universal),
            Operator::Existential => Some(Quantifier::Existential),
            _ => None,
        }
    }
}

impl From<Quantifier> for Operator {
    fn from(quantifier: Quantifier) -> Self {
        match quantifier {
            Quantifier::Universal => Operator::Universal,
            Quantifier::Existential => Operator::Existential,
        }
    }
}

/// A formula
///
/// Bracket kinds are not recorded: `(𝐴→𝐵)` and `[𝐴→𝐵]` are the same formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// A sentence letter, or a meta sentence letter when `meta` is set
    Sentence(Letter),
    /// A meta-symbol standing for any formula
    Meta(Letter),
    Atomic {
        relation: Predicate,
        args: Vec<Term>,
    },
    Negation(Box<Formula>),
    Binary {
        connective: Connective,
        left: Box<Formula>,
        right: Box<Formula>,
    },
    Quantified {
        quantifier: Quantifier,
        variable: Letter,
        body: Box<Formula>,
    },
}

impl Formula {
    pub fn negation(body: Formula) -> Formula {
        Formula::Negation(Box::new(body))
    }

    pub fn binary(connective: Connective, left: Formula, right: Formula) -> Formula {
        Formula::Binary {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn quantified(quantifier: Quantifier, variable: Letter, body: Formula) -> Formula {
        Formula::Quantified {
            quantifier,
            variable,
            body: Box::new(body),
        }
    }

    /// Level of the formula
    ///
    /// Sentence letters and formula symbols are level 0. Atomic formulas sit one above
    /// their highest argument term, compound formulas one above their highest operand.
    pub fn level(&self) -> usize {
        match self {
            Formula::Sentence(_) | Formula::Meta(_) => 0,
            Formula::Atomic { args, .. } => 1 + args.iter().map(Term::level).max().unwrap_or(0),
            Formula::Negation(body) | Formula::Quantified { body, .. } => 1 + body.level(),
            Formula::Binary { left, right, .. } => 1 + left.level().max(right.level()),
        }
    }

    /// True for formulas without a main operator
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Formula::Sentence(_) | Formula::Meta(_) | Formula::Atomic { .. }
        )
    }

    /// The principal connective or quantifier
    pub fn main_operator(&self) -> Option<Operator> {
        match self {
            Formula::Negation(_) => Some(Operator::Negation),
            Formula::Binary { connective, .. } => Some((*connective).into()),
            Formula::Quantified { quantifier, .. } => Some((*quantifier).into()),
            _ => None,
        }
    }

    /// Operands of the main operator, in order
    pub fn immediate_subformulas(&self) -> Vec<&Formula> {
        match self {
            Formula::Negation(body) | Formula::Quantified { body, .. } => vec![body.as_ref()],
            Formula::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Argument terms of an atomic formula
    pub fn terms(&self) -> &[Term] {
        match self {
            Formula::Atomic { args, .. } => args,
            _ => &[],
        }
    }

    pub fn main_relation(&self) -> Option<&Predicate> {
        match self {
            Formula::Atomic { relation, .. } => Some(relation),
            _ => None,
        }
    }

    pub fn bound_variable(&self) -> Option<&Letter> {
        match self {
            Formula::Quantified { variable, .. } => Some(variable),
            _ => None,
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Sentence(letter) | Formula::Meta(letter) => write!(f, "{letter}"),
            Formula::Atomic { relation, args } => {
                write!(f, "{relation}")?;
                for arg in args {
                    write!(f, "{arg}")?;
                }
                Ok(())
            }
            Formula::Negation(body) => write!(f, "{}{body}", Operator::Negation),
            Formula::Binary {
                connective,
                left,
                right,
            } => write!(f, "({left}{}{right})", Operator::from(*connective)),
            Formula::Quantified {
                quantifier,
                variable,
                body,
            } => write!(f, "{}{variable}{body}", Operator::from(*quantifier)),
        }
    }
}
