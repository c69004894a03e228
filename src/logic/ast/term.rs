//! Terms

use super::symbol::{Letter, Predicate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A term: a variable, a constant, or a function symbol applied to terms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(Letter),
    Constant(Letter),
    Application { function: Predicate, args: Vec<Term> },
}

impl Term {
    /// 0 for variables and constants, otherwise one more than the highest argument
    pub fn level(&self) -> usize {
        match self {
            Term::Variable(_) | Term::Constant(_) => 0,
            Term::Application { args, .. } => {
                1 + args.iter().map(Term::level).max().unwrap_or(0)
            }
        }
    }

    /// Immediate argument terms
    pub fn children(&self) -> &[Term] {
        match self {
            Term::Variable(_) | Term::Constant(_) => &[],
            Term::Application { args, .. } => args,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Term::Application { .. })
    }

    /// The function symbol of an application
    pub fn main_function(&self) -> Option<&Predicate> {
        match self {
            Term::Application { function, .. } => Some(function),
            _ => None,
        }
    }

    /// The letter of a variable or constant
    pub fn letter(&self) -> Option<&Letter> {
        match self {
            Term::Variable(letter) | Term::Constant(letter) => Some(letter),
            Term::Application { .. } => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(letter) | Term::Constant(letter) => write!(f, "{letter}"),
            Term::Application { function, args } => {
                write!(f, "{function}")?;
                for arg in args {
                    write!(f, "{arg}")?;
                }
                Ok(())
            }
        }
    }
}
