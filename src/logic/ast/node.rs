//! Uniform view over terms and formulas

use super::formula::{Connective, Formula, Quantifier};
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully parsed document: a single term or a single formula
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    Term(Term),
    Formula(Formula),
}

impl Expression {
    pub fn as_node(&self) -> NodeRef<'_> {
        match self {
            Expression::Term(term) => NodeRef::Term(term),
            Expression::Formula(formula) => NodeRef::Formula(formula),
        }
    }

    pub fn as_formula(&self) -> Option<&Formula> {
        match self {
            Expression::Formula(formula) => Some(formula),
            Expression::Term(_) => None,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Expression::Term(term) => Some(term),
            Expression::Formula(_) => None,
        }
    }

    pub fn level(&self) -> usize {
        self.as_node().level()
    }

    /// Every node of the tree in pre-order (root first, children left to right)
    pub fn nodes(&self) -> Vec<NodeRef<'_>> {
        self.as_node().preorder()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Term(term) => write!(f, "{term}"),
            Expression::Formula(formula) => write!(f, "{formula}"),
        }
    }
}

impl From<Formula> for Expression {
    fn from(formula: Formula) -> Self {
        Expression::Formula(formula)
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::Term(term)
    }
}

/// The shape of a node, which selects its unabbreviation template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructKind {
    Negation,
    Conditional,
    Biconditional,
    Conjunction,
    Disjunction,
    Nand,
    Nor,
    Universal,
    Existential,
    SentenceLetter,
    FormulaSymbol,
    RelationAtomic,
    Variable,
    Constant,
    ComplexTerm,
}

impl ConstructKind {
    pub const ALL: [ConstructKind; 15] = [
        ConstructKind::Negation,
        ConstructKind::Conditional,
        ConstructKind::Biconditional,
        ConstructKind::Conjunction,
        ConstructKind::Disjunction,
        ConstructKind::Nand,
        ConstructKind::Nor,
        ConstructKind::Universal,
        ConstructKind::Existential,
        ConstructKind::SentenceLetter,
        ConstructKind::FormulaSymbol,
        ConstructKind::RelationAtomic,
        ConstructKind::Variable,
        ConstructKind::Constant,
        ConstructKind::ComplexTerm,
    ];

    /// The snake_case key used for templates in configuration files
    pub fn key(self) -> &'static str {
        match self {
            ConstructKind::Negation => "negation",
            ConstructKind::Conditional => "conditional",
            ConstructKind::Biconditional => "biconditional",
            ConstructKind::Conjunction => "conjunction",
            ConstructKind::Disjunction => "disjunction",
            ConstructKind::Nand => "nand",
            ConstructKind::Nor => "nor",
            ConstructKind::Universal => "universal",
            ConstructKind::Existential => "existential",
            ConstructKind::SentenceLetter => "sentence_letter",
            ConstructKind::FormulaSymbol => "formula_symbol",
            ConstructKind::RelationAtomic => "relation_atomic",
            ConstructKind::Variable => "variable",
            ConstructKind::Constant => "constant",
            ConstructKind::ComplexTerm => "complex_term",
        }
    }

    pub fn from_key(key: &str) -> Option<ConstructKind> {
        ConstructKind::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// True when nodes of this kind are terms
    pub fn is_term(self) -> bool {
        matches!(
            self,
            ConstructKind::Variable | ConstructKind::Constant | ConstructKind::ComplexTerm
        )
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key().replace('_', " "))
    }
}

/// A borrowed term or formula node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Term(&'a Term),
    Formula(&'a Formula),
}

impl<'a> NodeRef<'a> {
    pub fn level(self) -> usize {
        match self {
            NodeRef::Term(term) => term.level(),
            NodeRef::Formula(formula) => formula.level(),
        }
    }

    /// Immediate child nodes
    ///
    /// The operands of a connective, the body of a quantifier, and the argument terms
    /// of atomic formulas and function applications. A quantifier's bound variable is
    /// part of the quantifier, not a child.
    pub fn children(self) -> Vec<NodeRef<'a>> {
        match self {
            NodeRef::Term(term) => term.children().iter().map(NodeRef::Term).collect(),
            NodeRef::Formula(formula) => match formula {
                Formula::Atomic { args, .. } => args.iter().map(NodeRef::Term).collect(),
                other => other
                    .immediate_subformulas()
                    .into_iter()
                    .map(NodeRef::Formula)
                    .collect(),
            },
        }
    }

    pub fn construct_kind(self) -> ConstructKind {
        match self {
            NodeRef::Term(Term::Variable(_)) => ConstructKind::Variable,
            NodeRef::Term(Term::Constant(_)) => ConstructKind::Constant,
            NodeRef::Term(Term::Application { .. }) => ConstructKind::ComplexTerm,
            NodeRef::Formula(formula) => match formula {
                Formula::Sentence(_) => ConstructKind::SentenceLetter,
                Formula::Meta(_) => ConstructKind::FormulaSymbol,
                Formula::Atomic { .. } => ConstructKind::RelationAtomic,
                Formula::Negation(_) => ConstructKind::Negation,
                Formula::Binary { connective, .. } => match connective {
                    Connective::Conditional => ConstructKind::Conditional,
                    Connective::Biconditional => ConstructKind::Biconditional,
                    Connective::Conjunction => ConstructKind::Conjunction,
                    Connective::Disjunction => ConstructKind::Disjunction,
                    Connective::Nand => ConstructKind::Nand,
                    Connective::Nor => ConstructKind::Nor,
                },
                Formula::Quantified { quantifier, .. } => match quantifier {
                    Quantifier::Universal => ConstructKind::Universal,
                    Quantifier::Existential => ConstructKind::Existential,
                },
            },
        }
    }

    pub fn as_formula(self) -> Option<&'a Formula> {
        match self {
            NodeRef::Formula(formula) => Some(formula),
            NodeRef::Term(_) => None,
        }
    }

    pub fn as_term(self) -> Option<&'a Term> {
        match self {
            NodeRef::Term(term) => Some(term),
            NodeRef::Formula(_) => None,
        }
    }

    /// Owned copy of the node
    pub fn to_expression(self) -> Expression {
        match self {
            NodeRef::Term(term) => Expression::Term(term.clone()),
            NodeRef::Formula(formula) => Expression::Formula(formula.clone()),
        }
    }

    /// This node and all its descendants, root first
    pub fn preorder(self) -> Vec<NodeRef<'a>> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.children().into_iter().rev());
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ast::{Letter, Predicate};

    fn sample() -> Formula {
        // ∼(𝐴→𝐵²𝑎𝑏)
        Formula::negation(Formula::binary(
            Connective::Conditional,
            Formula::Sentence(Letter::new('𝐴')),
            Formula::Atomic {
                relation: Predicate::with_superscript_arity(Letter::new('𝐵'), 2),
                args: vec![
                    Term::Constant(Letter::new('𝑎')),
                    Term::Constant(Letter::new('𝑏')),
                ],
            },
        ))
    }

    #[test]
    fn test_preorder() {
        let expr = Expression::Formula(sample());
        let kinds: Vec<_> = expr.nodes().into_iter().map(|n| n.construct_kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ConstructKind::Negation,
                ConstructKind::Conditional,
                ConstructKind::SentenceLetter,
                ConstructKind::RelationAtomic,
                ConstructKind::Constant,
                ConstructKind::Constant,
            ]
        );
    }

    #[test]
    fn test_children_of_atomic_are_terms() {
        let formula = sample();
        let expr = Expression::Formula(formula);
        let atomic = expr.nodes()[3];
        assert!(atomic
            .children()
            .iter()
            .all(|child| child.as_term().is_some()));
    }

    #[test]
    fn test_keys_match_serde_names() {
        for kind in ConstructKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key()));
            assert_eq!(ConstructKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ConstructKind::from_key("tensor"), None);
    }

    #[test]
    fn test_term_kinds() {
        assert!(ConstructKind::ComplexTerm.is_term());
        assert!(!ConstructKind::RelationAtomic.is_term());
    }
}
