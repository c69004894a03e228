//! Subformula and main-operator queries
//!
//! Pure functions over a parsed [`Expression`]. Documents that do not parse never get
//! this far: the loader reports their [`ParseError`](crate::logic::error::ParseError)
//! instead, which keeps "no parse" distinct from "no subformulas".

use crate::logic::ast::{Expression, Formula, NodeRef, Operator};

/// Every node of the tree, stable-sorted by ascending level
///
/// Ties keep pre-order discovery order, so the root comes last among the nodes of the
/// highest level.
pub fn level_order(expr: &Expression) -> Vec<NodeRef<'_>> {
    let mut nodes = expr.nodes();
    nodes.sort_by_cached_key(|node| node.level());
    nodes
}

/// All formula nodes, lowest level first
///
/// For a formula the last entry is the formula itself. A term has no subformulas.
pub fn subformulas(expr: &Expression) -> Vec<&Formula> {
    level_order(expr)
        .into_iter()
        .filter_map(NodeRef::as_formula)
        .collect()
}

/// Subformulas without a main operator
pub fn atomic_subformulas(expr: &Expression) -> Vec<&Formula> {
    subformulas(expr)
        .into_iter()
        .filter(|formula| formula.is_atomic())
        .collect()
}

/// Operands of the top-level operator
pub fn immediate_subformulas(expr: &Expression) -> Vec<&Formula> {
    expr.as_formula()
        .map(Formula::immediate_subformulas)
        .unwrap_or_default()
}

/// The principal connective or quantifier; `None` for atomic formulas and terms
pub fn main_operator(expr: &Expression) -> Option<Operator> {
    expr.as_formula().and_then(Formula::main_operator)
}
