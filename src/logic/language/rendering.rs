//! Rendering expressions back into elements
//!
//! The inverse of classification and building, up to bracket kind: binary formulas are
//! always written with the language's first bracket pair, and glyphs the language does
//! not configure fall back to the canonical ones. Subscript indices and superscripts
//! become decorated digit elements.

use super::definition::Language;
use crate::logic::ast::{Expression, Formula, Letter, NodeRef, Operator, Predicate, Term};
use crate::logic::token::{Decoration, Element};

impl Language {
    pub fn render_expression(&self, expr: &Expression) -> Vec<Element> {
        self.render(expr.as_node())
    }

    pub fn render(&self, node: NodeRef<'_>) -> Vec<Element> {
        let mut out = Vec::new();
        match node {
            NodeRef::Term(term) => self.write_term(term, &mut out),
            NodeRef::Formula(formula) => self.write_formula(formula, &mut out),
        }
        out
    }

    pub fn render_letter(&self, letter: &Letter) -> Vec<Element> {
        let mut out = Vec::new();
        write_letter(letter, &mut out);
        out
    }

    pub fn render_predicate(&self, predicate: &Predicate) -> Vec<Element> {
        let mut out = Vec::new();
        write_predicate(predicate, &mut out);
        out
    }

    pub fn render_operator(&self, op: Operator) -> Element {
        Element::normal(self.operator_glyph(op).unwrap_or(op.canonical_glyph()))
    }

    /// Argument list for a relation or function symbol
    ///
    /// Comma languages get a bracketed, comma separated list; others juxtapose.
    pub fn render_arguments(&self, args: &[Vec<Element>]) -> Vec<Element> {
        let mut out = Vec::new();
        if self.comma().is_some() {
            let (open, close) = self.primary_brackets();
            out.push(Element::normal(open));
            out.extend(self.join_with_comma(args));
            out.push(Element::normal(close));
        } else {
            out.extend(args.iter().flatten().copied());
        }
        out
    }

    /// Concatenates rendered nodes, separated by the comma divider when there is one
    pub fn join_with_comma(&self, parts: &[Vec<Element>]) -> Vec<Element> {
        let mut out = Vec::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                if let Some(comma) = self.comma() {
                    out.push(Element::normal(comma));
                }
            }
            out.extend(part.iter().copied());
        }
        out
    }

    fn write_term(&self, term: &Term, out: &mut Vec<Element>) {
        match term {
            Term::Variable(letter) | Term::Constant(letter) => write_letter(letter, out),
            Term::Application { function, args } => {
                write_predicate(function, out);
                self.write_args(args, out);
            }
        }
    }

    fn write_args(&self, args: &[Term], out: &mut Vec<Element>) {
        let rendered: Vec<Vec<Element>> = args
            .iter()
            .map(|arg| self.render(NodeRef::Term(arg)))
            .collect();
        out.extend(self.render_arguments(&rendered));
    }

    fn write_formula(&self, formula: &Formula, out: &mut Vec<Element>) {
        match formula {
            Formula::Sentence(letter) | Formula::Meta(letter) => write_letter(letter, out),
            Formula::Atomic { relation, args } => {
                write_predicate(relation, out);
                self.write_args(args, out);
            }
            Formula::Negation(body) => {
                out.push(self.render_operator(Operator::Negation));
                self.write_formula(body, out);
            }
            Formula::Binary {
                connective,
                left,
                right,
            } => {
                let (open, close) = self.primary_brackets();
                out.push(Element::normal(open));
                self.write_formula(left, out);
                out.push(self.render_operator((*connective).into()));
                self.write_formula(right, out);
                out.push(Element::normal(close));
            }
            Formula::Quantified {
                quantifier,
                variable,
                body,
            } => {
                out.push(self.render_operator((*quantifier).into()));
                write_letter(variable, out);
                self.write_formula(body, out);
            }
        }
    }
}

fn write_letter(letter: &Letter, out: &mut Vec<Element>) {
    out.push(Element::normal(letter.base));
    if let Some(subscript) = &letter.subscript {
        out.extend(subscript.chars().map(|c| Element::new(c, Decoration::Subscript, 0)));
    }
}

fn write_predicate(predicate: &Predicate, out: &mut Vec<Element>) {
    write_letter(&predicate.letter, out);
    if let Some(superscript) = &predicate.superscript {
        out.extend(
            superscript
                .chars()
                .map(|c| Element::new(c, Decoration::Superscript, 0)),
        );
    }
}
