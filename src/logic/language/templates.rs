//! Unabbreviation templates
//!
//!     A template is decorated text (in the markup form) in which control markers stand
//!     for parts of the node being expanded:
//!
//!         |0|  |1|   the unabbreviated first / second child
//!         |n|        all unabbreviated children, in order
//!         ‹s›        the node itself
//!         ‹v›        its bound variable
//!         ‹f›        its main function symbol
//!         ‹b›        its main operator
//!         ‹r›        its main relation symbol
//!
//!     Markers are recognized on undecorated glyphs only. A construct kind without a
//!     configured template uses the identity template for its shape, built from markers
//!     and the language's first bracket pair, so that expansion leaves it unchanged.

use crate::logic::ast::ConstructKind;
use crate::logic::lexing::tokenize;
use crate::logic::token::{parse_markup, Decoration, Element};

/// A control marker inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `|0|` or `|1|`
    Child(usize),
    /// `|n|`
    Children,
    /// `‹s›`
    Itself,
    /// `‹v›`
    BoundVariable,
    /// `‹f›`
    MainFunction,
    /// `‹b›`
    MainOperator,
    /// `‹r›`
    MainRelation,
}

impl Marker {
    fn from_pipes(glyph: char) -> Option<Marker> {
        match glyph {
            '0' => Some(Marker::Child(0)),
            '1' => Some(Marker::Child(1)),
            'n' => Some(Marker::Children),
            _ => None,
        }
    }

    fn from_quotes(glyph: char) -> Option<Marker> {
        match glyph {
            's' => Some(Marker::Itself),
            'v' => Some(Marker::BoundVariable),
            'f' => Some(Marker::MainFunction),
            'b' => Some(Marker::MainOperator),
            'r' => Some(Marker::MainRelation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePiece {
    Glyph(Element),
    Marker(Marker),
}

/// A tokenized template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    pieces: Vec<TemplatePiece>,
}

impl Template {
    /// Tokenizes a template written in the markup form
    pub fn parse(source: &str) -> Template {
        let elements = tokenize(&parse_markup(source));
        Template {
            source: source.to_string(),
            pieces: scan_markers(&elements),
        }
    }

    /// The identity template for `kind`
    ///
    /// `brackets` is the language's first bracket pair; `delimited` selects the
    /// `‹r›(|n|)` argument form used by languages with a comma divider.
    pub fn identity(kind: ConstructKind, brackets: (char, char), delimited: bool) -> Template {
        let (open, close) = brackets;
        let source = match kind {
            ConstructKind::Negation => "‹b›|0|".to_string(),
            ConstructKind::Conditional
            | ConstructKind::Biconditional
            | ConstructKind::Conjunction
            | ConstructKind::Disjunction
            | ConstructKind::Nand
            | ConstructKind::Nor => format!("{open}|0|‹b›|1|{close}"),
            ConstructKind::Universal | ConstructKind::Existential => "‹b›‹v›|0|".to_string(),
            ConstructKind::SentenceLetter
            | ConstructKind::FormulaSymbol
            | ConstructKind::Variable
            | ConstructKind::Constant => "‹s›".to_string(),
            ConstructKind::RelationAtomic if delimited => format!("‹r›{open}|n|{close}"),
            ConstructKind::RelationAtomic => "‹r›|n|".to_string(),
            ConstructKind::ComplexTerm if delimited => format!("‹f›{open}|n|{close}"),
            ConstructKind::ComplexTerm => "‹f›|n|".to_string(),
        };
        Template::parse(&source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn pieces(&self) -> &[TemplatePiece] {
        &self.pieces
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.pieces.iter().filter_map(|piece| match piece {
            TemplatePiece::Marker(marker) => Some(*marker),
            TemplatePiece::Glyph(_) => None,
        })
    }
}

/// Replaces three-glyph marker sequences with markers
fn scan_markers(elements: &[Element]) -> Vec<TemplatePiece> {
    let mut pieces = Vec::with_capacity(elements.len());
    let mut i = 0;
    while i < elements.len() {
        if let Some(marker) = marker_at(&elements[i..]) {
            pieces.push(TemplatePiece::Marker(marker));
            i += 3;
        } else {
            pieces.push(TemplatePiece::Glyph(elements[i]));
            i += 1;
        }
    }
    pieces
}

fn marker_at(window: &[Element]) -> Option<Marker> {
    let [open, body, close, ..] = window else {
        return None;
    };
    if [open, body, close]
        .iter()
        .any(|e| e.decoration.settled() != Decoration::Normal)
    {
        return None;
    }
    match (open.glyph, close.glyph) {
        ('|', '|') => Marker::from_pipes(body.glyph),
        ('‹', '›') => Marker::from_quotes(body.glyph),
        _ => None,
    }
}
