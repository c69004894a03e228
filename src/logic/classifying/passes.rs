//! The four classifier passes
//!
//! Each pass walks the items left to right and rewrites only undecorated raw
//! elements, so symbols produced by an earlier pass are never reconsidered.

use super::decorations::{read_runs, read_subscript, Runs};
use super::items::Item;
use crate::logic::ast::{Arity, Letter, Symbol};
use crate::logic::language::Language;
use crate::logic::logging::targets;
use crate::logic::token::{Decoration, Element};

/// Brackets, angle brackets, the comma and operators
pub(crate) fn fixed_symbols(language: &Language, items: Vec<Item>) -> Vec<Item> {
    rewrite(items, |base, _| {
        language.fixed_symbol(base.glyph).map(|symbol| (symbol, 0))
    })
}

/// Relation symbols first, then function symbols
pub(crate) fn predicates(language: &Language, items: Vec<Item>) -> Vec<Item> {
    let items = rewrite(items, |base, rest| {
        predicate(language, Role::Relation, base.glyph, rest)
    });
    rewrite(items, |base, rest| {
        predicate(language, Role::Function, base.glyph, rest)
    })
}

/// Variables, constants and their meta counterparts
pub(crate) fn letters(language: &Language, items: Vec<Item>) -> Vec<Item> {
    let vocabulary = language.vocabulary();
    let meta = language.meta();
    let policy = language.subscripts();
    rewrite(items, |base, rest| {
        let g = base.glyph;
        let (make, is_meta, subscripts): (fn(Letter) -> Symbol, bool, bool) =
            if vocabulary.variables.contains(&g) {
                (Symbol::Variable, false, policy.variables)
            } else if vocabulary.constants.contains(&g) {
                (Symbol::Constant, false, policy.constants)
            } else if meta.variables.contains(&g) {
                (Symbol::Variable, true, policy.variables)
            } else if meta.constants.contains(&g) {
                (Symbol::Constant, true, policy.constants)
            } else {
                return None;
            };
        Some(lettered(g, make, is_meta, subscripts, rest))
    })
}

/// Sentence letters, meta sentence letters and formula symbols
pub(crate) fn sentence_letters(language: &Language, items: Vec<Item>) -> Vec<Item> {
    let vocabulary = language.vocabulary();
    let meta = language.meta();
    let subscripts = language.subscripts().sentence_letters;
    rewrite(items, |base, rest| {
        let g = base.glyph;
        let (make, is_meta): (fn(Letter) -> Symbol, bool) =
            if vocabulary.sentence_letters.contains(&g) {
                (Symbol::SentenceLetter, false)
            } else if meta.sentence_letters.contains(&g) {
                (Symbol::SentenceLetter, true)
            } else if meta.formulas.contains(&g) {
                (Symbol::FormulaSymbol, true)
            } else {
                return None;
            };
        Some(lettered(g, make, is_meta, subscripts, rest))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Relation,
    Function,
}

fn predicate(
    language: &Language,
    role: Role,
    glyph: char,
    rest: &[Item],
) -> Option<(Symbol, usize)> {
    let vocabulary = language.vocabulary();
    let meta = language.meta();
    let policy = language.subscripts();
    let (fixed, extensible, metas, subscripts) = match role {
        Role::Relation => (
            language.fixed_relation_arity(glyph),
            &vocabulary.relations,
            &meta.relations,
            policy.relations,
        ),
        Role::Function => (
            language.fixed_function_arity(glyph),
            &vocabulary.functions,
            &meta.functions,
            policy.functions,
        ),
    };

    if let Some(arity) = fixed {
        let runs = if subscripts {
            read_subscript(rest)
        } else {
            Runs::default()
        };
        let letter = Letter {
            base: glyph,
            subscript: runs.subscript,
            meta: false,
        };
        return Some((role.symbol(letter, None, Arity::Fixed(arity)), runs.consumed));
    }

    let is_meta = metas.contains(&glyph);
    if !is_meta && !extensible.contains(&glyph) {
        return None;
    }
    let runs = read_runs(rest);
    if runs.subscript.is_some() && !subscripts {
        return None;
    }
    let arity = match &runs.superscript {
        Some(digits) => match digits.parse::<usize>() {
            Ok(n) if n > 0 => Arity::Fixed(n),
            _ => return None,
        },
        None if language.require_superscript() => return None,
        None if follows_term(language, &rest[runs.consumed..]) => Arity::Inferred,
        None => return None,
    };
    let letter = Letter {
        base: glyph,
        subscript: runs.subscript,
        meta: is_meta,
    };
    Some((role.symbol(letter, runs.superscript, arity), runs.consumed))
}

impl Role {
    fn symbol(self, letter: Letter, superscript: Option<String>, arity: Arity) -> Symbol {
        match self {
            Role::Relation => Symbol::Relation {
                letter,
                superscript,
                arity,
            },
            Role::Function => Symbol::Function {
                letter,
                superscript,
                arity,
            },
        }
    }
}

/// True when the item after a symbol can begin one of its arguments
fn follows_term(language: &Language, rest: &[Item]) -> bool {
    match rest.first() {
        Some(Item::Raw(element)) if element.decoration.settled() == Decoration::Normal => {
            language.starts_term(element.glyph) || language.opens_argument_list(element.glyph)
        }
        Some(Item::Symbol(symbol, _)) => {
            symbol.starts_term()
                || (language.comma().is_some()
                    && matches!(symbol, Symbol::OpenBracket(_) | Symbol::OpenAngle))
        }
        _ => false,
    }
}

fn lettered(
    glyph: char,
    make: fn(Letter) -> Symbol,
    meta: bool,
    subscripts: bool,
    rest: &[Item],
) -> (Symbol, usize) {
    let runs = if subscripts {
        read_subscript(rest)
    } else {
        Runs::default()
    };
    let letter = Letter {
        base: glyph,
        subscript: runs.subscript,
        meta,
    };
    (make(letter), runs.consumed)
}

/// Rewrites raw base elements `recognize` accepts
///
/// `recognize` sees the base and every item after it, and reports the symbol together
/// with how many of the following items (decoration runs) it takes.
fn rewrite<F>(items: Vec<Item>, mut recognize: F) -> Vec<Item>
where
    F: FnMut(&Element, &[Item]) -> Option<(Symbol, usize)>,
{
    let mut out = Vec::with_capacity(items.len());
    let mut i = 0;
    while i < items.len() {
        let recognized = items[i].base().and_then(|base| {
            recognize(base, &items[i + 1..]).map(|(symbol, n)| (symbol, base.position, n))
        });
        match recognized {
            Some((symbol, start, consumed)) => {
                let end = items[i + consumed].span().end;
                log::trace!(
                    target: targets::CLASSIFY,
                    "{} at {start}..{end}",
                    symbol.describe()
                );
                out.push(Item::Symbol(symbol, start..end));
                i += consumed + 1;
            }
            None => {
                out.push(items[i].clone());
                i += 1;
            }
        }
    }
    out
}
