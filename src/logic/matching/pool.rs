//! Meta-symbol instance pools
//!
//! One pool per [`MetaKind`]. A pool hands out one canonical instance per identity key
//! (the first request creates it) and keeps a single "current match" slot per instance.
//! Once a slot is filled it can only be confirmed with an equal value until the pool is
//! cleared.

use super::MatchError;
use crate::logic::ast::{Formula, Letter, Predicate, Term};
use crate::logic::logging::targets;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaKind {
    Variable,
    Constant,
    SentenceLetter,
    RelationSymbol,
    FunctionSymbol,
    FormulaSymbol,
}

impl MetaKind {
    pub const ALL: [MetaKind; 6] = [
        MetaKind::Variable,
        MetaKind::Constant,
        MetaKind::SentenceLetter,
        MetaKind::RelationSymbol,
        MetaKind::FunctionSymbol,
        MetaKind::FormulaSymbol,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            MetaKind::Variable => 0,
            MetaKind::Constant => 1,
            MetaKind::SentenceLetter => 2,
            MetaKind::RelationSymbol => 3,
            MetaKind::FunctionSymbol => 4,
            MetaKind::FormulaSymbol => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MetaKind::Variable => "meta-variable",
            MetaKind::Constant => "meta-constant",
            MetaKind::SentenceLetter => "meta sentence letter",
            MetaKind::RelationSymbol => "meta relation symbol",
            MetaKind::FunctionSymbol => "meta function symbol",
            MetaKind::FormulaSymbol => "formula symbol",
        }
    }
}

/// Identity of a meta-symbol instance
///
/// Superscript and arity are only set for relation and function symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MetaKey {
    pub kind: MetaKind,
    pub base: char,
    pub subscript: Option<String>,
    pub superscript: Option<String>,
    pub arity: Option<usize>,
}

impl MetaKey {
    pub fn new(kind: MetaKind, base: char) -> Self {
        MetaKey {
            kind,
            base,
            subscript: None,
            superscript: None,
            arity: None,
        }
    }

    pub fn for_letter(kind: MetaKind, letter: &Letter) -> Self {
        MetaKey {
            subscript: letter.subscript.clone(),
            ..MetaKey::new(kind, letter.base)
        }
    }

    pub fn for_predicate(kind: MetaKind, predicate: &Predicate) -> Self {
        MetaKey {
            superscript: predicate.superscript.clone(),
            arity: Some(predicate.arity),
            ..MetaKey::for_letter(kind, &predicate.letter)
        }
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.name(), self.base)?;
        if let Some(subscript) = &self.subscript {
            write!(f, "_{{{subscript}}}")?;
        }
        if let Some(superscript) = &self.superscript {
            write!(f, "^{{{superscript}}}")?;
        }
        Ok(())
    }
}

/// Whatever a meta-symbol can stand for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Bound {
    Term(Term),
    Formula(Formula),
    Predicate(Predicate),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Term(term) => write!(f, "{term}"),
            Bound::Formula(formula) => write!(f, "{formula}"),
            Bound::Predicate(predicate) => write!(f, "{predicate}"),
        }
    }
}

/// Handle to an instance inside a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetaId {
    kind: MetaKind,
    index: usize,
}

impl MetaId {
    pub fn kind(self) -> MetaKind {
        self.kind
    }
}

#[derive(Debug, Clone)]
struct Instance {
    key: MetaKey,
    current: Option<Bound>,
}

#[derive(Debug, Clone)]
pub struct MetaPool {
    kind: MetaKind,
    instances: Vec<Instance>,
    index: HashMap<MetaKey, usize>,
}

impl MetaPool {
    pub fn new(kind: MetaKind) -> Self {
        MetaPool {
            kind,
            instances: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn kind(&self) -> MetaKind {
        self.kind
    }

    /// The canonical instance for `key`, created on first request
    pub fn get_or_create(&mut self, key: MetaKey) -> MetaId {
        let index = match self.index.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.instances.len();
                self.index.insert(key.clone(), index);
                self.instances.push(Instance { key, current: None });
                index
            }
        };
        MetaId {
            kind: self.kind,
            index,
        }
    }

    pub fn key(&self, id: MetaId) -> Option<&MetaKey> {
        self.instance(id).map(|instance| &instance.key)
    }

    /// Fills the instance's slot, or confirms an equal value already in it
    pub fn set_match(&mut self, id: MetaId, candidate: Bound) -> Result<(), MatchError> {
        if id.kind != self.kind {
            return Err(MatchError::UnknownInstance(id));
        }
        let instance = self
            .instances
            .get_mut(id.index)
            .ok_or(MatchError::UnknownInstance(id))?;
        if let Some(previous) = &instance.current {
            if *previous == candidate {
                return Ok(());
            }
            return Err(MatchError::Conflict {
                key: instance.key.clone(),
                previous: previous.clone(),
                proposed: candidate,
            });
        }
        log::trace!(target: targets::MATCH, "{} := {candidate}", instance.key);
        instance.current = Some(candidate);
        Ok(())
    }

    pub fn current_match(&self, id: MetaId) -> Option<&Bound> {
        self.instance(id).and_then(|instance| instance.current.as_ref())
    }

    /// Empties every slot; instances keep their identity
    pub fn clear_all(&mut self) {
        for instance in &mut self.instances {
            instance.current = None;
        }
    }

    /// Instances with a filled slot, in creation order
    pub fn bindings(&self) -> impl Iterator<Item = (&MetaKey, &Bound)> {
        self.instances
            .iter()
            .filter_map(|instance| instance.current.as_ref().map(|bound| (&instance.key, bound)))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn instance(&self, id: MetaId) -> Option<&Instance> {
        if id.kind != self.kind {
            return None;
        }
        self.instances.get(id.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(base: char) -> Bound {
        Bound::Term(Term::Variable(Letter::new(base)))
    }

    #[test]
    fn test_first_request_creates_the_instance() {
        let mut pool = MetaPool::new(MetaKind::Variable);
        let a = pool.get_or_create(MetaKey::new(MetaKind::Variable, '𝓍'));
        let b = pool.get_or_create(MetaKey::new(MetaKind::Variable, '𝓍'));
        let c = pool.get_or_create(MetaKey::for_letter(
            MetaKind::Variable,
            &Letter::new('𝓍').with_subscript("1"),
        ));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_conflict_carries_both_values() {
        let mut pool = MetaPool::new(MetaKind::Variable);
        let key = MetaKey::new(MetaKind::Variable, '𝓍');
        let id = pool.get_or_create(key.clone());
        pool.set_match(id, variable('𝑖')).unwrap();
        pool.set_match(id, variable('𝑖')).unwrap();
        assert_eq!(
            pool.set_match(id, variable('𝑗')),
            Err(MatchError::Conflict {
                key,
                previous: variable('𝑖'),
                proposed: variable('𝑗'),
            })
        );
        assert_eq!(pool.current_match(id), Some(&variable('𝑖')));
    }

    #[test]
    fn test_clear_all_keeps_identity() {
        let mut pool = MetaPool::new(MetaKind::Constant);
        let id = pool.get_or_create(MetaKey::new(MetaKind::Constant, '𝒶'));
        let constant = |base| Bound::Term(Term::Constant(Letter::new(base)));
        pool.set_match(id, constant('𝑎')).unwrap();
        pool.clear_all();
        assert_eq!(pool.current_match(id), None);
        assert_eq!(pool.get_or_create(MetaKey::new(MetaKind::Constant, '𝒶')), id);
        pool.set_match(id, constant('𝑏')).unwrap();
    }

    #[test]
    fn test_foreign_handle_is_rejected() {
        let mut variables = MetaPool::new(MetaKind::Variable);
        let mut constants = MetaPool::new(MetaKind::Constant);
        let id = variables.get_or_create(MetaKey::new(MetaKind::Variable, '𝓍'));
        assert_eq!(
            constants.set_match(id, variable('𝑖')),
            Err(MatchError::UnknownInstance(id))
        );
    }

    #[test]
    fn test_key_display() {
        let key = MetaKey::for_predicate(
            MetaKind::RelationSymbol,
            &Predicate::with_superscript_arity(Letter::new('𝔄').with_subscript("1"), 2),
        );
        assert_eq!(key.to_string(), "meta relation symbol 𝔄_{1}^{2}");
    }
}
