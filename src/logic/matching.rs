//! Meta-symbol matcher
//!
//!     Checks whether a concrete expression is an instance of a pattern written with
//!     meta-symbols, binding each meta-symbol to the part of the candidate it stands for.
//!
//!     A [`MatchSession`] owns one [`MetaPool`] per [`MetaKind`] and is the context of one
//!     matching episode. Bindings persist across calls on the same session, which is
//!     what lets several formulas be matched against one schema (all premises of a rule,
//!     say); [`MatchSession::clear_all`] starts a fresh episode. A failed match leaves
//!     whatever bindings it made before failing in place.
//!
//!     What the meta-symbols stand for:
//!
//!         meta-variable           a variable
//!         meta-constant           a constant
//!         meta sentence letter    a sentence letter
//!         formula symbol          any formula
//!         meta relation symbol    a relation symbol of the same arity
//!         meta function symbol    a function symbol of the same arity
//!
//!     Everything else in a pattern has to appear in the candidate as it is.

mod pool;

pub use pool::{Bound, MetaId, MetaKey, MetaKind, MetaPool};

use crate::logic::ast::{Expression, Formula, Letter, Predicate, Term};
use crate::logic::logging::targets;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A meta-symbol already bound in this episode was asked to take a different value
    #[error("{key} is already matched to {previous}, so it cannot also match {proposed}")]
    Conflict {
        key: MetaKey,
        previous: Bound,
        proposed: Bound,
    },
    /// The candidate's shape differs from the pattern's
    #[error("{candidate} does not match {pattern}")]
    Mismatch { pattern: String, candidate: String },
    #[error("no meta-symbol instance {0:?} in this pool")]
    UnknownInstance(MetaId),
}

/// The pools and bindings of one matching episode
#[derive(Debug, Clone)]
pub struct MatchSession {
    pools: [MetaPool; 6],
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSession {
    pub fn new() -> Self {
        MatchSession {
            pools: MetaKind::ALL.map(MetaPool::new),
        }
    }

    pub fn pool(&self, kind: MetaKind) -> &MetaPool {
        &self.pools[kind.index()]
    }

    pub fn pool_mut(&mut self, kind: MetaKind) -> &mut MetaPool {
        &mut self.pools[kind.index()]
    }

    pub fn get_or_create(&mut self, key: MetaKey) -> MetaId {
        self.pool_mut(key.kind).get_or_create(key)
    }

    pub fn set_match(&mut self, id: MetaId, candidate: Bound) -> Result<(), MatchError> {
        self.pool_mut(id.kind()).set_match(id, candidate)
    }

    pub fn current_match(&self, id: MetaId) -> Option<&Bound> {
        self.pool(id.kind()).current_match(id)
    }

    /// Binds the instance for `key`, creating it if needed
    pub fn bind(&mut self, key: MetaKey, candidate: Bound) -> Result<MetaId, MatchError> {
        let id = self.get_or_create(key);
        self.set_match(id, candidate)?;
        Ok(id)
    }

    /// Current binding of the instance for `key`, if the instance exists
    pub fn lookup(&self, key: &MetaKey) -> Option<&Bound> {
        self.pool(key.kind)
            .bindings()
            .find(|(bound_key, _)| *bound_key == key)
            .map(|(_, bound)| bound)
    }

    /// Every binding of the episode, pool by pool
    pub fn bindings(&self) -> Vec<(&MetaKey, &Bound)> {
        self.pools.iter().flat_map(MetaPool::bindings).collect()
    }

    /// Starts a new episode: every slot of every pool is emptied
    pub fn clear_all(&mut self) {
        log::trace!(target: targets::MATCH, "Clearing all bindings");
        for pool in &mut self.pools {
            pool.clear_all();
        }
    }

    pub fn match_expression(
        &mut self,
        pattern: &Expression,
        candidate: &Expression,
    ) -> Result<(), MatchError> {
        match (pattern, candidate) {
            (Expression::Formula(p), Expression::Formula(c)) => self.match_formula(p, c),
            (Expression::Term(p), Expression::Term(c)) => self.match_term(p, c),
            _ => Err(mismatch(pattern, candidate)),
        }
    }

    pub fn match_formula(
        &mut self,
        pattern: &Formula,
        candidate: &Formula,
    ) -> Result<(), MatchError> {
        match (pattern, candidate) {
            (Formula::Meta(letter), _) => self
                .bind(
                    MetaKey::for_letter(MetaKind::FormulaSymbol, letter),
                    Bound::Formula(candidate.clone()),
                )
                .map(drop),
            (Formula::Sentence(letter), Formula::Sentence(_)) if letter.meta => self
                .bind(
                    MetaKey::for_letter(MetaKind::SentenceLetter, letter),
                    Bound::Formula(candidate.clone()),
                )
                .map(drop),
            (
                Formula::Atomic { relation, args },
                Formula::Atomic {
                    relation: other,
                    args: other_args,
                },
            ) if relation.arity == other.arity => {
                let kind = MetaKind::RelationSymbol;
                self.match_predicate(kind, relation, other, pattern, candidate)?;
                self.match_terms(args, other_args)
            }
            (Formula::Negation(p), Formula::Negation(c)) => self.match_formula(p, c),
            (
                Formula::Binary {
                    connective,
                    left,
                    right,
                },
                Formula::Binary {
                    connective: other,
                    left: other_left,
                    right: other_right,
                },
            ) if connective == other => {
                self.match_formula(left, other_left)?;
                self.match_formula(right, other_right)
            }
            (
                Formula::Quantified {
                    quantifier,
                    variable,
                    body,
                },
                Formula::Quantified {
                    quantifier: other,
                    variable: other_variable,
                    body: other_body,
                },
            ) if quantifier == other => {
                self.match_letter(
                    MetaKind::Variable,
                    variable,
                    Bound::Term(Term::Variable(other_variable.clone())),
                    other_variable,
                    pattern,
                    candidate,
                )?;
                self.match_formula(body, other_body)
            }
            _ if pattern == candidate => Ok(()),
            _ => Err(mismatch(pattern, candidate)),
        }
    }

    pub fn match_term(&mut self, pattern: &Term, candidate: &Term) -> Result<(), MatchError> {
        match (pattern, candidate) {
            (Term::Variable(letter), Term::Variable(other)) => self.match_letter(
                MetaKind::Variable,
                letter,
                Bound::Term(candidate.clone()),
                other,
                pattern,
                candidate,
            ),
            (Term::Constant(letter), Term::Constant(other)) => self.match_letter(
                MetaKind::Constant,
                letter,
                Bound::Term(candidate.clone()),
                other,
                pattern,
                candidate,
            ),
            (
                Term::Application { function, args },
                Term::Application {
                    function: other,
                    args: other_args,
                },
            ) if function.arity == other.arity => {
                let kind = MetaKind::FunctionSymbol;
                self.match_predicate(kind, function, other, pattern, candidate)?;
                self.match_terms(args, other_args)
            }
            _ => Err(mismatch(pattern, candidate)),
        }
    }

    fn match_terms(&mut self, patterns: &[Term], candidates: &[Term]) -> Result<(), MatchError> {
        for (pattern, candidate) in patterns.iter().zip(candidates) {
            self.match_term(pattern, candidate)?;
        }
        Ok(())
    }

    /// A meta letter binds; any other letter must be the candidate's
    fn match_letter(
        &mut self,
        kind: MetaKind,
        letter: &Letter,
        bound: Bound,
        other: &Letter,
        pattern: &impl Display,
        candidate: &impl Display,
    ) -> Result<(), MatchError> {
        if letter.meta {
            self.bind(MetaKey::for_letter(kind, letter), bound).map(drop)
        } else if letter == other {
            Ok(())
        } else {
            Err(mismatch(pattern, candidate))
        }
    }

    /// Relation and function symbols compare by letter; arities are checked by the caller
    fn match_predicate(
        &mut self,
        kind: MetaKind,
        predicate: &Predicate,
        other: &Predicate,
        pattern: &impl Display,
        candidate: &impl Display,
    ) -> Result<(), MatchError> {
        if predicate.letter.meta {
            self.bind(
                MetaKey::for_predicate(kind, predicate),
                Bound::Predicate(other.clone()),
            )
            .map(drop)
        } else if predicate.letter == other.letter {
            Ok(())
        } else {
            Err(mismatch(pattern, candidate))
        }
    }
}

fn mismatch(pattern: &impl Display, candidate: &impl Display) -> MatchError {
    MatchError::Mismatch {
        pattern: pattern.to_string(),
        candidate: candidate.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ast::{Connective, Quantifier};
    use crate::logic::testing::factories::{atomic, con, sentence, var};

    fn meta_formula(base: char) -> Formula {
        Formula::Meta(Letter::new(base).as_meta())
    }

    #[test]
    fn test_meta_variable_binding() {
        let mut session = MatchSession::new();
        let key = MetaKey::new(MetaKind::Variable, '𝓍');
        let id = session.get_or_create(key.clone());
        session.set_match(id, Bound::Term(var('𝑖'))).unwrap();
        session.set_match(id, Bound::Term(var('𝑖'))).unwrap();
        assert_eq!(
            session.set_match(id, Bound::Term(var('𝑗'))),
            Err(MatchError::Conflict {
                key,
                previous: Bound::Term(var('𝑖')),
                proposed: Bound::Term(var('𝑗')),
            })
        );
    }

    #[test]
    fn test_schema_binds_formula_symbols() {
        let mut session = MatchSession::new();
        let pattern =
            Formula::binary(Connective::Conditional, meta_formula('𝒜'), meta_formula('ℬ'));
        let candidate = Formula::binary(
            Connective::Conditional,
            Formula::negation(sentence('𝐴')),
            sentence('𝐵'),
        );
        session.match_formula(&pattern, &candidate).unwrap();
        assert_eq!(
            session.lookup(&MetaKey::new(MetaKind::FormulaSymbol, '𝒜')),
            Some(&Bound::Formula(Formula::negation(sentence('𝐴'))))
        );
        assert_eq!(session.bindings().len(), 2);
    }

    #[test]
    fn test_repeated_formula_symbol_must_agree() {
        let mut session = MatchSession::new();
        let pattern =
            Formula::binary(Connective::Conditional, meta_formula('𝒜'), meta_formula('𝒜'));
        let same = Formula::binary(Connective::Conditional, sentence('𝐴'), sentence('𝐴'));
        let different = Formula::binary(Connective::Conditional, sentence('𝐴'), sentence('𝐵'));
        session.match_formula(&pattern, &same).unwrap();
        session.clear_all();
        assert!(matches!(
            session.match_formula(&pattern, &different),
            Err(MatchError::Conflict { .. })
        ));
    }

    #[test]
    fn test_bindings_leak_without_clear() {
        let mut session = MatchSession::new();
        let pattern = meta_formula('𝒜');
        session.match_formula(&pattern, &sentence('𝐴')).unwrap();
        assert!(session.match_formula(&pattern, &sentence('𝐵')).is_err());
        session.clear_all();
        session.match_formula(&pattern, &sentence('𝐵')).unwrap();
    }

    #[test]
    fn test_shape_mismatch() {
        let mut session = MatchSession::new();
        let pattern = Formula::negation(meta_formula('𝒜'));
        assert_eq!(
            session.match_formula(&pattern, &sentence('𝐴')),
            Err(MatchError::Mismatch {
                pattern: "∼𝒜".to_string(),
                candidate: "𝐴".to_string(),
            })
        );
    }

    #[test]
    fn test_meta_relation_requires_equal_arity() {
        let mut session = MatchSession::new();
        let meta_relation = Predicate::with_superscript_arity(Letter::new('𝔄').as_meta(), 1);
        let pattern = Formula::Atomic {
            relation: meta_relation.clone(),
            args: vec![Term::Constant(Letter::new('𝒶').as_meta())],
        };
        session
            .match_formula(&pattern, &atomic('𝐹', vec![con('𝑎')]))
            .unwrap();
        assert_eq!(
            session.lookup(&MetaKey::for_predicate(MetaKind::RelationSymbol, &meta_relation)),
            Some(&Bound::Predicate(Predicate::with_superscript_arity(
                Letter::new('𝐹'),
                1
            )))
        );
        assert!(session
            .match_formula(&pattern, &atomic('𝐹', vec![con('𝑎'), con('𝑏')]))
            .is_err());
    }

    #[test]
    fn test_meta_constant_does_not_match_variable() {
        let mut session = MatchSession::new();
        let pattern = Term::Constant(Letter::new('𝒶').as_meta());
        assert!(session.match_term(&pattern, &var('𝑥')).is_err());
        assert!(session.match_term(&pattern, &con('𝑎')).is_ok());
    }

    #[test]
    fn test_concrete_parts_must_be_equal() {
        let mut session = MatchSession::new();
        let pattern = Formula::quantified(
            Quantifier::Universal,
            Letter::new('𝓍').as_meta(),
            Formula::binary(Connective::Conditional, sentence('𝐴'), meta_formula('𝒜')),
        );
        let candidate = Formula::quantified(
            Quantifier::Universal,
            Letter::new('𝑥'),
            Formula::binary(Connective::Conditional, sentence('𝐴'), sentence('𝐵')),
        );
        session.match_formula(&pattern, &candidate).unwrap();
        assert_eq!(
            session.lookup(&MetaKey::new(MetaKind::Variable, '𝓍')),
            Some(&Bound::Term(var('𝑥')))
        );
        let wrong = Formula::quantified(
            Quantifier::Universal,
            Letter::new('𝑦'),
            Formula::binary(Connective::Conditional, sentence('𝐶'), sentence('𝐵')),
        );
        session.clear_all();
        assert!(matches!(
            session.match_formula(&pattern, &wrong),
            Err(MatchError::Mismatch { .. })
        ));
    }
}
