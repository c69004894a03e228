//! Term/formula builder
//!
//!     Recursive descent over a classified symbol stream. The grammar, for a language L:
//!
//!         root     := term | formula | formula BINOP formula     (last form: drop_outer_brackets)
//!         formula  := NEG formula
//!                   | QUANT VARIABLE formula
//!                   | OPEN(k) formula BINOP formula CLOSE(k)
//!                   | SENTENCE-LETTER | FORMULA-SYMBOL
//!                   | RELATION args
//!         term     := VARIABLE | CONSTANT | FUNCTION args
//!         args     := term{arity}                                 (juxtaposed)
//!                   | OPEN(k) term (COMMA term)* CLOSE(k)          (comma languages)
//!                   | ANGLE-OPEN term (COMMA term)* ANGLE-CLOSE    (comma languages)
//!
//!     A closing bracket must be of the same kind as the bracket it closes. Symbols with
//!     an inferred arity take every term that follows them, left to right, so `𝐹𝑓𝑎𝑏`
//!     reads as 𝐹 applied to 𝑓𝑎𝑏 when both arities are inferred.
//!
//!     The whole stream has to reduce to a single term or formula; anything left over is
//!     [`ParseError::Incomplete`], and an empty stream is [`ParseError::Empty`].
//!
//!     Terms and formulas nest at most [`MAX_DEPTH`] deep. Every later stage walks the
//!     tree recursively, so deeper documents are rejected with [`ParseError::TooDeep`].

use crate::logic::ast::{
    Arity, BracketKind, Connective, Expression, Formula, Letter, Operator, Predicate,
    Quantifier, Symbol, Term,
};
use crate::logic::classifying::{classify, ensure_classified};
use crate::logic::error::{ParseError, ParseResult};
use crate::logic::language::Language;
use crate::logic::logging::targets;
use crate::logic::token::Element;
use std::ops::Range;

/// Deepest nesting of terms and formulas the builder accepts
pub const MAX_DEPTH: usize = 256;

/// Builds the expression a classified stream stands for
pub fn build(
    language: &Language,
    symbols: &[(Symbol, Range<usize>)],
) -> ParseResult<Expression> {
    if symbols.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut parser = Parser {
        language,
        symbols,
        pos: 0,
        depth: 0,
    };
    let expression = parser.root()?;
    if let Some((symbol, span)) = parser.peek_spanned() {
        return Err(ParseError::Incomplete {
            position: span.start,
            found: symbol.describe(),
        });
    }
    log::trace!(
        target: targets::BUILD,
        "Built {expression} (level {})",
        expression.level()
    );
    Ok(expression)
}

/// Classifies and builds a sequence of elements
pub fn parse_elements(language: &Language, elements: Vec<Element>) -> ParseResult<Expression> {
    let symbols = ensure_classified(classify(language, elements))?;
    build(language, &symbols)
}

struct Parser<'a> {
    language: &'a Language,
    symbols: &'a [(Symbol, Range<usize>)],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Symbol> {
        self.symbols.get(self.pos).map(|(symbol, _)| symbol)
    }

    fn peek_spanned(&self) -> Option<&'a (Symbol, Range<usize>)> {
        self.symbols.get(self.pos)
    }

    fn next(&mut self, expected: &'static str) -> ParseResult<(&'a Symbol, usize)> {
        let (symbol, span) = self
            .symbols
            .get(self.pos)
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok((symbol, span.start))
    }

    fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            let position = match self.peek_spanned() {
                Some((_, span)) => span.start,
                None => self.symbols.last().map_or(0, |(_, span)| span.end),
            };
            return Err(ParseError::TooDeep {
                position,
                limit: MAX_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn unexpected(symbol: &Symbol, position: usize, expected: &'static str) -> ParseError {
        ParseError::Unexpected {
            position,
            found: symbol.describe(),
            expected,
        }
    }

    fn root(&mut self) -> ParseResult<Expression> {
        if self.peek().is_some_and(Symbol::starts_term) {
            return Ok(Expression::Term(self.term()?));
        }
        let left = self.formula()?;
        if self.language.drop_outer_brackets() {
            if let Some(Symbol::Operator(op)) = self.peek() {
                if let Some(connective) = Connective::from_operator(*op) {
                    self.pos += 1;
                    let right = self.formula()?;
                    return Ok(Expression::Formula(Formula::binary(connective, left, right)));
                }
            }
        }
        Ok(Expression::Formula(left))
    }

    fn formula(&mut self) -> ParseResult<Formula> {
        self.descend()?;
        let formula = self.formula_body();
        self.depth -= 1;
        formula
    }

    fn formula_body(&mut self) -> ParseResult<Formula> {
        let (symbol, position) = self.next("a formula")?;
        match symbol {
            Symbol::Operator(Operator::Negation) => Ok(Formula::negation(self.formula()?)),
            Symbol::Operator(op) => match Quantifier::from_operator(*op) {
                Some(quantifier) => {
                    let variable = self.bound_variable()?;
                    let body = self.formula()?;
                    Ok(Formula::quantified(quantifier, variable, body))
                }
                None => Err(Self::unexpected(symbol, position, "a formula")),
            },
            Symbol::OpenBracket(kind) => self.bracketed(*kind),
            Symbol::SentenceLetter(letter) => Ok(Formula::Sentence(letter.clone())),
            Symbol::FormulaSymbol(letter) => Ok(Formula::Meta(letter.clone())),
            Symbol::Relation {
                letter,
                superscript,
                arity,
            } => {
                let args = self.arguments(symbol, position, *arity)?;
                Ok(Formula::Atomic {
                    relation: predicate(letter, superscript, args.len()),
                    args,
                })
            }
            other => Err(Self::unexpected(other, position, "a formula")),
        }
    }

    fn bound_variable(&mut self) -> ParseResult<Letter> {
        let (symbol, position) = self.next("a variable")?;
        match symbol {
            Symbol::Variable(letter) => Ok(letter.clone()),
            other => Err(Self::unexpected(other, position, "a variable")),
        }
    }

    /// The rest of `(F op F)` after the opening bracket
    fn bracketed(&mut self, kind: BracketKind) -> ParseResult<Formula> {
        let left = self.formula()?;
        let (symbol, position) = self.next("a binary connective")?;
        let connective = match symbol {
            Symbol::Operator(op) => Connective::from_operator(*op),
            _ => None,
        }
        .ok_or_else(|| Self::unexpected(symbol, position, "a binary connective"))?;
        let right = self.formula()?;
        match self.next("a closing bracket")? {
            (Symbol::CloseBracket(closing), _) if *closing == kind => {
                Ok(Formula::binary(connective, left, right))
            }
            (other, position) => Err(Self::unexpected(
                other,
                position,
                "a matching closing bracket",
            )),
        }
    }

    fn term(&mut self) -> ParseResult<Term> {
        self.descend()?;
        let term = self.term_body();
        self.depth -= 1;
        term
    }

    fn term_body(&mut self) -> ParseResult<Term> {
        let (symbol, position) = self.next("a term")?;
        match symbol {
            Symbol::Variable(letter) => Ok(Term::Variable(letter.clone())),
            Symbol::Constant(letter) => Ok(Term::Constant(letter.clone())),
            Symbol::Function {
                letter,
                superscript,
                arity,
            } => {
                let args = self.arguments(symbol, position, *arity)?;
                Ok(Term::Application {
                    function: predicate(letter, superscript, args.len()),
                    args,
                })
            }
            other => Err(Self::unexpected(other, position, "a term")),
        }
    }

    fn arguments(
        &mut self,
        owner: &Symbol,
        position: usize,
        arity: Arity,
    ) -> ParseResult<Vec<Term>> {
        let delimited = self.language.comma().is_some()
            && matches!(self.peek(), Some(Symbol::OpenBracket(_) | Symbol::OpenAngle));
        let args = if delimited {
            self.delimited_arguments()?
        } else {
            self.juxtaposed_arguments(arity)?
        };
        let found = args.len();
        let expected = match arity {
            Arity::Fixed(n) => n,
            Arity::Inferred => found.max(1),
        };
        if found != expected {
            return Err(ParseError::ArityMismatch {
                position,
                symbol: owner.describe(),
                expected,
                found,
            });
        }
        Ok(args)
    }

    fn juxtaposed_arguments(&mut self, arity: Arity) -> ParseResult<Vec<Term>> {
        let limit = match arity {
            Arity::Fixed(n) => n,
            Arity::Inferred => usize::MAX,
        };
        let mut args = Vec::new();
        while args.len() < limit && self.peek().is_some_and(Symbol::starts_term) {
            args.push(self.term()?);
        }
        Ok(args)
    }

    fn delimited_arguments(&mut self) -> ParseResult<Vec<Term>> {
        let (open, _) = self.next("an argument list")?;
        let mut args = vec![self.term()?];
        loop {
            let (symbol, position) = self.next("a comma or closing bracket")?;
            match (open, symbol) {
                (_, Symbol::Comma) => args.push(self.term()?),
                (Symbol::OpenBracket(kind), Symbol::CloseBracket(closing)) if kind == closing => {
                    return Ok(args)
                }
                (Symbol::OpenAngle, Symbol::CloseAngle) => return Ok(args),
                (_, other) => {
                    return Err(Self::unexpected(
                        other,
                        position,
                        "a comma or matching closing bracket",
                    ))
                }
            }
        }
    }
}

fn predicate(letter: &Letter, superscript: &Option<String>, arity: usize) -> Predicate {
    Predicate {
        letter: letter.clone(),
        superscript: superscript.clone(),
        arity,
    }
}
