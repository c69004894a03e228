//! Expression trees
//!
//!     The classifier produces [`Symbol`]s; the builder folds them into [`Term`]s and
//!     [`Formula`]s. Both trees are closed sum types, so every consumer matches
//!     exhaustively and a new kind of node is a compile-time change.
//!
//!     Levels: leaves (variables, constants, sentence letters, formula symbols) have
//!     level 0, every other node has level one more than its highest child. An atomic
//!     formula `𝐴²𝑎𝑏` therefore has level 1, the level of its argument terms plus one.
//!
//!     [`NodeRef`] gives a uniform, borrowed view over both trees for the traversals used
//!     by the queries and the unabbreviator.

pub mod formula;
pub mod node;
pub mod symbol;
pub mod term;

pub use formula::{Connective, Formula, Quantifier};
pub use node::{ConstructKind, Expression, NodeRef};
pub use symbol::{Arity, BracketKind, Letter, Operator, Predicate, Symbol, SymbolStream};
pub use term::Term;
