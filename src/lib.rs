//! # symlog
//!
//! A parser, matcher and unabbreviator for symbolic-logic expressions written as
//! decorated rich text.
//!
//! File Layout
//!
//! src/logic
//!   ├── alphabets        Named Unicode alphabets and range queries
//!   ├── language         Language definitions, templates and the registry
//!   ├── token            Elements, decorated documents and the markup form
//!   ├── lexing           Tokenizer: decorated text to elements
//!   ├── classifying      Classifier passes: elements to symbols
//!   ├── building         Term/formula builder: symbols to an expression tree
//!   ├── queries          Subformulas and main operator
//!   ├── matching         Meta-symbol binding and structural matching
//!   ├── unabbreviation   Template driven expansion of defined operators
//!   └── transforms       Composable pipeline stages
//!
//! For the usual entry point see [`ExpressionLoader`](logic::loader::ExpressionLoader).

#![allow(rustdoc::invalid_html_tags)]

pub mod logic;
