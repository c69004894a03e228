//! Core input types shared across the tokenizer, classifier and tooling.

pub mod core;
pub mod document;
pub mod formatting;
pub mod markup;

pub use core::{Decoration, Element};
pub use document::{DecoratedText, DecorationRange};
pub use formatting::{detokenize, ToMarkup};
pub use markup::parse_markup;
