//! Language definitions
//!
//!     A [`Language`] is the declarative record of one logical language: its bracket
//!     glyphs, operator glyphs, vocabulary ranges, meta-symbol alphabets, subscript and
//!     superscript policy, and the unabbreviation template for each construct kind.
//!
//!     Languages are immutable once built and are validated when they are built, so a
//!     malformed alphabet slice is a configuration error and never shows up at parse
//!     time. They are described in TOML (see `defaults/languages.default.toml`) and
//!     collected into a [`LanguageRegistry`], an explicit context object handed to the
//!     code that needs it.

pub mod definition;
pub mod registry;
pub mod rendering;
pub mod spec;
pub mod templates;

pub use definition::{Language, MetaVocabulary, SubscriptPolicy, Vocabulary};
pub use registry::{LanguageRegistry, Loader};
pub use spec::{LanguageSpec, RangeSpec};
pub use templates::{Marker, Template, TemplatePiece};
