//! Serialized form of language definitions
//!
//! These records mirror the TOML layout one to one and carry no validation; see
//! [`Language::from_spec`](super::Language::from_spec) for that.

use crate::logic::alphabets::Alphabet;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One language as written in configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LanguageSpec {
    pub name: String,
    /// Bracket pairs, each written as a two-glyph string such as `"()"`
    pub brackets: Vec<String>,
    pub angle_brackets: Option<String>,
    pub comma: Option<String>,
    pub drop_outer_brackets: bool,
    pub require_superscript: bool,
    pub operators: OperatorsSpec,
    pub vocabulary: VocabularySpec,
    pub meta: MetaSpec,
    pub subscripts: SubscriptsSpec,
    /// Template source per construct kind, keyed by the kind's snake_case name
    pub templates: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OperatorsSpec {
    pub negation: Option<String>,
    pub conditional: Option<String>,
    pub biconditional: Option<String>,
    pub conjunction: Option<String>,
    pub disjunction: Option<String>,
    pub nand: Option<String>,
    pub nor: Option<String>,
    pub universal: Option<String>,
    pub existential: Option<String>,
}

/// A slice of a named alphabet; omitted bounds extend to the alphabet's ends
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RangeSpec {
    pub alphabet: Alphabet,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VocabularySpec {
    pub variables: Vec<RangeSpec>,
    pub constants: Vec<RangeSpec>,
    pub sentence_letters: Vec<RangeSpec>,
    pub relations: Vec<RangeSpec>,
    pub functions: Vec<RangeSpec>,
    /// Fixed-arity symbols, one glyph per entry
    pub one_place_relations: Vec<String>,
    pub two_place_relations: Vec<String>,
    pub one_place_functions: Vec<String>,
    pub two_place_functions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetaSpec {
    pub variables: Vec<RangeSpec>,
    pub constants: Vec<RangeSpec>,
    pub sentence_letters: Vec<RangeSpec>,
    pub formulas: Vec<RangeSpec>,
    pub relations: Vec<RangeSpec>,
    pub functions: Vec<RangeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubscriptsSpec {
    pub variables: bool,
    pub constants: bool,
    pub sentence_letters: bool,
    pub relations: bool,
    pub functions: bool,
}

impl Default for SubscriptsSpec {
    fn default() -> Self {
        SubscriptsSpec {
            variables: true,
            constants: true,
            sentence_letters: true,
            relations: true,
            functions: true,
        }
    }
}
