//! The validated language record

use super::spec::{LanguageSpec, RangeSpec};
use super::templates::Template;
use crate::logic::ast::{BracketKind, ConstructKind, Operator, Symbol};
use crate::logic::error::LanguageError;
use crate::logic::logging::targets;
use std::collections::{BTreeMap, HashMap};

/// Glyphs of the object-language vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub variables: Vec<char>,
    pub constants: Vec<char>,
    pub sentence_letters: Vec<char>,
    /// Extensible relation symbols, arity from a superscript or the following terms
    pub relations: Vec<char>,
    /// Extensible function symbols, arity from a superscript or the following terms
    pub functions: Vec<char>,
    pub one_place_relations: Vec<char>,
    pub two_place_relations: Vec<char>,
    pub one_place_functions: Vec<char>,
    pub two_place_functions: Vec<char>,
}

/// Glyphs reserved for meta-symbols
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaVocabulary {
    pub variables: Vec<char>,
    pub constants: Vec<char>,
    pub sentence_letters: Vec<char>,
    pub formulas: Vec<char>,
    pub relations: Vec<char>,
    pub functions: Vec<char>,
}

/// Which categories may carry a subscript index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptPolicy {
    pub variables: bool,
    pub constants: bool,
    pub sentence_letters: bool,
    pub relations: bool,
    pub functions: bool,
}

/// A validated, immutable language definition
#[derive(Debug, Clone)]
pub struct Language {
    name: String,
    brackets: Vec<(char, char)>,
    angle_brackets: Option<(char, char)>,
    comma: Option<char>,
    operators: BTreeMap<Operator, char>,
    vocabulary: Vocabulary,
    meta: MetaVocabulary,
    subscripts: SubscriptPolicy,
    require_superscript: bool,
    drop_outer_brackets: bool,
    templates: BTreeMap<ConstructKind, Template>,
}

impl Language {
    /// Validates a configuration record and builds the language
    pub fn from_spec(spec: &LanguageSpec) -> Result<Language, LanguageError> {
        let name = spec.name.clone();
        let checker = SpecChecker { language: &name };

        if spec.brackets.len() > 3 {
            return Err(LanguageError::TooManyBrackets {
                language: name,
                found: spec.brackets.len(),
            });
        }
        let brackets = spec
            .brackets
            .iter()
            .map(|pair| checker.pair("brackets", pair))
            .collect::<Result<Vec<_>, _>>()?;
        let angle_brackets = spec
            .angle_brackets
            .as_deref()
            .map(|pair| checker.pair("angle_brackets", pair))
            .transpose()?;
        let comma = spec
            .comma
            .as_deref()
            .map(|text| checker.glyph("comma", text))
            .transpose()?;

        let ops = &spec.operators;
        let mut operators = BTreeMap::new();
        for (op, glyph) in [
            (Operator::Negation, &ops.negation),
            (Operator::Conditional, &ops.conditional),
            (Operator::Biconditional, &ops.biconditional),
            (Operator::Conjunction, &ops.conjunction),
            (Operator::Disjunction, &ops.disjunction),
            (Operator::Nand, &ops.nand),
            (Operator::Nor, &ops.nor),
            (Operator::Universal, &ops.universal),
            (Operator::Existential, &ops.existential),
        ] {
            if let Some(text) = glyph {
                operators.insert(op, checker.glyph(op.name(), text)?);
            }
        }

        let voc = &spec.vocabulary;
        let vocabulary = Vocabulary {
            variables: checker.ranges(&voc.variables)?,
            constants: checker.ranges(&voc.constants)?,
            sentence_letters: checker.ranges(&voc.sentence_letters)?,
            relations: checker.ranges(&voc.relations)?,
            functions: checker.ranges(&voc.functions)?,
            one_place_relations: checker.glyphs("one_place_relations", &voc.one_place_relations)?,
            two_place_relations: checker.glyphs("two_place_relations", &voc.two_place_relations)?,
            one_place_functions: checker.glyphs("one_place_functions", &voc.one_place_functions)?,
            two_place_functions: checker.glyphs("two_place_functions", &voc.two_place_functions)?,
        };

        let meta = MetaVocabulary {
            variables: checker.ranges(&spec.meta.variables)?,
            constants: checker.ranges(&spec.meta.constants)?,
            sentence_letters: checker.ranges(&spec.meta.sentence_letters)?,
            formulas: checker.ranges(&spec.meta.formulas)?,
            relations: checker.ranges(&spec.meta.relations)?,
            functions: checker.ranges(&spec.meta.functions)?,
        };

        let subscripts = SubscriptPolicy {
            variables: spec.subscripts.variables,
            constants: spec.subscripts.constants,
            sentence_letters: spec.subscripts.sentence_letters,
            relations: spec.subscripts.relations,
            functions: spec.subscripts.functions,
        };

        let first_brackets = brackets.first().copied().unwrap_or(('(', ')'));
        let mut templates: BTreeMap<ConstructKind, Template> = ConstructKind::ALL
            .iter()
            .map(|&kind| (kind, Template::identity(kind, first_brackets, comma.is_some())))
            .collect();
        for (key, source) in &spec.templates {
            let kind =
                ConstructKind::from_key(key).ok_or_else(|| LanguageError::UnknownTemplate {
                    language: name.clone(),
                    key: key.clone(),
                })?;
            templates.insert(kind, Template::parse(source));
        }

        let language = Language {
            name,
            brackets,
            angle_brackets,
            comma,
            operators,
            vocabulary,
            meta,
            subscripts,
            require_superscript: spec.require_superscript,
            drop_outer_brackets: spec.drop_outer_brackets,
            templates,
        };
        language.check_fixed_glyphs()?;

        log::debug!(target: targets::CONFIG, "Built language {}", language.name);
        Ok(language)
    }

    /// Rejects a glyph configured for two different fixed symbols
    fn check_fixed_glyphs(&self) -> Result<(), LanguageError> {
        let mut seen: HashMap<char, &'static str> = HashMap::new();
        let mut fixed: Vec<(char, &'static str)> = Vec::new();
        for (open, close) in &self.brackets {
            fixed.push((*open, "an opening bracket"));
            fixed.push((*close, "a closing bracket"));
        }
        if let Some((open, close)) = self.angle_brackets {
            fixed.push((open, "an opening angle bracket"));
            fixed.push((close, "a closing angle bracket"));
        }
        if let Some(comma) = self.comma {
            fixed.push((comma, "the comma"));
        }
        for (op, glyph) in &self.operators {
            fixed.push((*glyph, op.name()));
        }
        let v = &self.vocabulary;
        for (glyphs, role) in [
            (&v.one_place_relations, "a one-place relation"),
            (&v.two_place_relations, "a two-place relation"),
            (&v.one_place_functions, "a one-place function"),
            (&v.two_place_functions, "a two-place function"),
        ] {
            fixed.extend(glyphs.iter().map(|&g| (g, role)));
        }

        for (glyph, role) in fixed {
            if let Some(first) = seen.insert(glyph, role) {
                return Err(LanguageError::DuplicateGlyph {
                    language: self.name.clone(),
                    glyph,
                    first,
                    second: role,
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brackets(&self) -> &[(char, char)] {
        &self.brackets
    }

    /// The first bracket pair, used when rendering; `()` for bracketless languages
    pub fn primary_brackets(&self) -> (char, char) {
        self.brackets.first().copied().unwrap_or(('(', ')'))
    }

    pub fn angle_brackets(&self) -> Option<(char, char)> {
        self.angle_brackets
    }

    pub fn comma(&self) -> Option<char> {
        self.comma
    }

    pub fn operator_glyph(&self, op: Operator) -> Option<char> {
        self.operators.get(&op).copied()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn meta(&self) -> &MetaVocabulary {
        &self.meta
    }

    pub fn subscripts(&self) -> SubscriptPolicy {
        self.subscripts
    }

    pub fn require_superscript(&self) -> bool {
        self.require_superscript
    }

    pub fn drop_outer_brackets(&self) -> bool {
        self.drop_outer_brackets
    }

    pub fn template(&self, kind: ConstructKind) -> &Template {
        // every kind is filled in by from_spec
        &self.templates[&kind]
    }

    /// The single-glyph symbol `glyph` stands for, if any
    pub fn fixed_symbol(&self, glyph: char) -> Option<Symbol> {
        for (kind, (open, close)) in BracketKind::ALL.iter().zip(&self.brackets) {
            if glyph == *open {
                return Some(Symbol::OpenBracket(*kind));
            }
            if glyph == *close {
                return Some(Symbol::CloseBracket(*kind));
            }
        }
        if let Some((open, close)) = self.angle_brackets {
            if glyph == open {
                return Some(Symbol::OpenAngle);
            }
            if glyph == close {
                return Some(Symbol::CloseAngle);
            }
        }
        if self.comma == Some(glyph) {
            return Some(Symbol::Comma);
        }
        self.operators
            .iter()
            .find(|(_, g)| **g == glyph)
            .map(|(op, _)| Symbol::Operator(*op))
    }

    pub fn fixed_relation_arity(&self, glyph: char) -> Option<usize> {
        fixed_arity(
            glyph,
            &self.vocabulary.one_place_relations,
            &self.vocabulary.two_place_relations,
        )
    }

    pub fn fixed_function_arity(&self, glyph: char) -> Option<usize> {
        fixed_arity(
            glyph,
            &self.vocabulary.one_place_functions,
            &self.vocabulary.two_place_functions,
        )
    }

    /// True for glyphs that can begin a term
    pub fn starts_term(&self, glyph: char) -> bool {
        let v = &self.vocabulary;
        let m = &self.meta;
        [
            &v.variables,
            &v.constants,
            &v.functions,
            &v.one_place_functions,
            &v.two_place_functions,
            &m.variables,
            &m.constants,
            &m.functions,
        ]
        .iter()
        .any(|glyphs| glyphs.contains(&glyph))
    }

    /// True for glyphs that open a delimited argument list
    pub fn opens_argument_list(&self, glyph: char) -> bool {
        self.comma.is_some()
            && (self.brackets.iter().any(|(open, _)| *open == glyph)
                || self.angle_brackets.is_some_and(|(open, _)| open == glyph))
    }
}

fn fixed_arity(glyph: char, one_place: &[char], two_place: &[char]) -> Option<usize> {
    if one_place.contains(&glyph) {
        Some(1)
    } else if two_place.contains(&glyph) {
        Some(2)
    } else {
        None
    }
}

struct SpecChecker<'a> {
    language: &'a str,
}

impl SpecChecker<'_> {
    fn glyph(&self, field: &'static str, text: &str) -> Result<char, LanguageError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(glyph), None) => Ok(glyph),
            _ => Err(self.invalid(field, text)),
        }
    }

    fn pair(&self, field: &'static str, text: &str) -> Result<(char, char), LanguageError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(open), Some(close), None) => Ok((open, close)),
            _ => Err(self.invalid(field, text)),
        }
    }

    fn glyphs(&self, field: &'static str, texts: &[String]) -> Result<Vec<char>, LanguageError> {
        texts.iter().map(|text| self.glyph(field, text)).collect()
    }

    fn ranges(&self, ranges: &[RangeSpec]) -> Result<Vec<char>, LanguageError> {
        let mut glyphs = Vec::new();
        for range in ranges {
            let all = range.alphabet.glyphs();
            let from = match &range.from {
                Some(text) => self.glyph("from", text)?,
                None => all.first().copied().unwrap_or_default(),
            };
            let to = match &range.to {
                Some(text) => self.glyph("to", text)?,
                None => all.last().copied().unwrap_or_default(),
            };
            let slice =
                range
                    .alphabet
                    .range(from, to)
                    .map_err(|source| LanguageError::InvalidRange {
                        language: self.language.to_string(),
                        source,
                    })?;
            for glyph in slice {
                if !glyphs.contains(&glyph) {
                    glyphs.push(glyph);
                }
            }
        }
        Ok(glyphs)
    }

    fn invalid(&self, field: &'static str, text: &str) -> LanguageError {
        LanguageError::InvalidGlyph {
            language: self.language.to_string(),
            field,
            text: text.to_string(),
        }
    }
}
