//! Language registry and its configuration loader
//!
//! `defaults/languages.default.toml` is embedded into the library so the built-in
//! languages are always available. Callers layer their own files on top of those
//! defaults via [`Loader`]; a file may add languages or override single fields of a
//! built-in one, since languages are keyed tables and keyed tables merge.

use super::definition::Language;
use super::spec::LanguageSpec;
use crate::logic::error::LanguageError;
use crate::logic::logging::targets;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../../defaults/languages.default.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegistrySpec {
    languages: BTreeMap<String, LanguageSpec>,
}

/// Helper for layering language files over the built-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults
    pub fn new() -> Self {
        Self::empty().with_toml_str(DEFAULT_TOML)
    }

    /// Start a loader without the built-in languages
    pub fn empty() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Layer a language file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer TOML held in memory
    pub fn with_toml_str(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Merge all layers, then validate every language
    pub fn build(self) -> Result<LanguageRegistry, LanguageError> {
        let spec: RegistrySpec = self.builder.build()?.try_deserialize()?;
        let mut registry = LanguageRegistry::default();
        for (key, mut language) in spec.languages {
            if language.name.is_empty() {
                language.name = key.clone();
            }
            registry.insert(key, Language::from_spec(&language)?);
        }
        log::debug!(
            target: targets::CONFIG,
            "Loaded {} language(s): {}",
            registry.languages.len(),
            registry.names().join(", ")
        );
        Ok(registry)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The set of languages known to a session
///
/// Languages are found by their configuration key (`lq`) or by display name (`Lq`).
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, Language>,
}

impl LanguageRegistry {
    /// The embedded languages only
    pub fn builtin() -> Result<LanguageRegistry, LanguageError> {
        Loader::new().build()
    }

    pub fn insert(&mut self, key: impl Into<String>, language: Language) {
        self.languages.insert(key.into(), language);
    }

    pub fn get(&self, name: &str) -> Result<&Language, LanguageError> {
        self.languages
            .get(name)
            .or_else(|| self.languages.values().find(|l| l.name() == name))
            .ok_or_else(|| LanguageError::UnknownLanguage(name.to_string()))
    }

    /// Display names, in key order
    pub fn names(&self) -> Vec<&str> {
        self.languages.values().map(Language::name).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ast::{ConstructKind, Operator};

    #[test]
    fn test_loads_builtin_languages() {
        let registry = LanguageRegistry::builtin().expect("defaults to load");
        assert_eq!(registry.names(), vec!["Lq", "Ls"]);
        let lq = registry.get("Lq").unwrap();
        assert!(lq.require_superscript());
        assert!(lq.drop_outer_brackets());
        assert_eq!(lq.operator_glyph(Operator::Universal), Some('∀'));
        assert_eq!(lq.vocabulary().variables.first(), Some(&'𝑖'));
        assert_eq!(lq.vocabulary().constants.last(), Some(&'ℎ'));
    }

    #[test]
    fn test_lookup_by_key_or_name() {
        let registry = LanguageRegistry::builtin().unwrap();
        assert_eq!(registry.get("ls").unwrap().name(), "Ls");
        assert_eq!(registry.get("Ls").unwrap().brackets().len(), 3);
        assert_eq!(
            registry.get("Lp").unwrap_err(),
            LanguageError::UnknownLanguage("Lp".to_string())
        );
    }

    #[test]
    fn test_override_layers_over_defaults() {
        let registry = Loader::new()
            .with_toml_str(
                r#"
                [languages.lq]
                drop_outer_brackets = false
                "#,
            )
            .build()
            .unwrap();
        let lq = registry.get("lq").unwrap();
        assert!(!lq.drop_outer_brackets());
        assert_eq!(lq.operator_glyph(Operator::Negation), Some('∼'));
    }

    #[test]
    fn test_empty_loader_and_default_name() {
        let registry = Loader::empty()
            .with_toml_str(
                r#"
                [languages.tiny]
                brackets = ["()"]
                operators = { negation = "¬", conditional = "⊃" }
                templates = { conditional = "(|0|⊃|1|)" }
                "#,
            )
            .build()
            .unwrap();
        assert_eq!(registry.len(), 1);
        let tiny = registry.get("tiny").unwrap();
        assert_eq!(tiny.name(), "tiny");
        assert_eq!(
            tiny.template(ConstructKind::Conditional).source(),
            "(|0|⊃|1|)"
        );
    }

    #[test]
    fn test_invalid_language_fails_to_load() {
        let result = Loader::empty()
            .with_toml_str(
                r#"
                [languages.bad]
                vocabulary = { variables = [{ alphabet = "italic-lowercase", from = "𝑧", to = "𝑎" }] }
                "#,
            )
            .build();
        assert!(matches!(result, Err(LanguageError::InvalidRange { .. })));
    }

    #[test]
    fn test_missing_required_file() {
        let result = Loader::empty()
            .with_file("/nonexistent/languages.toml")
            .build();
        assert!(matches!(result, Err(LanguageError::Config(_))));
    }
}
