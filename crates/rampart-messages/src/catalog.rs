//! Localized message catalog with positional template parameters.
//!
//! Catalog documents are flat YAML, locale to key to template:
//!
//! ```yaml
//! en:
//!   build.level-required: "Building {0} requires level {1}."
//! ko:
//!   build.level-required: "{0} 건설에는 레벨 {1} 이상이 필요합니다."
//! ```
//!
//! Templates use positional `{0}`, `{1}`, ... placeholders. Resolution
//! falls back in order: exact locale, primary language subtag (`pt-BR`
//! to `pt`), the configured default locale, then the built-in English
//! templates, so a player always gets readable text even when a server
//! ships no catalog files at all.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Well-known message key constants.
///
/// Keys are dotted paths grouped by the feature that sends them. Catalog
/// files may define any further keys the host wants to route through the
/// same fallback logic.
pub mod keys {
    /// Sent when a build is denied because the player's level is below the
    /// structure's requirement. Parameters: `{0}` structure name, `{1}`
    /// required level.
    pub const BUILD_LEVEL_REQUIRED: &str = "build.level-required";
}

/// Locale whose templates are compiled into the crate.
const BUILTIN_LOCALE: &str = "en";

/// Errors that can occur when loading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse catalog YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for CatalogError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Locale-keyed message templates with positional parameters.
///
/// A catalog always starts from the built-in English templates; loaded
/// documents overlay them, so partial translations are fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    default_locale: String,
    templates: BTreeMap<String, BTreeMap<String, String>>,
}

impl MessageCatalog {
    /// Catalog containing only the built-in English templates, with
    /// English as the default locale.
    pub fn builtin() -> Self {
        Self {
            default_locale: BUILTIN_LOCALE.to_owned(),
            templates: builtin_templates(),
        }
    }

    /// Set the locale used when a player's preferred language resolves
    /// no template.
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Load a catalog from a YAML file, overlaid on the built-ins.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or
    /// [`CatalogError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin();
        catalog.merge_file(path)?;
        Ok(catalog)
    }

    /// Read a YAML catalog document and merge it over this catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or
    /// [`CatalogError::Yaml`] if the content is not valid YAML.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        self.merge_yaml(&contents)
    }

    /// Parse a YAML catalog document and merge it over this catalog.
    ///
    /// Locales merge per key: a document that translates only some keys
    /// leaves the rest resolving through the fallback chain.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Yaml`] if the string is not valid YAML.
    pub fn merge_yaml(&mut self, yaml: &str) -> Result<(), CatalogError> {
        let parsed: BTreeMap<String, BTreeMap<String, String>> = serde_yml::from_str(yaml)?;
        for (locale, entries) in parsed {
            let target = self.templates.entry(locale).or_default();
            for (key, template) in entries {
                target.insert(key, template);
            }
        }
        Ok(())
    }

    /// Insert or replace a single template.
    pub fn set_template(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.templates
            .entry(locale.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Resolve the template for `key` in the best locale available.
    ///
    /// Fallback order: exact locale, primary language subtag, the default
    /// locale, built-in English. Returns `None` only when the key exists
    /// nowhere.
    pub fn template(&self, locale: &str, key: &str) -> Option<&str> {
        self.lookup(locale, key)
            .or_else(|| {
                primary_subtag(locale).and_then(|primary| self.lookup(primary, key))
            })
            .or_else(|| self.lookup(&self.default_locale, key))
            .or_else(|| self.lookup(BUILTIN_LOCALE, key))
    }

    /// Resolve `key` for `locale` and substitute `args` into the
    /// positional placeholders.
    pub fn format(&self, locale: &str, key: &str, args: &[&dyn fmt::Display]) -> Option<String> {
        self.template(locale, key)
            .map(|template| apply_args(template, args))
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.templates
            .get(locale)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Substitute `{0}`, `{1}`, ... with the rendered arguments.
///
/// Placeholders with no matching argument stay verbatim; a repeated
/// placeholder is replaced at every occurrence.
fn apply_args(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut rendered = template.to_owned();
    for (index, arg) in args.iter().enumerate() {
        let placeholder = format!("{{{index}}}");
        if rendered.contains(&placeholder) {
            rendered = rendered.replace(&placeholder, &arg.to_string());
        }
    }
    rendered
}

/// The language subtag before the first `-` or `_`, if the locale has one.
fn primary_subtag(locale: &str) -> Option<&str> {
    locale
        .split(['-', '_'])
        .next()
        .filter(|primary| !primary.is_empty() && *primary != locale)
}

fn builtin_templates() -> BTreeMap<String, BTreeMap<String, String>> {
    let mut english = BTreeMap::new();
    english.insert(
        keys::BUILD_LEVEL_REQUIRED.to_owned(),
        "Building {0} requires level {1}.".to_owned(),
    );

    let mut templates = BTreeMap::new();
    templates.insert(BUILTIN_LOCALE.to_owned(), english);
    templates
}
