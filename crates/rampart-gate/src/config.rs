//! Gate settings loaded from the server's configuration file.
//!
//! Settings are read once at server startup; the `enabled` toggle in
//! particular is never re-checked afterwards, so flipping it requires a
//! restart. Hosts either embed [`GateSettings`] in their own config tree
//! or load a standalone YAML document.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when loading gate settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Settings controlling whether and how the build gate runs.
///
/// All fields have defaults, so an absent or empty document yields a
/// disabled gate with standard paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GateSettings {
    /// Whether the gate registers for build events at startup.
    ///
    /// Checked exactly once when the host calls
    /// [`install`](crate::host::install); a disabled gate stays out of
    /// the build pipeline for the process lifetime.
    #[serde(default)]
    pub enabled: bool,

    /// Path to the requirement table document.
    #[serde(default = "default_requirements_path")]
    pub requirements_path: PathBuf,

    /// Optional message catalog overlaid on the built-in English
    /// templates.
    #[serde(default)]
    pub messages_path: Option<PathBuf>,

    /// Locale used when a player's preferred language has no template.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl GateSettings {
    /// Load settings from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_yml::from_str(&contents)?;
        Ok(settings)
    }

    /// Parse settings from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_yml::from_str(yaml)?;
        Ok(settings)
    }
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            requirements_path: default_requirements_path(),
            messages_path: None,
            default_locale: default_locale(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_requirements_path() -> PathBuf {
    PathBuf::from("config/requirements.yml")
}

fn default_locale() -> String {
    "en".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_keep_the_gate_off() {
        let settings = GateSettings::default();
        assert!(!settings.enabled);
        assert_eq!(
            settings.requirements_path,
            Path::new("config/requirements.yml"),
        );
        assert!(settings.messages_path.is_none());
        assert_eq!(settings.default_locale, "en");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
enabled: true
requirements_path: "custom/levels.yml"
messages_path: "custom/messages.yml"
default_locale: "ko"
"#;

        let settings = GateSettings::parse(yaml);
        assert!(settings.is_ok());
        let settings = settings.ok().unwrap_or_default();

        assert!(settings.enabled);
        assert_eq!(settings.requirements_path, Path::new("custom/levels.yml"));
        assert_eq!(
            settings.messages_path.as_deref(),
            Some(Path::new("custom/messages.yml")),
        );
        assert_eq!(settings.default_locale, "ko");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "enabled: true\n";
        let settings = GateSettings::parse(yaml);
        assert!(settings.is_ok());
        let settings = settings.ok().unwrap_or_default();

        // The toggle is overridden
        assert!(settings.enabled);
        // Everything else uses defaults
        assert_eq!(settings.default_locale, "en");
        assert!(settings.messages_path.is_none());
    }

    #[test]
    fn parse_empty_yaml() {
        let yaml = "";
        let settings = GateSettings::parse(yaml);
        assert!(settings.is_ok());
        assert!(!settings.ok().unwrap_or_default().enabled);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = GateSettings::from_file(Path::new("/nonexistent/gate.yml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_bundled_settings_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("gate.yml");
        if path.exists() {
            let settings = GateSettings::from_file(&path);
            assert!(
                settings.is_ok(),
                "Failed to load bundled settings: {settings:?}"
            );
        }
    }
}
