//! Persisted player profile data as read by the gate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The record the persistence layer holds for one player identity.
///
/// The gate only ever reads `level` and `locale`; everything else the host
/// server persists alongside them travels in `attributes` untouched, so a
/// store round-trip never sheds fields the gate does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Experience level granted by the host server's progression system.
    #[serde(default)]
    pub level: u32,
    /// Preferred language tag (e.g. `"en"`, `"ko"`, `"pt-BR"`).
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Further host-defined fields, opaque to the gate.
    #[serde(default, flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl PlayerProfile {
    /// Create a profile with the given level and locale and no extra fields.
    pub fn new(level: u32, locale: impl Into<String>) -> Self {
        Self {
            level,
            locale: locale.into(),
            attributes: BTreeMap::new(),
        }
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new(0, default_locale())
    }
}

fn default_locale() -> String {
    String::from("en")
}
