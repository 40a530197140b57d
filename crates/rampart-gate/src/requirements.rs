//! Minimum-level requirements per structure type.
//!
//! The table is a flat YAML mapping from structure-type name to the level
//! required to place it:
//!
//! ```yaml
//! copper-wall: 5
//! ripple: 10
//! foreshadow: 60
//! ```
//!
//! Structure types absent from the table are unrestricted. A missing or
//! unreadable document yields an empty table through
//! [`RequirementTable::load_or_empty`], so a broken config file never
//! blocks construction server-wide.

use std::collections::BTreeMap;
use std::path::Path;

use rampart_types::StructureName;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ConfigError;

/// Structure-type names mapped to the minimum level needed to build them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementTable {
    levels: BTreeMap<StructureName, u32>,
}

impl RequirementTable {
    /// Create an empty table. No structure is restricted.
    pub const fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Load a table from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not a flat name-to-level
    /// mapping.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a table from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not a flat
    /// name-to-level mapping.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let levels: BTreeMap<StructureName, u32> = serde_yml::from_str(yaml)?;
        Ok(Self { levels })
    }

    /// Load a table, falling back to an empty one if the file is missing
    /// or malformed.
    ///
    /// The failure is logged here, once. An empty table leaves every
    /// structure unrestricted until the next refresh.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(table) => table,
            Err(error) => {
                warn!(
                    path = %path.display(),
                    %error,
                    "requirement table unavailable, gating nothing",
                );
                Self::new()
            }
        }
    }

    /// The configured minimum level for `structure`, if it has one.
    pub fn required_level(&self, structure: &StructureName) -> Option<u32> {
        self.levels.get(structure).copied()
    }

    /// Insert or replace the requirement for one structure type.
    pub fn insert(&mut self, structure: StructureName, level: u32) {
        self.levels.insert(structure, level);
    }

    /// Number of restricted structure types.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether no structure type is restricted.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(StructureName, u32)> for RequirementTable {
    fn from_iter<I: IntoIterator<Item = (StructureName, u32)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}
