//! Structure-type names as carried by build events and requirement tables.

use serde::{Deserialize, Serialize};

/// Name the engine reports when a build event points at an empty tile
/// rather than a real structure type.
///
/// Events carrying this name are anomalies: there is nothing to gate,
/// revert, or charge for. They are counted and otherwise left alone.
pub const AIR: &str = "air";

/// Name of a placeable structure type (e.g. `"wall"`, `"pulse-turret"`).
///
/// Structure names are the keys of the requirement table, so they compare
/// and order as plain strings. The gate never interprets a name beyond
/// checking for the [`AIR`] marker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureName(String);

impl StructureName {
    /// Wrap a raw structure-type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the engine's empty-tile marker.
    pub fn is_air(&self) -> bool {
        self.0 == AIR
    }
}

impl core::fmt::Display for StructureName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StructureName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for StructureName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_marker_is_recognized() {
        assert!(StructureName::from(AIR).is_air());
        assert!(!StructureName::from("wall").is_air());
        // Case-sensitive: the engine reports the marker in lowercase only.
        assert!(!StructureName::from("Air").is_air());
    }

    #[test]
    fn serializes_as_bare_string() {
        let name = StructureName::from("duo-turret");
        let json = serde_json::to_string(&name).ok();
        assert_eq!(json.as_deref(), Some("\"duo-turret\""));
    }

    #[test]
    fn display_matches_inner_name() {
        let name = StructureName::from("mender");
        assert_eq!(name.to_string(), "mender");
        assert_eq!(name.as_str(), "mender");
    }
}
