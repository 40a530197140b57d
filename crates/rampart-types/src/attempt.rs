//! Build-attempt events and the verdicts the gate hands back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;
use crate::structure::StructureName;

// ---------------------------------------------------------------------------
// TilePos
// ---------------------------------------------------------------------------

/// Grid coordinate of the tile a build attempt targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TilePos {
    /// Column index, counted from the map's west edge.
    pub x: u16,
    /// Row index, counted from the map's south edge.
    pub y: u16,
}

impl TilePos {
    /// Create a tile position from raw grid coordinates.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for TilePos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// BuildAttempt
// ---------------------------------------------------------------------------

/// One construction or deconstruction attempt reported by the host engine.
///
/// The engine emits these when a player selects a tile to build on, before
/// the structure finishes. Deconstruction attempts carry `teardown = true`
/// and are never gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildAttempt {
    /// The player performing the attempt.
    pub player: PlayerId,
    /// The structure type being placed or removed.
    pub structure: StructureName,
    /// The targeted tile.
    pub position: TilePos,
    /// True when the player is removing a structure rather than placing one.
    pub teardown: bool,
    /// When the engine reported the attempt.
    pub submitted_at: DateTime<Utc>,
}

impl BuildAttempt {
    /// Create a placement attempt timestamped now.
    pub fn placement(player: PlayerId, structure: StructureName, position: TilePos) -> Self {
        Self {
            player,
            structure,
            position,
            teardown: false,
            submitted_at: Utc::now(),
        }
    }

    /// Create a deconstruction attempt timestamped now.
    pub fn deconstruction(player: PlayerId, structure: StructureName, position: TilePos) -> Self {
        Self {
            player,
            structure,
            position,
            teardown: true,
            submitted_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// GateVerdict
// ---------------------------------------------------------------------------

/// Outcome of evaluating one build attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum GateVerdict {
    /// The attempt may proceed unchanged.
    Allowed,
    /// The attempt was blocked: the build has been reverted and the player
    /// notified of the missing requirement.
    Denied {
        /// The configured minimum level the player fell short of.
        required_level: u32,
    },
    /// The event was an empty-tile anomaly; nothing was gated or reverted.
    Ignored,
}

impl GateVerdict {
    /// Whether the attempt was left to proceed (including ignored anomalies,
    /// which the gate never interferes with).
    pub const fn permits_build(self) -> bool {
        !matches!(self, Self::Denied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_is_not_teardown() {
        let attempt = BuildAttempt::placement(
            PlayerId::new(),
            StructureName::from("wall"),
            TilePos::new(3, 7),
        );
        assert!(!attempt.teardown);
        assert_eq!(attempt.position, TilePos::new(3, 7));
    }

    #[test]
    fn deconstruction_is_teardown() {
        let attempt = BuildAttempt::deconstruction(
            PlayerId::new(),
            StructureName::from("wall"),
            TilePos::new(0, 0),
        );
        assert!(attempt.teardown);
    }

    #[test]
    fn verdict_permits_everything_but_denied() {
        assert!(GateVerdict::Allowed.permits_build());
        assert!(GateVerdict::Ignored.permits_build());
        assert!(!GateVerdict::Denied { required_level: 10 }.permits_build());
    }

    #[test]
    fn verdict_serializes_tagged() {
        let json = serde_json::to_string(&GateVerdict::Denied { required_level: 5 }).ok();
        assert_eq!(
            json.as_deref(),
            Some("{\"verdict\":\"denied\",\"required_level\":5}"),
        );
    }

    #[test]
    fn tile_pos_displays_as_pair() {
        assert_eq!(TilePos::new(12, 40).to_string(), "(12, 40)");
    }
}
