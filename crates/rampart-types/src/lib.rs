//! Shared type definitions for the Rampart build gate.
//!
//! This crate is the single source of truth for the types that cross crate
//! boundaries in the Rampart workspace: identifiers, the build-attempt
//! event, gate verdicts, and the persisted player profile.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for players and subscriptions
//! - [`structure`] -- Structure-type names and the empty-tile marker
//! - [`attempt`] -- Build-attempt events and gate verdicts
//! - [`profile`] -- The persisted player record the gate reads

pub mod attempt;
pub mod ids;
pub mod profile;
pub mod structure;

// Re-export all public types at crate root for convenience.
pub use attempt::{BuildAttempt, GateVerdict, TilePos};
pub use ids::{PlayerId, SubscriptionId};
pub use profile::PlayerProfile;
pub use structure::{AIR, StructureName};
