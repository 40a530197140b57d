//! Level-gated construction checks for the Rampart build gate.
//!
//! This crate ties the workspace together: configuration, the requirement
//! table, the gate itself, and the seams the host engine plugs into.
//!
//! ```text
//! startup                                  per build attempt
//! -------                                  -----------------
//! GateSettings::from_file                  BuildEvents --> LevelGate
//!     |                                        |
//!     +-- enabled? --- no --> done             +-- evaluate against
//!     |                                        |   RequirementTable
//!     +-- RequirementTable::load_or_empty      |
//!     +-- MessageCatalog (+ host overrides)    +-- deny: revert the build,
//!     +-- install(events, settings, gate)          message the player
//! ```
//!
//! The enabled toggle is consulted exactly once, at [`host::install`]; a
//! disabled gate registers no handler and the build pipeline runs as if
//! this crate were absent.
//!
//! # Modules
//!
//! - [`config`] -- Feature toggle and file locations, loaded from YAML
//! - [`requirements`] -- The structure-to-level table, fail-open loading
//! - [`gate`] -- Verdict evaluation and denial side effects
//! - [`host`] -- Engine seams: build events, reverts, startup wiring
//! - [`error`] -- Evaluation error types

pub mod config;
pub mod error;
pub mod gate;
pub mod host;
pub mod requirements;

// Re-export primary types for convenience.
pub use config::{ConfigError, GateSettings};
pub use error::GateError;
pub use gate::LevelGate;
pub use host::{
    BuildAttemptHandler, BuildEvents, BuildReverter, LocalBuildBus, NullReverter, install,
};
pub use requirements::RequirementTable;
