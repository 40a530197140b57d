//! Error types for gate evaluation.

use rampart_store::StoreError;
use rampart_types::PlayerId;

/// Errors that can occur while evaluating a build attempt.
///
/// Evaluation failures are scoped to the single attempt that raised them:
/// the event handler logs the error and moves on, and the attempt stands
/// exactly as the engine left it.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The acting player's profile could not be resolved.
    #[error("failed to resolve player {player}: {source}")]
    Player {
        /// The player whose lookup failed.
        player: PlayerId,
        /// The underlying store error.
        source: StoreError,
    },
}
