//! Error types for the player-data layer.
//!
//! All errors are propagated via [`StoreError`] which wraps the underlying
//! [`fred`] and [`serde_json`] errors with context about which player
//! lookup failed.

use rampart_types::PlayerId;

/// Errors that can occur in a player store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record exists for the player.
    #[error("No profile stored for player: {0}")]
    Missing(PlayerId),

    /// A Redis-compatible store operation failed.
    #[error("Redis error: {0}")]
    Redis(#[from] fred::error::Error),

    /// A profile document could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
