//! The read seam between the gate and wherever player records live.

use async_trait::async_trait;
use rampart_types::{PlayerId, PlayerProfile};

use crate::error::StoreError;

/// Read access to persisted player records.
///
/// The gate resolves acting players through this trait. Implementations
/// wrap wherever the host keeps its accounts: the bundled
/// [`MemoryPlayerStore`](crate::MemoryPlayerStore) for tests and embedded
/// hosts, the [`RedisPlayerStore`](crate::RedisPlayerStore) for servers
/// with a Redis-compatible instance, or the host's own database layer.
///
/// The gate only ever reads. Account creation and level progression stay
/// with the host.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Fetch the stored profile for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Missing`] if no record exists for the player.
    /// Other variants surface backend or serialization failures.
    async fn profile(&self, player: PlayerId) -> Result<PlayerProfile, StoreError>;

    /// Fetch just the experience level for `player`.
    ///
    /// The default implementation reads the whole profile and keeps only
    /// the level.
    async fn level(&self, player: PlayerId) -> Result<u32, StoreError> {
        Ok(self.profile(player).await?.level)
    }
}
