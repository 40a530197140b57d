//! In-memory player store for tests and single-process hosts.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rampart_types::{PlayerId, PlayerProfile};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::PlayerStore;

/// Player store backed by a process-local map.
///
/// Profiles live behind a [`tokio::sync::RwLock`]; lookups take the shared
/// lock, so concurrent gate evaluations never block each other.
#[derive(Debug, Default)]
pub struct MemoryPlayerStore {
    profiles: RwLock<BTreeMap<PlayerId, PlayerProfile>>,
}

impl MemoryPlayerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the profile for `player`.
    pub async fn insert(&self, player: PlayerId, profile: PlayerProfile) {
        self.profiles.write().await.insert(player, profile);
    }

    /// Remove the profile for `player`. Returns true if one existed.
    pub async fn remove(&self, player: PlayerId) -> bool {
        self.profiles.write().await.remove(&player).is_some()
    }

    /// Number of stored profiles.
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Whether the store holds no profiles.
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl PlayerStore for MemoryPlayerStore {
    async fn profile(&self, player: PlayerId) -> Result<PlayerProfile, StoreError> {
        self.profiles
            .read()
            .await
            .get(&player)
            .cloned()
            .ok_or(StoreError::Missing(player))
    }
}
