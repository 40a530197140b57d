//! Redis-compatible player store operations.
//!
//! Player records are stored as JSON documents under per-player keys, so
//! the same instance can hold other server state without collisions.
//!
//! # Key Patterns
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `player:{uuid}:profile` | JSON | Persisted player profile |

use async_trait::async_trait;
use fred::prelude::*;
use rampart_types::{PlayerId, PlayerProfile};

use crate::error::StoreError;
use crate::store::PlayerStore;

/// Connection handle to a Redis-compatible player store.
///
/// Wraps a [`fred::prelude::Client`] and provides typed operations for the
/// profile key pattern above.
#[derive(Clone)]
pub struct RedisPlayerStore {
    client: Client,
}

impl RedisPlayerStore {
    /// Connect to a Redis-compatible server at the given URL.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL cannot be parsed.
    /// Returns [`StoreError::Redis`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let config = Config::from_url(url)
            .map_err(|e| StoreError::Config(format!("Invalid store URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("Connected to player store");
        Ok(Self { client })
    }

    /// Serialize `profile` as JSON and store it at `player:{uuid}:profile`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if serialization fails.
    /// Returns [`StoreError::Redis`] if the write fails.
    pub async fn set_profile(
        &self,
        player: PlayerId,
        profile: &PlayerProfile,
    ) -> Result<(), StoreError> {
        let key = profile_key(player);
        let json = serde_json::to_string(profile)?;
        let _: () = self
            .client
            .set(key.as_str(), json.as_str(), None, None, false)
            .await?;
        Ok(())
    }

    /// Delete the stored profile for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the delete fails.
    pub async fn delete_profile(&self, player: PlayerId) -> Result<(), StoreError> {
        let key = profile_key(player);
        let _: u32 = self.client.del(key.as_str()).await?;
        Ok(())
    }

    /// Return a reference to the underlying [`Client`].
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl PlayerStore for RedisPlayerStore {
    async fn profile(&self, player: PlayerId) -> Result<PlayerProfile, StoreError> {
        let key = profile_key(player);
        let value: Option<String> = self.client.get(key.as_str()).await?;
        value.map_or_else(
            || Err(StoreError::Missing(player)),
            |s| Ok(serde_json::from_str(&s)?),
        )
    }
}

/// Key holding the JSON profile document for one player.
fn profile_key(player: PlayerId) -> String {
    format!("player:{player}:profile")
}
