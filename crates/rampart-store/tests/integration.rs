//! Integration tests for the `rampart-store` player-data layer.
//!
//! The Redis-backed tests require a live Redis-compatible server. Run with:
//!
//! ```bash
//! docker run --rm -d -p 6379:6379 --name rampart-test-redis redis:7
//! cargo test -p rampart-store -- --ignored
//! docker stop rampart-test-redis
//! ```
//!
//! All live tests are marked `#[ignore]` so they are skipped during normal
//! `cargo test` runs. The in-memory tests always run.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::Arc;

use rampart_store::{MemoryPlayerStore, PlayerStore, RedisPlayerStore, StoreError};
use rampart_types::{PlayerId, PlayerProfile};

/// Redis connection URL for the local Docker instance.
const REDIS_URL: &str = "redis://localhost:6379";

// =============================================================================
// In-Memory Store Tests (through the trait object)
// =============================================================================

#[tokio::test]
async fn memory_store_works_as_trait_object() {
    let backing = MemoryPlayerStore::new();
    let alice = PlayerId::new();
    let bob = PlayerId::new();
    backing.insert(alice, PlayerProfile::new(25, "en")).await;
    backing.insert(bob, PlayerProfile::new(3, "pt-BR")).await;

    let store: Arc<dyn PlayerStore> = Arc::new(backing);

    let profile = store.profile(alice).await.expect("alice should have a profile");
    assert_eq!(profile.level, 25);

    let level = store.level(bob).await.expect("bob should have a level");
    assert_eq!(level, 3);
}

#[tokio::test]
async fn memory_store_reports_missing_player() {
    let store: Arc<dyn PlayerStore> = Arc::new(MemoryPlayerStore::new());
    let ghost = PlayerId::new();

    let result = store.profile(ghost).await;
    match result {
        Err(StoreError::Missing(player)) => assert_eq!(player, ghost),
        other => panic!("expected Missing, got {other:?}"),
    }
}

// =============================================================================
// Redis Store Tests
// =============================================================================

#[tokio::test]
#[ignore = "requires live Redis-compatible instance (docker run -p 6379:6379 redis:7)"]
async fn redis_profile_roundtrip() {
    let store = RedisPlayerStore::connect(REDIS_URL)
        .await
        .expect("Failed to connect to Redis -- is Docker running?");

    let player = PlayerId::new();
    let profile = PlayerProfile::new(48, "ko");

    store
        .set_profile(player, &profile)
        .await
        .expect("Failed to set profile");

    let retrieved = store.profile(player).await.expect("Failed to get profile");
    assert_eq!(retrieved, profile);

    // Cleanup
    store
        .delete_profile(player)
        .await
        .expect("Failed to delete profile");

    let after = store.profile(player).await;
    assert!(
        matches!(after, Err(StoreError::Missing(_))),
        "Expected Missing after deletion",
    );
}

#[tokio::test]
#[ignore = "requires live Redis-compatible instance (docker run -p 6379:6379 redis:7)"]
async fn redis_profile_overwrite_keeps_latest() {
    let store = RedisPlayerStore::connect(REDIS_URL)
        .await
        .expect("Failed to connect to Redis -- is Docker running?");

    let player = PlayerId::new();
    store
        .set_profile(player, &PlayerProfile::new(10, "en"))
        .await
        .expect("Failed to set first profile");
    store
        .set_profile(player, &PlayerProfile::new(11, "en"))
        .await
        .expect("Failed to set second profile");

    let level = store.level(player).await.expect("Failed to get level");
    assert_eq!(level, 11);

    store
        .delete_profile(player)
        .await
        .expect("Failed to delete profile");
}

#[tokio::test]
#[ignore = "requires live Redis-compatible instance (docker run -p 6379:6379 redis:7)"]
async fn redis_missing_player_is_an_error() {
    let store = RedisPlayerStore::connect(REDIS_URL)
        .await
        .expect("Failed to connect to Redis -- is Docker running?");

    let ghost = PlayerId::new();
    let result = store.profile(ghost).await;
    assert!(matches!(result, Err(StoreError::Missing(p)) if p == ghost));
}
