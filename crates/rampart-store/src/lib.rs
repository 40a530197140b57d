//! Player-data layer for the Rampart build gate.
//!
//! The gate resolves acting players through the [`PlayerStore`] trait and
//! never writes. Two implementations ship here:
//!
//! ```text
//! Gate evaluation
//!     |
//!     +-- profile lookup --> MemoryPlayerStore  (process-local map)
//!     |
//!     +-- profile lookup --> RedisPlayerStore   (player:{uuid}:profile)
//! ```
//!
//! Hosts that keep accounts in their own database implement [`PlayerStore`]
//! over that layer and hand the gate a trait object.
//!
//! # Modules
//!
//! - [`store`] -- The `PlayerStore` read seam
//! - [`memory`] -- Process-local implementation for tests and embedded hosts
//! - [`redis`] -- Redis-compatible implementation
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod redis;
pub mod store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::MemoryPlayerStore;
pub use redis::RedisPlayerStore;
pub use store::PlayerStore;
