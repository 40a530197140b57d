//! Host-engine seams and build-event registration.
//!
//! The host engine owns the build pipeline; this module defines the
//! capabilities it hands to the gate. [`BuildReverter`] undoes an
//! in-progress construction, [`BuildEvents`] registers handlers for build
//! attempts, and [`LocalBuildBus`] is the in-process dispatcher used by
//! embedded hosts and the test suite.
//!
//! [`install`] is the single startup entry point: it checks the enabled
//! toggle once and either subscribes the gate or leaves the build
//! pipeline untouched for the process lifetime.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use rampart_types::{BuildAttempt, PlayerId, StructureName, SubscriptionId, TilePos};
use tracing::info;

use crate::config::GateSettings;
use crate::gate::LevelGate;

// ---------------------------------------------------------------------------
// Engine capabilities
// ---------------------------------------------------------------------------

/// Undoes an in-progress construction on the engine's behalf.
///
/// Reverting restores the tile and refunds whatever the build consumed;
/// both happen inside the engine, so the call is fire-and-forget and the
/// gate never observes a failure.
#[async_trait]
pub trait BuildReverter: Send + Sync {
    /// Undo the construction of `structure` at `position` for `player`.
    async fn revert_build(&self, player: PlayerId, structure: &StructureName, position: TilePos);
}

/// A reverter that does nothing.
///
/// Useful for tests and for dry runs that log denials without undoing
/// any builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReverter;

#[async_trait]
impl BuildReverter for NullReverter {
    async fn revert_build(
        &self,
        _player: PlayerId,
        _structure: &StructureName,
        _position: TilePos,
    ) {
    }
}

// ---------------------------------------------------------------------------
// Build events
// ---------------------------------------------------------------------------

/// Callback invoked once per reported build attempt.
#[async_trait]
pub trait BuildAttemptHandler: Send + Sync {
    /// Handle one build attempt.
    async fn on_build_attempt(&self, attempt: &BuildAttempt);
}

/// Registration of build-attempt handlers.
///
/// Implemented by whatever dispatches the host engine's build events.
/// Handlers are registered explicitly and keep receiving attempts until
/// their subscription is removed.
pub trait BuildEvents {
    /// Register `handler` for every subsequent build attempt. Returns the
    /// handle needed to unsubscribe later.
    fn subscribe(&mut self, handler: Arc<dyn BuildAttemptHandler>) -> SubscriptionId;

    /// Remove a previously registered handler. Returns `false` when the
    /// subscription is unknown (e.g. already removed).
    fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool;
}

/// In-process build-event dispatcher.
///
/// Embedded hosts hand each attempt to [`publish`](Self::publish); every
/// subscribed handler sees it. Handlers run sequentially in the caller's
/// task.
#[derive(Default)]
pub struct LocalBuildBus {
    handlers: BTreeMap<SubscriptionId, Arc<dyn BuildAttemptHandler>>,
}

impl LocalBuildBus {
    /// Create a bus with no subscribers.
    pub const fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver `attempt` to every subscribed handler.
    pub async fn publish(&self, attempt: &BuildAttempt) {
        for handler in self.handlers.values() {
            handler.on_build_attempt(attempt).await;
        }
    }
}

impl BuildEvents for LocalBuildBus {
    fn subscribe(&mut self, handler: Arc<dyn BuildAttemptHandler>) -> SubscriptionId {
        let subscription = SubscriptionId::new();
        self.handlers.insert(subscription, handler);
        subscription
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.handlers.remove(&subscription).is_some()
    }
}

// ---------------------------------------------------------------------------
// Startup wiring
// ---------------------------------------------------------------------------

/// Wire the gate into the host's build events if the feature is enabled.
///
/// The enabled toggle is checked exactly once, here. A disabled gate
/// registers nothing, and every subsequent build proceeds unchecked until
/// the process restarts. Returns the subscription handle when the gate
/// was registered.
pub fn install(
    events: &mut dyn BuildEvents,
    settings: &GateSettings,
    gate: Arc<LevelGate>,
) -> Option<SubscriptionId> {
    if !settings.enabled {
        info!("build gate disabled; construction is not level-checked");
        return None;
    }

    let subscription = events.subscribe(gate);
    info!(%subscription, "build gate subscribed to build events");
    Some(subscription)
}
