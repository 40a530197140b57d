//! Level-gate evaluation of build attempts.
//!
//! [`LevelGate`] is the decision core of the crate. For every reported
//! build attempt it walks a fixed sequence:
//!
//! ```text
//! attempt
//!    |
//!    +-- teardown? ----------------> Allowed (demolition is never gated)
//!    |
//!    +-- resolve player profile ---> error: attempt left unchecked
//!    |
//!    +-- look up required level
//!    |      absent + "air" --------> Ignored (counted, logged)
//!    |      absent ----------------> Allowed (structure is not gated)
//!    |
//!    +-- level >= required? -------> Allowed
//!           otherwise -------------> revert build, notify player, Denied
//! ```
//!
//! On denial the revert always happens before the notification, so the
//! player reads the message with the world already restored.
//!
//! The requirement table is cached inside the gate and shared behind a
//! read/write lock; [`LevelGate::refresh_requirements`] swaps it without
//! touching in-flight evaluations.

use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use rampart_messages::{MessageCatalog, Messenger, keys};
use rampart_store::PlayerStore;
use rampart_types::{BuildAttempt, GateVerdict, PlayerProfile};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::GateError;
use crate::host::{BuildAttemptHandler, BuildReverter};
use crate::requirements::RequirementTable;

/// Gate that checks build attempts against per-structure level minimums.
///
/// Construct one per process with the loaded [`RequirementTable`] and the
/// host-provided seams, wrap it in an [`Arc`], and register it through
/// [`install`](crate::host::install).
pub struct LevelGate {
    requirements: RwLock<RequirementTable>,
    store: Arc<dyn PlayerStore>,
    reverter: Arc<dyn BuildReverter>,
    messenger: Arc<dyn Messenger>,
    catalog: MessageCatalog,
    invalid_structures: AtomicU64,
}

impl LevelGate {
    /// Create a gate over the given requirement table and host seams.
    pub fn new(
        requirements: RequirementTable,
        store: Arc<dyn PlayerStore>,
        reverter: Arc<dyn BuildReverter>,
        messenger: Arc<dyn Messenger>,
        catalog: MessageCatalog,
    ) -> Self {
        Self {
            requirements: RwLock::new(requirements),
            store,
            reverter,
            messenger,
            catalog,
            invalid_structures: AtomicU64::new(0),
        }
    }

    /// Evaluate one build attempt and apply denial side effects.
    ///
    /// Teardowns are allowed without consulting the store or the table.
    /// For placements, the player profile is resolved first and the
    /// required level second, so a broken store surfaces even when the
    /// structure turns out not to be gated.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Player`] when the acting player's profile
    /// cannot be resolved. No side effects have happened at that point;
    /// the attempt stands as the engine left it.
    pub async fn evaluate(&self, attempt: &BuildAttempt) -> Result<GateVerdict, GateError> {
        // Step 1: demolition is never gated.
        if attempt.teardown {
            return Ok(GateVerdict::Allowed);
        }

        // Step 2: resolve the acting player.
        let profile = self
            .store
            .profile(attempt.player)
            .await
            .map_err(|source| GateError::Player {
                player: attempt.player,
                source,
            })?;

        // Step 3: look up the required level for this structure.
        let required = {
            let table = self.requirements.read().await;
            table.required_level(&attempt.structure)
        };

        let Some(required) = required else {
            if attempt.structure.is_air() {
                let occurrences = self
                    .invalid_structures
                    .fetch_add(1, Ordering::Relaxed)
                    .saturating_add(1);
                warn!(
                    player = %attempt.player,
                    structure = %attempt.structure,
                    position = %attempt.position,
                    occurrences,
                    "build attempt names no structure; nothing to gate"
                );
                return Ok(GateVerdict::Ignored);
            }
            return Ok(GateVerdict::Allowed);
        };

        // Step 4: compare and apply denial side effects.
        if profile.level >= required {
            return Ok(GateVerdict::Allowed);
        }
        self.deny(attempt, &profile, required).await;
        Ok(GateVerdict::Denied {
            required_level: required,
        })
    }

    /// Replace the cached requirement table.
    ///
    /// In-flight evaluations finish against the table they already read;
    /// every later attempt sees the new one.
    pub async fn refresh_requirements(&self, requirements: RequirementTable) {
        let entries = requirements.len();
        *self.requirements.write().await = requirements;
        info!(entries, "requirement table refreshed");
    }

    /// Number of attempts so far that named no structure at all.
    pub fn invalid_structure_count(&self) -> u64 {
        self.invalid_structures.load(Ordering::Relaxed)
    }

    /// Revert the build, then tell the player why. Order matters: the
    /// world is restored before the player reads the explanation.
    async fn deny(&self, attempt: &BuildAttempt, profile: &PlayerProfile, required: u32) {
        self.reverter
            .revert_build(attempt.player, &attempt.structure, attempt.position)
            .await;
        info!(
            player = %attempt.player,
            structure = %attempt.structure,
            position = %attempt.position,
            level = profile.level,
            required,
            "build denied and reverted"
        );

        // &dyn Display is not Send; the arguments must drop before the
        // delivery await or the handler future stops being spawnable.
        let text = {
            let args: [&dyn Display; 2] = [&attempt.structure, &required];
            self.catalog.format(&profile.locale, keys::BUILD_LEVEL_REQUIRED, &args)
        };
        let Some(text) = text else {
            warn!(
                key = keys::BUILD_LEVEL_REQUIRED,
                "denial message template missing; player not notified"
            );
            return;
        };
        self.messenger.send_message(attempt.player, &text).await;
    }
}

#[async_trait]
impl BuildAttemptHandler for LevelGate {
    async fn on_build_attempt(&self, attempt: &BuildAttempt) {
        if let Err(error) = self.evaluate(attempt).await {
            warn!(%error, "build attempt left unchecked");
        }
    }
}
