//! Delivery seam for player-visible text.

use async_trait::async_trait;
use rampart_types::PlayerId;

/// Delivers already-rendered text to a connected player.
///
/// Implementations wrap the host engine's chat or notification channel.
/// Delivery is fire-and-forget: a player who disconnected mid-send simply
/// misses the message, and the caller does not observe failures.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver `text` to `player`.
    async fn send_message(&self, player: PlayerId, text: &str);
}

/// A messenger that discards every message.
///
/// Useful for headless hosts and tests that do not assert on delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMessenger;

#[async_trait]
impl Messenger for NullMessenger {
    async fn send_message(&self, _player: PlayerId, _text: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn null_messenger_accepts_anything() {
        let messenger: &dyn Messenger = &NullMessenger;
        messenger.send_message(PlayerId::new(), "into the void").await;
    }
}
