//! Broadcast-channel event emitter.
//!
//! Fans every `AppEvent` out to all current subscribers. Observers that
//! subscribe late miss earlier events; a slow observer may lag and skip.

use tokio::sync::broadcast;
use tracing::debug;

use super::AppEvent;
use crate::ports::AppEventEmitter;

/// Broadcast channel capacity for provisioning events
const CHANNEL_CAPACITY: usize = 64;

/// Broadcaster for provisioning events.
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBroadcaster {
    /// Create a new broadcaster.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl AppEventEmitter for EventBroadcaster {
    fn emit(&self, event: AppEvent) {
        debug!(event = event.event_name(), "Broadcasting event");
        // No subscribers is fine
        let _ = self.sender.send(event);
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}
