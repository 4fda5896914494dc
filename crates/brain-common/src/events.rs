use tokio::sync::broadcast;

use crate::id::SessionId;

/// Session lifecycle notifications for observers (loading indicators,
/// transcript views). Carries positions, not message bodies; observers read
/// the session itself for content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MessageAppended { session: SessionId, index: usize },
    PendingChanged { session: SessionId, pending: bool },
    DraftChanged(SessionId),
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
