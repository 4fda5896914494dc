//! ChatSession struct, accessors, and draft handling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use brain_common::{Event, EventBus, SessionId};
use tokio::sync::broadcast;

use crate::render::{render_transcript, Block};
use crate::types::Message;
use crate::AnswerClient;

/// Transcript and draft. Locked only for short, synchronous sections.
#[derive(Default)]
pub(crate) struct SessionState {
    pub(crate) transcript: Vec<Message>,
    pub(crate) draft: String,
}

/// A chat conversation with the answer service.
///
/// All methods take `&self`; the session can be shared between the input
/// loop and a view task.
pub struct ChatSession {
    pub(super) id: SessionId,
    pub(super) client: Arc<dyn AnswerClient>,
    state: Mutex<SessionState>,
    /// True while a request is outstanding.
    pub(crate) pending: AtomicBool,
    events: EventBus,
}

impl ChatSession {
    pub fn new(client: Arc<dyn AnswerClient>) -> Self {
        Self {
            id: SessionId::new(),
            client,
            state: Mutex::new(SessionState::default()),
            pending: AtomicBool::new(false),
            events: EventBus::default(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Subscribe to transcript, pending and draft notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Snapshot of the full transcript.
    pub fn transcript(&self) -> Vec<Message> {
        self.state().transcript.clone()
    }

    /// Messages appended at or after `index`.
    pub fn messages_since(&self, index: usize) -> Vec<Message> {
        self.state()
            .transcript
            .get(index..)
            .map(<[Message]>::to_vec)
            .unwrap_or_default()
    }

    pub fn message_count(&self) -> usize {
        self.state().transcript.len()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub fn draft(&self) -> String {
        self.state().draft.clone()
    }

    /// Replace the unsent input.
    pub fn update_draft(&self, text: impl Into<String>) {
        self.state().draft = text.into();
        self.events.publish(Event::DraftChanged(self.id.clone()));
    }

    /// Display tree for the current transcript, including the thinking
    /// indicator while a request is outstanding.
    pub fn view(&self) -> Vec<Block> {
        let transcript = self.transcript();
        render_transcript(&transcript, self.is_pending())
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append to the transcript and notify observers. Returns the index.
    pub(super) fn append(&self, message: Message) -> usize {
        let index = {
            let mut state = self.state();
            state.transcript.push(message);
            state.transcript.len() - 1
        };
        self.events.publish(Event::MessageAppended {
            session: self.id.clone(),
            index,
        });
        index
    }

    pub(crate) fn publish_pending(&self, pending: bool) {
        self.events.publish(Event::PendingChanged {
            session: self.id.clone(),
            pending,
        });
    }
}
