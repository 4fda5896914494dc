//! Session outcome types and the pending-flag guard.

use std::sync::atomic::Ordering;

use crate::types::Message;

use super::manager::ChatSession;

/// Why a submit did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Input was empty after trimming whitespace.
    EmptyInput,
    /// Another request is still outstanding.
    Busy,
}

/// What a call to [`ChatSession::submit`] did. The transcript already
/// reflects it; this is for callers that want to react directly.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Skipped(SkipReason),
    /// The backend replied; carries the appended message.
    Answered(Message),
    /// Transport or decode failure; carries the appended fallback message.
    Failed(Message),
}

impl SubmitOutcome {
    /// The assistant message appended by this submit, if any.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Skipped(_) => None,
            Self::Answered(msg) | Self::Failed(msg) => Some(msg),
        }
    }

    pub fn was_dispatched(&self) -> bool {
        !matches!(self, Self::Skipped(_))
    }
}

/// Holds the session's pending flag. Dropping it clears the draft and
/// releases the flag, so every exit from a submit (including a dropped
/// future) leaves the session accepting input again.
pub(crate) struct PendingGuard<'a> {
    session: &'a ChatSession,
}

impl<'a> PendingGuard<'a> {
    /// Claim the pending flag. Returns `None` if a request is outstanding.
    pub(crate) fn acquire(session: &'a ChatSession) -> Option<Self> {
        session
            .pending
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()?;
        Some(Self { session })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.session.state().draft.clear();
        self.session.pending.store(false, Ordering::Release);
        self.session.publish_pending(false);
    }
}
