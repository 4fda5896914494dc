//! The submit state machine.

use brain_common::new_correlation_id;
use tracing::{debug, info_span, warn, Instrument};

use crate::types::Message;

use super::manager::ChatSession;
use super::types::{PendingGuard, SkipReason, SubmitOutcome};

impl ChatSession {
    /// Send `text` to the answer service and record the exchange.
    ///
    /// Whitespace-only input and calls made while a request is outstanding
    /// are skipped without touching the transcript. Otherwise the user
    /// message is appended before the request goes out, and exactly one
    /// assistant message is appended when it resolves. Transport failures
    /// are recorded as [`Message::backend_error`], never returned.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            debug!(session = %self.id.short(), "ignoring empty submit");
            return SubmitOutcome::Skipped(SkipReason::EmptyInput);
        }

        let Some(guard) = PendingGuard::acquire(self) else {
            debug!(session = %self.id.short(), "request outstanding, submit skipped");
            return SubmitOutcome::Skipped(SkipReason::Busy);
        };

        self.append(Message::user(text));
        self.publish_pending(true);

        let span = info_span!(
            "submit",
            session = %self.id.short(),
            request = %new_correlation_id()
        );
        let result = self.client.ask(text).instrument(span.clone()).await;

        let outcome = match result {
            Ok(reply) => SubmitOutcome::Answered(reply.into_message()),
            Err(e) => {
                span.in_scope(|| warn!(error = %e, "answer service request failed"));
                SubmitOutcome::Failed(Message::backend_error())
            }
        };

        if let Some(message) = outcome.message() {
            self.append(message.clone());
        }
        drop(guard);
        outcome
    }

    /// Submit the current draft.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let draft = self.draft();
        self.submit(&draft).await
    }
}
