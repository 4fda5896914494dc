//! Chat session management.
//!
//! A `ChatSession` owns the transcript, the draft and the pending flag, and
//! runs one request against the answer service at a time.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{SkipReason, SubmitOutcome};
