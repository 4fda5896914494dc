//! Chat engine for the Project Brain client.
//!
//! Provides:
//! - The transcript data model (`Message`, `Source`, `DoorItem`)
//! - Wire types for the answer service and the reply discriminator
//! - An HTTP client for `/chat`, `/health` and `/eval`
//! - `ChatSession`, the single-flight transcript state machine
//! - A pure renderer from transcript to display tree and terminal text

pub mod client;
pub mod render;
pub mod session;
pub mod types;
pub mod wire;

use async_trait::async_trait;

pub use client::{HttpAnswerClient, HttpClientConfig};
pub use render::{render_transcript, Align, Block, TextRenderer, TABLE_COLUMNS};
pub use session::{ChatSession, SkipReason, SubmitOutcome};
pub use types::{DoorItem, Message, Source, BACKEND_ERROR_TEXT, DOOR_SCHEDULE_CAPTION};
pub use wire::{ChatReply, EvalLabel, EvalReport, EvalResult, EvalSummary};

/// Anything that can answer a chat message. The session only talks to the
/// answer service through this trait.
#[async_trait]
pub trait AnswerClient: Send + Sync {
    async fn ask(&self, message: &str) -> Result<ChatReply, ChatError>;
}

/// Transport-level failures. All of them end up as the same fixed
/// transcript entry; the variants exist for logging and for the CLI's
/// `health`/`eval` commands.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("client setup error: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if e.is_builder() {
            Self::Setup(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<ChatError> for brain_common::BrainError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Network(_) | ChatError::Timeout => Self::Network(e.to_string()),
            ChatError::Status { .. } | ChatError::Decode(_) => Self::Backend(e.to_string()),
            ChatError::Setup(_) => Self::Other(e.to_string()),
        }
    }
}
