//! Shared types for Project Brain: errors, ids, and the session event bus.

pub mod errors;
pub mod events;
pub mod id;

pub use errors::{BrainError, ConfigError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id, SessionId};

pub type Result<T> = std::result::Result<T, BrainError>;
