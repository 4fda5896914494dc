//! Configuration schema types for the Project Brain client.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod backend;
mod display;
mod system;

pub use backend::*;
pub use display::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    pub backend: BackendConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}
