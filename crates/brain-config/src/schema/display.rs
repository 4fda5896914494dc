use serde::{Deserialize, Serialize};

/// Terminal transcript layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Column width used to right-align user bubbles (valid range: 40-240).
    pub width: u32,
    pub user_label: String,
    pub assistant_label: String,
    /// Shown after the transcript while a request is outstanding.
    pub thinking_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 80,
            user_label: "You".into(),
            assistant_label: "AI".into(),
            thinking_text: "AI is thinking…".into(),
        }
    }
}
