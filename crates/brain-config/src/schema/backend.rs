use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the answer service lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL; `/chat`, `/health` and `/eval` are appended.
    pub url: String,
    /// TCP connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (0 disables, otherwise 1-3600).
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// `None` when the request timeout is disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_request_timeout_means_none() {
        let cfg = BackendConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(cfg.request_timeout(), None);
    }

    #[test]
    fn default_timeouts() {
        let cfg = BackendConfig::default();
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(120)));
    }
}
