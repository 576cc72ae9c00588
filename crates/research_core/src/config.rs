//! Configuration for the research service client

use serde::{Deserialize, Serialize};

/// Configuration for the research stream client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Base URL of the research orchestration service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    ///
    /// Research runs are slow; this bounds the whole stream, not just the
    /// initial response.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8089".to_string()
}

const fn default_timeout_ms() -> u64 {
    300_000 // 5 minutes
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ResearchConfig::default();
        assert_eq!(config.base_url, "http://localhost:8089");
        assert_eq!(config.timeout_ms, 300_000);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: ResearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "http://localhost:8089");
        assert_eq!(config.timeout_ms, 300_000);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let json = r#"{"base_url": "http://research:9000", "timeout_ms": 1000}"#;
        let config: ResearchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://research:9000");
        assert_eq!(config.timeout_ms, 1000);
    }
}
