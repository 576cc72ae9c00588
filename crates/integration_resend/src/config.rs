//! Resend client configuration

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the Resend API client
#[derive(Debug, Clone, Deserialize)]
pub struct ResendConfig {
    /// Resend API key (required for sending)
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key() {
        let config = ResendConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ResendConfig = serde_json::from_str(r#"{"api_key": "re_test"}"#).unwrap();
        assert!(config.api_key.is_some());
        assert_eq!(config.base_url, "https://api.resend.com");
    }
}
