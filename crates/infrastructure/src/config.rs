//! Application configuration
//!
//! Loaded once at startup from an optional `config` file plus
//! `DEEPBRIEF_*` environment overrides. The email API key is the only
//! secret and is held as a [`SecretString`].

use std::fmt;

use integration_resend::ResendConfig;
use research_core::ResearchConfig;
use secrecy::SecretString;
use serde::Deserialize;

/// Application environment (development or production)
///
/// Controls whether internal error details are exposed in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - verbose errors
    #[default]
    Development,
    /// Production environment - sanitized errors
    Production,
}

impl Environment {
    /// Whether API responses may carry internal error details
    pub const fn expose_error_details(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Research service client configuration
    #[serde(default)]
    pub research: ResearchConfig,

    /// Outbound email configuration
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Environment variables use the `DEEPBRIEF` prefix with `__` as the
    /// section separator, e.g. `DEEPBRIEF_EMAIL__API_KEY`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("DEEPBRIEF")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all, for development)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: None,
        }
    }
}

/// Outbound email configuration
///
/// Sender and recipient are process-wide settings; requests never carry
/// addresses. Absent values fail loudly at send time, not at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub api_key: Option<SecretString>,

    /// Sender address
    pub from: Option<String>,

    /// Recipient address
    pub to: Option<String>,

    /// Email API base URL
    #[serde(default = "default_email_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_email_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_email_base_url() -> String {
    "https://api.resend.com".to_string()
}

const fn default_email_timeout_secs() -> u64 {
    30
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from: None,
            to: None,
            base_url: default_email_base_url(),
            timeout_secs: default_email_timeout_secs(),
        }
    }
}

impl EmailConfig {
    /// Derive the Resend client configuration
    pub fn resend(&self) -> ResendConfig {
        ResendConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.email.api_key.is_none());
    }

    #[test]
    fn environment_default_is_development() {
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn environment_from_str() {
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn error_details_exposed_only_in_development() {
        assert!(Environment::Development.expose_error_details());
        assert!(!Environment::Production.expose_error_details());
    }

    #[test]
    fn app_config_deserializes_sections() {
        let json = r#"{
            "environment": "production",
            "server": {"host": "0.0.0.0", "port": 8080},
            "research": {"base_url": "http://research:9000"},
            "email": {"api_key": "re_key", "from": "a@b.co", "to": "c@d.co"}
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.research.base_url, "http://research:9000");
        assert!(config.email.api_key.is_some());
        assert_eq!(config.email.from.as_deref(), Some("a@b.co"));
    }

    #[test]
    fn email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.from.is_none());
        assert!(config.to.is_none());
    }

    #[test]
    fn resend_config_inherits_email_settings() {
        let config = EmailConfig {
            api_key: Some(SecretString::from("re_key".to_string())),
            base_url: "http://localhost:9999".to_string(),
            timeout_secs: 5,
            ..Default::default()
        };
        let resend = config.resend();
        assert!(resend.api_key.is_some());
        assert_eq!(resend.base_url, "http://localhost:9999");
        assert_eq!(resend.timeout_secs, 5);
    }
}
