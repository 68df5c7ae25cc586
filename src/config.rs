use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000"); overrides the Leptos site address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,

    /// Contact form delivery
    #[serde(default)]
    pub contact: ContactConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, uses OTEL_EXPORTER_OTLP_ENDPOINT env var)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    /// Webhook receiving submissions as JSON; submissions are only logged when unset
    pub webhook_url: Option<url::Url>,

    /// Webhook request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    10
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - NGB_LISTEN
    /// - NGB_SOCKET
    /// - NGB_OTEL__ENDPOINT
    /// - NGB_OTEL__ENVIRONMENT
    /// - NGB_CONTACT__WEBHOOK_URL
    /// - NGB_CONTACT__TIMEOUT_SECS
    ///
    /// # Errors
    ///
    /// Fails when a variable cannot be parsed into its field.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment(Env::prefixed("NGB_").split("__")).extract()
    }

    fn figment(env: Env) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(env)
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    otel: OtelConfig,
    contact: ContactConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            otel: OtelConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        Jail::expect_with(|_| {
            let config = Config::load()?;
            assert_eq!(config.listen, "127.0.0.1:3000");
            assert!(config.socket.is_none());
            assert_eq!(config.otel.environment, "development");
            assert!(config.contact.webhook_url.is_none());
            assert_eq!(config.contact.timeout_secs, 10);
            Ok(())
        });
    }

    #[test]
    fn nested_env_vars() {
        Jail::expect_with(|jail| {
            jail.set_env("NGB_LISTEN", "0.0.0.0:8080");
            jail.set_env("NGB_OTEL__ENVIRONMENT", "production");
            jail.set_env("NGB_CONTACT__WEBHOOK_URL", "https://hooks.example.com/contact");
            jail.set_env("NGB_CONTACT__TIMEOUT_SECS", "3");

            let config = Config::load()?;
            assert_eq!(config.listen, "0.0.0.0:8080");
            assert_eq!(config.otel.environment, "production");
            assert_eq!(
                config.contact.webhook_url.map(|u| u.to_string()).as_deref(),
                Some("https://hooks.example.com/contact")
            );
            assert_eq!(config.contact.timeout_secs, 3);
            Ok(())
        });
    }

    #[test]
    fn invalid_webhook_url_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("NGB_CONTACT__WEBHOOK_URL", "not a url");
            assert!(Config::load().is_err());
            Ok(())
        });
    }
}
