use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{DomainError, DEFAULT_TOKEN_TTL_MINUTES};

/// Default location of the signing key, mounted as a container secret
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "/run/secrets/daf-private";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub signing: SigningConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SigningConfig {
    /// PEM-encoded RSA private key, read on every request
    pub private_key_path: PathBuf,
    pub token_ttl_minutes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7777,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            private_key_path: PathBuf::from(DEFAULT_PRIVATE_KEY_PATH),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }
}

impl SigningConfig {
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token_ttl_minutes as i64)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(Self::environment())
    }

    /// `JWT_SERVICE__SECTION__KEY` variables, e.g. `JWT_SERVICE__SERVER__PORT`
    fn environment() -> config::Environment {
        config::Environment::with_prefix("JWT_SERVICE")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.signing.private_key_path.as_os_str().is_empty() {
            return Err(DomainError::configuration(
                "signing.private_key_path must not be empty",
            ));
        }

        // chrono::Duration::minutes panics past i64::MAX / 60_000
        if self.signing.token_ttl_minutes == 0 || self.signing.token_ttl_minutes > 525_600 {
            return Err(DomainError::configuration(
                "signing.token_ttl_minutes must be between 1 and 525600",
            ));
        }

        Ok(())
    }
}
