//! JWT Service
//!
//! Issues short-lived RS256 tokens for a username over HTTP:
//! - `GET /{username}` returns a signed token as plain text
//! - The RSA private key is read from disk on every request
//! - Tokens carry only `sub` and `exp` (five minutes by default)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use crate::api::state::AppState;
use crate::config::SigningConfig;
use crate::infrastructure::auth::{FilePrivateKeySource, RsaTokenIssuer};
use tracing::info;

/// Build the token issuer described by the signing configuration
pub fn create_token_issuer(config: &SigningConfig) -> RsaTokenIssuer<FilePrivateKeySource> {
    let source = FilePrivateKeySource::new(&config.private_key_path);
    RsaTokenIssuer::new(source, config.token_ttl())
}

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    config.validate()?;

    let issuer = create_token_issuer(&config.signing);
    info!(
        private_key_path = %config.signing.private_key_path.display(),
        token_ttl_minutes = config.signing.token_ttl_minutes,
        "Token issuer configured"
    );

    Ok(AppState::new(Arc::new(issuer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.signing.token_ttl_minutes = 0;

        assert!(create_app_state(&config).is_err());
    }

    #[test]
    fn test_create_app_state_does_not_touch_key() {
        let mut config = AppConfig::default();
        config.signing.private_key_path = "/nonexistent/daf-private".into();

        let state = create_app_state(&config).unwrap();
        assert_eq!(state.token_issuer.ttl(), chrono::Duration::minutes(5));
    }
}
