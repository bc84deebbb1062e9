use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid username: {message}")]
    InvalidUsername { message: String },

    #[error("Private key unavailable: {message}")]
    KeyUnavailable { message: String },

    #[error("Invalid private key: {message}")]
    InvalidKey { message: String },

    #[error("Signing error: {message}")]
    Signing { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn invalid_username(message: impl Into<String>) -> Self {
        Self::InvalidUsername {
            message: message.into(),
        }
    }

    pub fn key_unavailable(message: impl Into<String>) -> Self {
        Self::KeyUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
