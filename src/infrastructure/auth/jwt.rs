//! RS256 token issuance

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::Duration;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use super::key_source::{inspect_private_key, KeyInfo, PrivateKeySource};
use crate::domain::{DomainError, TokenClaims, Username, DEFAULT_TOKEN_TTL_MINUTES};

/// A signed token together with the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: TokenClaims,
}

/// Trait for token issuance
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Sign a fresh token for the given username
    async fn issue(&self, username: &Username) -> Result<IssuedToken, DomainError>;

    /// Load and parse the signing key without issuing anything
    async fn check_key(&self) -> Result<KeyInfo, DomainError>;

    /// Lifetime of issued tokens
    fn ttl(&self) -> Duration;
}

/// Issues RS256-signed tokens with a key loaded from `S` on every call
pub struct RsaTokenIssuer<S> {
    source: S,
    ttl: Duration,
    header: Header,
}

impl<S: PrivateKeySource> Debug for RsaTokenIssuer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaTokenIssuer")
            .field("source", &self.source.describe())
            .field("ttl_secs", &self.ttl.num_seconds())
            .field("algorithm", &self.header.alg)
            .finish()
    }
}

impl<S: PrivateKeySource> RsaTokenIssuer<S> {
    /// Create a new issuer with the given key source and token lifetime
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            header: Header::new(Algorithm::RS256),
        }
    }

    /// Create an issuer with the default five minute lifetime
    pub fn with_default_ttl(source: S) -> Self {
        Self::new(source, Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES as i64))
    }

    async fn encoding_key(&self) -> Result<EncodingKey, DomainError> {
        let pem = self.source.load_pem().await?;

        EncodingKey::from_rsa_pem(&pem).map_err(|e| {
            DomainError::invalid_key(format!(
                "Failed to create encoding key from {}: {}",
                self.source.describe(),
                e
            ))
        })
    }
}

#[async_trait]
impl<S: PrivateKeySource> TokenIssuer for RsaTokenIssuer<S> {
    async fn issue(&self, username: &Username) -> Result<IssuedToken, DomainError> {
        let key = self.encoding_key().await?;
        let claims = TokenClaims::new(username, self.ttl);

        let token = encode(&self.header, &claims, &key)
            .map_err(|e| DomainError::signing(format!("Failed to generate JWT: {}", e)))?;

        Ok(IssuedToken { token, claims })
    }

    async fn check_key(&self) -> Result<KeyInfo, DomainError> {
        let pem = self.source.load_pem().await?;
        inspect_private_key(&pem)
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}
