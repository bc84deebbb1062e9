//! Private key loading
//!
//! The signing key is read from its source on every call. Nothing is cached,
//! so a rotated secret is picked up by the next request.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Source of the PEM-encoded RSA private key
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PrivateKeySource: Send + Sync {
    /// Load the PEM bytes of the private key
    async fn load_pem(&self) -> Result<Vec<u8>, DomainError>;

    /// Human readable location, used in logs and error messages
    fn describe(&self) -> String;
}

/// Reads the private key from a file on disk
#[derive(Debug, Clone)]
pub struct FilePrivateKeySource {
    path: PathBuf,
}

impl FilePrivateKeySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PrivateKeySource for FilePrivateKeySource {
    async fn load_pem(&self) -> Result<Vec<u8>, DomainError> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::key_unavailable(format!("{}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Summary of a parsed RSA private key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    /// Modulus size in bits
    pub bits: usize,
}

/// Parse a PEM private key (PKCS#8 or PKCS#1) and report its size
pub fn inspect_private_key(pem: &[u8]) -> Result<KeyInfo, DomainError> {
    let pem = std::str::from_utf8(pem)
        .map_err(|_| DomainError::invalid_key("PEM is not valid UTF-8"))?;

    let key = RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| DomainError::invalid_key(format!("Failed to parse RSA private key: {}", e)))?;

    Ok(KeyInfo {
        bits: key.size() * 8,
    })
}
