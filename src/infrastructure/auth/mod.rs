//! Token signing infrastructure
//!
//! Loads the RSA private key and signs RS256 tokens with it.

mod jwt;
mod key_source;

pub use jwt::{IssuedToken, RsaTokenIssuer, TokenIssuer};
pub use key_source::{inspect_private_key, FilePrivateKeySource, KeyInfo, PrivateKeySource};
