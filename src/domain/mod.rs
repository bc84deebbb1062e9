//! Domain layer - usernames, claims and errors

pub mod error;
pub mod token;

pub use error::DomainError;
pub use token::{TokenClaims, Username, UsernameValidationError, DEFAULT_TOKEN_TTL_MINUTES};
