//! Token subject and claim set

mod claims;
mod username;

pub use claims::{TokenClaims, DEFAULT_TOKEN_TTL_MINUTES};
pub use username::{Username, UsernameValidationError};
