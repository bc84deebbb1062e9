//! Username validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during username validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UsernameValidationError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username contains invalid character: '{0}'. Only lowercase letters a-z are allowed")]
    InvalidCharacter(char),
}

impl From<UsernameValidationError> for DomainError {
    fn from(e: UsernameValidationError) -> Self {
        DomainError::invalid_username(e.to_string())
    }
}

/// Token subject - one or more lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Parse a raw path segment into a username
    pub fn parse(raw: &str) -> Result<Self, UsernameValidationError> {
        validate_username(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_username(raw: &str) -> Result<(), UsernameValidationError> {
    if raw.is_empty() {
        return Err(UsernameValidationError::Empty);
    }

    match raw.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(c) => Err(UsernameValidationError::InvalidCharacter(c)),
        None => Ok(()),
    }
}
