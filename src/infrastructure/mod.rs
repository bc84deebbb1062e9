//! Infrastructure layer - key loading, signing and logging

pub mod auth;
pub mod logging;
