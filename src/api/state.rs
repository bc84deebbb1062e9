//! Application state shared by handlers

use std::sync::Arc;

use crate::infrastructure::auth::TokenIssuer;

#[derive(Clone)]
pub struct AppState {
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn new(token_issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { token_issuer }
    }
}
