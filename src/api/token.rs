//! Token issuance endpoint
//!
//! `GET /{username}` returns a freshly signed RS256 token as plain text.

use axum::{
    extract::State,
    http::{header, Uri},
    response::IntoResponse,
};
use tracing::{debug, error, info};

use super::state::AppState;
use super::types::ApiError;
use crate::domain::Username;

/// Issue a token for the username in the path
///
/// GET /{username}
///
/// Usernames outside `[a-z]+` are treated as unknown routes. The segment is
/// checked before percent-decoding, so `/%61lice` is not `alice`.
pub async fn issue_token(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, ApiError> {
    let raw = uri.path().strip_prefix('/').unwrap_or_default();

    let username = Username::parse(raw).map_err(|e| {
        debug!(username = %raw, error = %e, "Rejected username");
        ApiError::not_found("Not found")
    })?;

    let issued = state.token_issuer.issue(&username).await.map_err(|e| {
        error!(username = %username, error = %e, "Failed to issue token");
        ApiError::from(e)
    })?;

    info!(
        username = %username,
        expires_at = %issued.claims.expires_at().to_rfc3339(),
        "Issued token"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        issued.token,
    ))
}
