//! JWT claim set issued for a username

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::Username;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL_MINUTES: u64 = 5;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (username)
    pub sub: String,
    /// Expiration timestamp (Unix epoch, UTC)
    pub exp: i64,
}

impl TokenClaims {
    /// Create claims for a username expiring `ttl` from now
    pub fn new(username: &Username, ttl: Duration) -> Self {
        Self::issued_at(username, Utc::now(), ttl)
    }

    /// Create claims relative to an explicit issue time
    pub fn issued_at(username: &Username, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: username.as_str().to_string(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Expiration as a UTC timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Username {
        Username::parse("alice").unwrap()
    }

    #[test]
    fn test_claims_expiration_offset() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = TokenClaims::issued_at(&alice(), now, Duration::minutes(5));

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp, now.timestamp() + 300);
        assert_eq!(claims.expires_at(), now + Duration::minutes(5));
    }

    #[test]
    fn test_new_claims_not_expired() {
        let claims = TokenClaims::new(&alice(), Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES as i64));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_past_claims_expired() {
        let past = Utc::now() - Duration::hours(1);
        let claims = TokenClaims::issued_at(&alice(), past, Duration::minutes(5));
        assert!(claims.is_expired());
    }

    #[test]
    fn test_serialization_only_sub_and_exp() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let claims = TokenClaims::issued_at(&alice(), now, Duration::minutes(5));
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "sub": "alice", "exp": 1704067500 })
        );
    }
}
