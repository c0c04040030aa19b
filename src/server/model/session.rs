//! Values stored in the user's session.

use serde::{Deserialize, Serialize};

/// Used when Discord omits `expires_in`, matching its documented one week lifetime.
const DEFAULT_EXPIRES_IN: u64 = 604_800;

/// OAuth2 token as persisted in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub scopes: Vec<String>,
    /// Expiry in epoch seconds
    pub expires_at: i64,
}

impl StoredToken {
    /// Formats a freshly issued token, converting `expires_in` into `expires_at`.
    ///
    /// # Arguments
    /// - `now` - Current time in epoch seconds
    pub fn format(
        access_token: String,
        refresh_token: Option<String>,
        token_type: String,
        scopes: Vec<String>,
        expires_in: Option<u64>,
        now: i64,
    ) -> Self {
        let expires_in = expires_in.unwrap_or(DEFAULT_EXPIRES_IN);

        Self {
            access_token,
            refresh_token,
            token_type,
            scopes,
            expires_at: now.saturating_add(i64::try_from(expires_in).unwrap_or(i64::MAX)),
        }
    }

    /// A token is expired once `now` is strictly past `expires_at`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expires_at
    }
}

/// Minimal identity kept in the session for logging and cache cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionIdentity {
    #[serde(with = "crate::model::snowflake")]
    pub id: u64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expires_in: Option<u64>, now: i64) -> StoredToken {
        StoredToken::format(
            "access".to_string(),
            Some("refresh".to_string()),
            "bearer".to_string(),
            vec!["identify".to_string(), "guilds".to_string()],
            expires_in,
            now,
        )
    }

    /// Tests that expires_at is computed from expires_in.
    ///
    /// Expected: expires_at = now + expires_in
    #[test]
    fn computes_expires_at() {
        assert_eq!(token(Some(3600), 1_000).expires_at, 4_600);
        assert_eq!(token(None, 0).expires_at, 604_800);
    }

    /// Tests the expiry boundary.
    ///
    /// Expected: not expired at expires_at, expired one second later
    #[test]
    fn expires_strictly_after_expires_at() {
        let token = token(Some(60), 100);

        assert!(!token.is_expired_at(159));
        assert!(!token.is_expired_at(160));
        assert!(token.is_expired_at(161));
    }
}
