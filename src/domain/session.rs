//! Session value object and the identity returned by the provider.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::SESSION_TTL_DAYS;

/// A login session bound to one user.
///
/// Expiry is always creation time plus [`SESSION_TTL_DAYS`]; an expired
/// session is treated as absent even before it is deleted.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// Don't expose the token in debug output
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Session {
    /// Issue (or re-issue) a session created at `now`.
    pub fn issue(token: String, user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            token,
            user_id,
            expires_at: now + Self::ttl(),
            created_at: now,
        }
    }

    pub fn ttl() -> Duration {
        Duration::days(SESSION_TTL_DAYS)
    }

    /// A session is usable strictly before its expiry instant.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Verified identity returned by the identity provider's profile exchange.
#[derive(Clone, Deserialize)]
pub struct ProviderProfile {
    /// Provider-side identifier (informational only)
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub session_token: String,
}

impl std::fmt::Debug for ProviderProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderProfile")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("session_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_seven_days_after_issue() {
        let now = Utc::now();
        let session = Session::issue("tok".to_string(), Uuid::new_v4(), now);
        assert_eq!(session.expires_at - session.created_at, Duration::days(7));
    }

    #[test]
    fn test_active_window_is_exclusive_at_expiry() {
        let now = Utc::now();
        let session = Session::issue("tok".to_string(), Uuid::new_v4(), now);

        assert!(session.is_active_at(now));
        assert!(session.is_active_at(now + Duration::days(7) - Duration::seconds(1)));
        assert!(!session.is_active_at(now + Duration::days(7)));
        assert!(!session.is_active_at(now + Duration::days(30)));
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::issue("very-secret".to_string(), Uuid::new_v4(), Utc::now());
        assert!(!format!("{:?}", session).contains("very-secret"));
    }

    #[test]
    fn test_profile_accepts_missing_picture() {
        let profile: ProviderProfile = serde_json::from_str(
            r#"{"id":"p1","email":"a@b.c","name":"A","session_token":"t"}"#,
        )
        .unwrap();
        assert!(profile.picture.is_none());
    }
}
