//! Identity provider contracts (Firebase Identity Toolkit REST surface)
//! and the session the client keeps between page loads.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Refresh this long before the provider's expiry
pub const REFRESH_MARGIN_SECS: i64 = 60;

/// Body of `accounts:signInWithPassword` and `accounts:signUp`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl PasswordAuthRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            return_secure_token: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthResponse {
    pub id_token: String,
    #[serde(default)]
    pub email: Option<String>,
    pub refresh_token: String,
    /// Lifetime in seconds, sent as a decimal string
    pub expires_in: String,
    pub local_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub id_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupUser {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<LookupUser>,
}

/// Response of the secure-token endpoint (snake_case, unlike the rest)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderErrorEnvelope {
    pub error: ProviderError,
}

impl ProviderErrorEnvelope {
    /// Provider error code, e.g. `EMAIL_NOT_FOUND`.
    ///
    /// Some codes carry a human suffix (`WEAK_PASSWORD : Password should be ...`),
    /// which is stripped.
    pub fn code(&self) -> &str {
        self.error
            .message
            .split(" : ")
            .next()
            .unwrap_or_default()
            .trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn from_password_response(resp: PasswordAuthResponse, now: DateTime<Utc>) -> Self {
        Self {
            user: AuthUser {
                uid: resp.local_id,
                email: resp.email,
            },
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
            expires_at: now + Duration::seconds(parse_expires_in(&resp.expires_in)),
        }
    }

    /// Applies a secure-token refresh, keeping the known email
    pub fn refreshed(&self, resp: RefreshTokenResponse, now: DateTime<Utc>) -> Self {
        Self {
            user: AuthUser {
                uid: resp.user_id,
                email: self.user.email.clone(),
            },
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
            expires_at: now + Duration::seconds(parse_expires_in(&resp.expires_in)),
        }
    }

    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(REFRESH_MARGIN_SECS) >= self.expires_at
    }
}

/// Unparseable lifetimes count as already expired
fn parse_expires_in(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

pub fn friendly_auth_error(code: &str) -> &'static str {
    match code {
        "INVALID_EMAIL" => "That email looks invalid. Please check and try again.",
        "EMAIL_NOT_FOUND" => "No account found with this email. Try signing up instead.",
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect password. Please try again."
        }
        "EMAIL_EXISTS" => "An account with this email already exists. Try signing in.",
        "WEAK_PASSWORD" => "Password must be at least 6 characters long.",
        _ => "An error occurred. Please try again.",
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

/// Client-side check done before calling the provider
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Please enter a valid email and a password of at least 6 characters.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn sign_in_response() -> PasswordAuthResponse {
        serde_json::from_str(
            r#"{
                "kind": "identitytoolkit#VerifyPasswordResponse",
                "localId": "uid-42",
                "email": "renter@example.com",
                "idToken": "id-token",
                "registered": true,
                "refreshToken": "refresh-token",
                "expiresIn": "3600"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_session_from_sign_in() {
        let now = ts("2024-06-01T12:00:00Z");
        let session = AuthSession::from_password_response(sign_in_response(), now);
        assert_eq!(session.user.uid, "uid-42");
        assert_eq!(session.user.email.as_deref(), Some("renter@example.com"));
        assert_eq!(session.expires_at, ts("2024-06-01T13:00:00Z"));
    }

    #[test]
    fn test_needs_refresh_within_margin() {
        let now = ts("2024-06-01T12:00:00Z");
        let session = AuthSession::from_password_response(sign_in_response(), now);
        assert!(!session.needs_refresh(ts("2024-06-01T12:58:00Z")));
        assert!(session.needs_refresh(ts("2024-06-01T12:59:00Z")));
        assert!(session.needs_refresh(ts("2024-06-01T14:00:00Z")));
    }

    #[test]
    fn test_refresh_keeps_email() {
        let now = ts("2024-06-01T12:00:00Z");
        let session = AuthSession::from_password_response(sign_in_response(), now);
        let refreshed = session.refreshed(
            RefreshTokenResponse {
                id_token: "id-2".into(),
                refresh_token: "refresh-2".into(),
                expires_in: "3600".into(),
                user_id: "uid-42".into(),
            },
            ts("2024-06-01T13:00:00Z"),
        );
        assert_eq!(refreshed.id_token, "id-2");
        assert_eq!(refreshed.user.email.as_deref(), Some("renter@example.com"));
        assert_eq!(refreshed.expires_at, ts("2024-06-01T14:00:00Z"));
    }

    #[test]
    fn test_provider_error_code_strips_suffix() {
        let env: ProviderErrorEnvelope = serde_json::from_str(
            r#"{"error": {"code": 400, "message": "WEAK_PASSWORD : Password should be at least 6 characters"}}"#,
        )
        .unwrap();
        assert_eq!(env.code(), "WEAK_PASSWORD");
        assert_eq!(
            friendly_auth_error(env.code()),
            "Password must be at least 6 characters long."
        );
    }

    #[test]
    fn test_unknown_code_is_generic() {
        assert_eq!(
            friendly_auth_error("TOO_MANY_ATTEMPTS_TRY_LATER"),
            "An error occurred. Please try again."
        );
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("a@b.co", "secret").is_ok());
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("a@b.co", "12345").is_err());
    }
}
