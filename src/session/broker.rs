//! Sign-in against an identity-toolkit-style session provider.
//!
//! Two REST paths produce a user identifier:
//! - anonymous: `accounts:signUp` returns `localId` directly;
//! - custom token: `accounts:signInWithCustomToken` returns an `idToken`
//!   only, so a follow-up `accounts:lookup` fetches `localId`.
//!
//! Like the generation endpoint, the API key rides in a `key` query
//! parameter, so log lines carry paths, never full URLs.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SESSION_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Errors from the session provider. All of them are non-fatal: every caller
/// falls back to a local identity.
#[derive(Debug)]
pub enum SessionError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Provider returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response body.
    Parse(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Network(msg) => write!(f, "network error: {msg}"),
            SessionError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SessionError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// A backend that can establish a session identifier.
#[async_trait]
pub trait SessionBroker: Send + Sync {
    /// Signs in with the custom token when one is provided, anonymously
    /// otherwise, and returns the resulting user identifier.
    async fn sign_in(&self, custom_token: Option<&str>) -> Result<String, SessionError>;
}

// ============================================================================
// Identity Toolkit Wire Types
// ============================================================================

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest {
    return_secure_token: bool,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CustomTokenRequest {
    token: String,
    return_secure_token: bool,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CustomTokenResponse {
    id_token: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct LookupRequest {
    id_token: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
}

/// Error body shape: `{"error": {"message": "..."}}`.
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Unknown error".to_string())
}

// ============================================================================
// Broker Implementation
// ============================================================================

/// Session broker over the identity-toolkit REST surface.
pub struct IdentityToolkitBroker {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl IdentityToolkitBroker {
    /// Creates a new broker.
    ///
    /// # Arguments
    /// * `api_key` - session provider API key
    /// * `base_url` - Optional custom base URL (defaults to Google's endpoint)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_SESSION_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// POSTs a JSON body to `/v1/accounts:{action}` and deserializes the
    /// response, mapping non-success statuses to `SessionError::Api`.
    async fn post<Req, Resp>(&self, action: &str, body: &Req) -> Result<Resp, SessionError>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        let path = format!("/v1/accounts:{action}");
        debug!("Session request: POST {path}");

        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Session API error on {action}: {} - {}", status, body);
            return Err(SessionError::Api {
                status,
                message: error_message_from_body(&body),
            });
        }

        response
            .json()
            .await
            .map_err(|e| SessionError::Parse(e.to_string()))
    }

    async fn sign_in_anonymous(&self) -> Result<String, SessionError> {
        let response: SignUpResponse = self
            .post(
                "signUp",
                &SignUpRequest {
                    return_secure_token: true,
                },
            )
            .await?;
        Ok(response.local_id)
    }

    async fn sign_in_with_custom_token(&self, token: &str) -> Result<String, SessionError> {
        let signed_in: CustomTokenResponse = self
            .post(
                "signInWithCustomToken",
                &CustomTokenRequest {
                    token: token.to_string(),
                    return_secure_token: true,
                },
            )
            .await?;

        let lookup: LookupResponse = self
            .post(
                "lookup",
                &LookupRequest {
                    id_token: signed_in.id_token,
                },
            )
            .await?;

        lookup
            .users
            .into_iter()
            .next()
            .map(|user| user.local_id)
            .ok_or_else(|| SessionError::Parse("lookup response carried no users".to_string()))
    }
}

#[async_trait]
impl SessionBroker for IdentityToolkitBroker {
    async fn sign_in(&self, custom_token: Option<&str>) -> Result<String, SessionError> {
        let uid = match custom_token {
            Some(token) => {
                info!("Signing in with custom token");
                self.sign_in_with_custom_token(token).await?
            }
            None => {
                info!("Signing in anonymously");
                self.sign_in_anonymous().await?
            }
        };
        info!("Session established: uid={uid}");
        Ok(uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_serializes_camel_case() {
        let json = serde_json::to_string(&SignUpRequest {
            return_secure_token: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"returnSecureToken":true}"#);
    }

    #[test]
    fn test_custom_token_request_carries_token() {
        let json = serde_json::to_string(&CustomTokenRequest {
            token: "tok-1".to_string(),
            return_secure_token: true,
        })
        .unwrap();
        assert!(json.contains(r#""token":"tok-1""#));
        assert!(json.contains(r#""returnSecureToken":true"#));
    }

    #[test]
    fn test_sign_up_response_parses_local_id() {
        let json = r#"{"kind":"x","idToken":"t","localId":"user-42","expiresIn":"3600"}"#;
        let response: SignUpResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.local_id, "user-42");
    }

    #[test]
    fn test_lookup_response_parses_users() {
        let json = r#"{"users":[{"localId":"uid-7","lastLoginAt":"0"}]}"#;
        let response: LookupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.users[0].local_id, "uid-7");
    }

    #[test]
    fn test_error_message_from_body() {
        let body = r#"{"error":{"code":400,"message":"INVALID_CUSTOM_TOKEN"}}"#;
        assert_eq!(error_message_from_body(body), "INVALID_CUSTOM_TOKEN");
        assert_eq!(error_message_from_body("<html>"), "Unknown error");
    }

    #[test]
    fn test_default_base_url() {
        let broker = IdentityToolkitBroker::new("key".to_string(), None);
        assert_eq!(broker.base_url, DEFAULT_SESSION_BASE_URL);
    }
}
