use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event name recorded when an authorization code is handed out.
pub const AUTH_CODE_ISSUED_EVENT: &str = "AUTH_AUTH_CODE_ISSUED";

/// The single relying party this stub serves.
pub const RELYING_PARTY_CLIENT_ID: &str = "vehicleOperatorLicense";

/// Identity recorded against a binding when no scenario-derived identity is
/// supplied with the request.
pub const PLACEHOLDER_USER_ID: &str = "F5CE808F-75AB-4ECD-BBFC-FF9DBF5330FA";

/// Scenario assumed when the caller does not pick one.
pub const DEFAULT_SCENARIO: &str = "default";

/// How long an issued code's nonce binding is kept before the store's TTL
/// sweep may remove it.
pub const BINDING_TTL_SECS: i64 = 24 * 60 * 60;

/// Raw authorize parameters as they arrive on the wire.
///
/// Everything is optional here; [`validate_authorize`] turns this into an
/// [`AuthorizeRequest`] or rejects it before any side effect runs.
///
/// [`validate_authorize`]: super::validate_authorize
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorizeParams {
    pub state: Option<String>,
    pub nonce: Option<String>,
    #[serde(alias = "redirectUri")]
    pub redirect_uri: Option<String>,
    pub scenario: Option<String>,
}

/// A validated authorization request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeRequest {
    /// Opaque value echoed back to the relying party verbatim.
    pub state: String,
    /// Client-supplied anti-replay value, stored against the issued code.
    pub nonce: String,
    /// Where to send the relying party back to. Not checked against a
    /// registry; this stub trusts its single caller.
    pub redirect_uri: String,
    /// Canned persona picked by the caller, if any.
    pub scenario: Option<String>,
}

impl AuthorizeRequest {
    /// The scenario to simulate, falling back to [`DEFAULT_SCENARIO`].
    pub fn scenario(&self) -> &str {
        self.scenario.as_deref().unwrap_or(DEFAULT_SCENARIO)
    }
}

/// Persisted record binding an issued code to its nonce and simulated user.
///
/// One record per issued code; never mutated or deleted by this system.
/// Expiry is enforced by the backing store's TTL sweep on `remove_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceBinding {
    /// Freshly generated authorization code, primary key.
    pub code: String,
    /// Nonce echoed from the request, bound 1:1 to `code`.
    pub nonce: String,
    /// Which persona this code represents.
    pub user_id: String,
    /// Epoch seconds after which the store may drop the record.
    pub remove_at: i64,
}

/// User block inside an [`AuditEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditUser {
    pub user_id: String,
    /// Fresh per event; deliberately uncorrelated with any prior session.
    pub session_id: String,
}

/// Structured record of a code issuance, delivered best-effort to the
/// external analytics pipeline. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub event_id: String,
    /// Epoch milliseconds at construction.
    pub timestamp: i64,
    pub event_name: String,
    pub client_id: String,
    pub user: AuditUser,
}

impl AuditEvent {
    /// Builds a code-issued event for the given simulated user.
    pub fn code_issued(user_id: impl Into<String>, now: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            timestamp: now.timestamp_millis(),
            event_name: AUTH_CODE_ISSUED_EVENT.to_string(),
            client_id: RELYING_PARTY_CLIENT_ID.to_string(),
            user: AuditUser {
                user_id: user_id.into(),
                session_id: Uuid::new_v4().to_string(),
            },
        }
    }
}

/// Body of a successful token-endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub id_token: String,
}

impl TokenResponse {
    /// Wraps a signed identity token with the stub's fixed placeholder
    /// access/refresh values.
    ///
    /// The `access_token` and `refresh_token` fields are stub artifacts so
    /// the response has the usual shape; they are NOT bearer credentials and
    /// must never be treated as secrets.
    pub fn stub(id_token: String) -> Self {
        Self {
            access_token: "123ABC".to_string(),
            refresh_token: "456DEF".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            id_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn code_issued_event_has_stable_field_names() {
        let event = AuditEvent::code_issued("user-1", Utc::now());
        let json = serde_json::to_value(&event).unwrap();

        assert!(json.get("event_id").is_some());
        assert!(json.get("timestamp").is_some());
        assert_eq!(json["event_name"], AUTH_CODE_ISSUED_EVENT);
        assert_eq!(json["client_id"], RELYING_PARTY_CLIENT_ID);
        assert_eq!(json["user"]["user_id"], "user-1");
        assert!(json["user"].get("session_id").is_some());
    }

    #[test]
    fn code_issued_events_get_fresh_ids() {
        let now = Utc::now();
        let first = AuditEvent::code_issued("user-1", now);
        let second = AuditEvent::code_issued("user-1", now);

        assert_ne!(first.event_id, second.event_id);
        assert_ne!(first.user.session_id, second.user.session_id);
    }

    #[test]
    fn scenario_falls_back_to_default() {
        let request = AuthorizeRequest {
            state: "s".to_string(),
            nonce: "n".to_string(),
            redirect_uri: "https://rp.example/cb".to_string(),
            scenario: None,
        };
        assert_eq!(request.scenario(), DEFAULT_SCENARIO);
    }

    #[test]
    fn authorize_params_accept_both_redirect_uri_spellings() {
        let snake: AuthorizeParams =
            serde_json::from_str(r#"{"redirect_uri": "https://rp.example/cb"}"#).unwrap();
        let camel: AuthorizeParams =
            serde_json::from_str(r#"{"redirectUri": "https://rp.example/cb"}"#).unwrap();

        assert_eq!(snake.redirect_uri.as_deref(), Some("https://rp.example/cb"));
        assert_eq!(camel.redirect_uri.as_deref(), Some("https://rp.example/cb"));
    }

    #[test]
    fn stub_token_response_uses_placeholder_credentials() {
        let response = TokenResponse::stub("a.b.c".to_string());
        assert_eq!(response.access_token, "123ABC");
        assert_eq!(response.refresh_token, "456DEF");
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        assert_eq!(response.id_token, "a.b.c");
    }
}
