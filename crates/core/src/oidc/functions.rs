use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::types::{BINDING_TTL_SECS, PLACEHOLDER_USER_ID};

/// Generate a fresh, unguessable authorization code.
///
/// 128 bits of randomness; collisions are treated as negligible rather than
/// defended against.
pub fn generate_code() -> String {
    Uuid::new_v4().to_string()
}

/// Epoch-seconds deadline after which the store may drop a binding issued at
/// `issued_at`. Always exactly [`BINDING_TTL_SECS`] past issuance.
pub fn removal_deadline(issued_at: DateTime<Utc>) -> i64 {
    issued_at.timestamp() + BINDING_TTL_SECS
}

/// Resolve the simulated identity a binding is recorded against.
///
/// Precedence: an explicit `userId` cookie wins, then the scenario name from
/// the request, then [`PLACEHOLDER_USER_ID`].
pub fn resolve_user_id(cookie_user_id: Option<&str>, scenario: Option<&str>) -> String {
    cookie_user_id
        .filter(|id| !id.is_empty())
        .or(scenario)
        .filter(|id| !id.is_empty())
        .unwrap_or(PLACEHOLDER_USER_ID)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_codes_are_unique() {
        let first = generate_code();
        let second = generate_code();
        assert_ne!(first, second);
    }

    #[test]
    fn generated_codes_are_well_formed_uuids() {
        let code = generate_code();
        assert!(Uuid::parse_str(&code).is_ok());
    }

    #[test]
    fn removal_deadline_is_exactly_one_day_out() {
        let issued_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(removal_deadline(issued_at) - issued_at.timestamp(), 86_400);
    }

    #[test]
    fn cookie_identity_wins_over_scenario() {
        assert_eq!(
            resolve_user_id(Some("cookie-user"), Some("happy-path")),
            "cookie-user"
        );
    }

    #[test]
    fn scenario_wins_over_placeholder() {
        assert_eq!(resolve_user_id(None, Some("happy-path")), "happy-path");
    }

    #[test]
    fn placeholder_used_when_nothing_supplied() {
        assert_eq!(resolve_user_id(None, None), PLACEHOLDER_USER_ID);
        assert_eq!(resolve_user_id(Some(""), None), PLACEHOLDER_USER_ID);
    }
}
