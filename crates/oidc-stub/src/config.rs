use oidc_stub_core::oidc::OidcError;

/// Deployment configuration loaded from environment variables.
///
/// All three values are required for token issuance; loading fails closed
/// when any is absent so a misconfigured deployment never signs anything.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client identifier of the single relying party (`OIDC_CLIENT_ID`).
    pub client_id: String,
    /// Identifier of the signing key held by the external signer
    /// (`SIGNING_KEY_ID`).
    pub signing_key_id: String,
    /// Deployment environment tag, embedded in the token issuer URL
    /// (`ENVIRONMENT`).
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `OIDC_CLIENT_ID` - Relying-party client identifier (required)
    /// - `SIGNING_KEY_ID` - External signing key identifier (required)
    /// - `ENVIRONMENT` - Deployment environment name (required)
    pub fn from_env() -> Result<Self, OidcError> {
        Ok(Self {
            client_id: require_var("OIDC_CLIENT_ID")?,
            signing_key_id: require_var("SIGNING_KEY_ID")?,
            environment: require_var("ENVIRONMENT")?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, OidcError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(OidcError::ConfigurationMissing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_var_rejects_missing_and_empty_values() {
        std::env::remove_var("OIDC_STUB_TEST_MISSING");
        assert!(matches!(
            require_var("OIDC_STUB_TEST_MISSING"),
            Err(OidcError::ConfigurationMissing("OIDC_STUB_TEST_MISSING"))
        ));

        std::env::set_var("OIDC_STUB_TEST_EMPTY", "");
        assert!(matches!(
            require_var("OIDC_STUB_TEST_EMPTY"),
            Err(OidcError::ConfigurationMissing(_))
        ));
        std::env::remove_var("OIDC_STUB_TEST_EMPTY");
    }

    #[test]
    fn require_var_returns_present_values() {
        std::env::set_var("OIDC_STUB_TEST_PRESENT", "value");
        assert_eq!(require_var("OIDC_STUB_TEST_PRESENT").unwrap(), "value");
        std::env::remove_var("OIDC_STUB_TEST_PRESENT");
    }
}
