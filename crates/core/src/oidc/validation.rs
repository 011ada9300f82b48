use super::error::OidcError;
use super::types::{AuthorizeParams, AuthorizeRequest};

/// Validate raw authorize parameters into a request the issuer can act on.
///
/// `state`, `nonce`, and `redirect_uri` must all be present and non-empty.
/// Runs before any side effect; a failure here means nothing was written and
/// no audit event was attempted.
pub fn validate_authorize(params: AuthorizeParams) -> Result<AuthorizeRequest, OidcError> {
    Ok(AuthorizeRequest {
        state: require("state", params.state)?,
        nonce: require("nonce", params.nonce)?,
        redirect_uri: require("redirect_uri", params.redirect_uri)?,
        scenario: params.scenario.filter(|s| !s.is_empty()),
    })
}

fn require(field: &'static str, value: Option<String>) -> Result<String, OidcError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(OidcError::InvalidRequest(field)),
    }
}
