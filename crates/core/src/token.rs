//! Signed identity token construction.
//!
//! Builds the JWT header and payload, exposes the canonical signing input,
//! and assembles the compact serialization once an external signer has
//! produced the signature bytes. No cryptography happens here.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::oidc::OidcError;

/// Signature algorithm advertised in every token header.
pub const SIGNING_ALGORITHM: &str = "ES256";

/// Namespace prefix under which fresh token subjects are minted.
pub const SUBJECT_PREFIX: &str = "urn:fdc:gov.uk:2022:";

/// Identity token lifetime in seconds.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Issuer URL for a deployment environment.
///
/// The environment tag is embedded in the host so tokens minted by
/// non-production deployments carry a distinguishable issuer.
pub fn issuer_url(environment: &str) -> String {
    format!("https://oidc-stub.home.{environment}.account.gov.uk/")
}

/// JOSE header of the identity token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenHeader {
    pub kid: String,
    pub alg: String,
}

impl IdTokenHeader {
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            kid: key_id.into(),
            alg: SIGNING_ALGORITHM.to_string(),
        }
    }
}

/// Claims carried by the identity token.
///
/// `sub` embeds a fresh random identifier; it is NOT bound to any identity
/// chosen at the authorize step. The token endpoint is identity-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
    pub sid: String,
}

impl IdTokenClaims {
    /// Builds claims for the given relying party and environment, issued at
    /// `issued_at` and expiring [`TOKEN_TTL_SECS`] later.
    pub fn new(client_id: &str, environment: &str, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: format!("{SUBJECT_PREFIX}{}", Uuid::new_v4()),
            iss: issuer_url(environment),
            aud: client_id.to_string(),
            exp: iat + TOKEN_TTL_SECS,
            iat,
            sid: Uuid::new_v4().to_string(),
        }
    }
}

/// Header and payload segments awaiting an external signature.
#[derive(Debug, Clone)]
pub struct UnsignedToken {
    header_b64: String,
    payload_b64: String,
}

impl UnsignedToken {
    /// Encode header and claims into their base64url segments.
    pub fn new(header: &IdTokenHeader, claims: &IdTokenClaims) -> Result<Self, OidcError> {
        let header_json =
            serde_json::to_vec(header).map_err(|e| OidcError::TokenEncoding(e.to_string()))?;
        let payload_json =
            serde_json::to_vec(claims).map_err(|e| OidcError::TokenEncoding(e.to_string()))?;

        Ok(Self {
            header_b64: URL_SAFE_NO_PAD.encode(header_json),
            payload_b64: URL_SAFE_NO_PAD.encode(payload_json),
        })
    }

    /// The canonical bytes handed to the external signer:
    /// `base64url(header) . base64url(payload)`.
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    /// Append the signature segment, producing the compact token.
    ///
    /// An empty signature means the signer returned no material; there is no
    /// fallback signing path, so the token call fails.
    pub fn assemble(self, signature: &[u8]) -> Result<String, OidcError> {
        if signature.is_empty() {
            return Err(OidcError::SigningUnavailable(
                "signer returned no signature material".to_string(),
            ));
        }
        Ok(format!(
            "{}.{}.{}",
            self.header_b64,
            self.payload_b64,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn claims() -> IdTokenClaims {
        IdTokenClaims::new(
            "vehicleOperatorLicense",
            "build",
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn header_advertises_es256() {
        let header = IdTokenHeader::new("K1");
        assert_eq!(header.kid, "K1");
        assert_eq!(header.alg, "ES256");
    }

    #[test]
    fn issuer_embeds_the_environment() {
        assert_eq!(
            issuer_url("build"),
            "https://oidc-stub.home.build.account.gov.uk/"
        );
    }

    #[test]
    fn claims_expire_one_hour_after_issuance() {
        let claims = claims();
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn subject_is_a_fresh_namespaced_identifier() {
        let first = claims();
        let second = claims();
        assert!(first.sub.starts_with(SUBJECT_PREFIX));
        assert_ne!(first.sub, second.sub);
        assert_ne!(first.sid, second.sid);
    }

    #[test]
    fn compact_segments_are_exact_base64url_of_the_json() {
        let header = IdTokenHeader::new("K1");
        let claims = claims();
        let unsigned = UnsignedToken::new(&header, &claims).unwrap();

        let token = unsigned.clone().assemble(b"signature-bytes").unwrap();
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);

        let expected_header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
        let expected_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        assert_eq!(segments[0], expected_header);
        assert_eq!(segments[1], expected_payload);
        assert_eq!(segments[2], URL_SAFE_NO_PAD.encode(b"signature-bytes"));

        assert_eq!(unsigned.signing_input(), format!("{}.{}", segments[0], segments[1]));
    }

    #[test]
    fn segments_decode_back_to_the_original_structures() {
        let header = IdTokenHeader::new("K1");
        let claims = claims();
        let token = UnsignedToken::new(&header, &claims)
            .unwrap()
            .assemble(&[1, 2, 3])
            .unwrap();

        let segments: Vec<&str> = token.split('.').collect();
        let decoded_header: IdTokenHeader =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segments[0]).unwrap()).unwrap();
        let decoded_claims: IdTokenClaims =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segments[1]).unwrap()).unwrap();

        assert_eq!(decoded_header, header);
        assert_eq!(decoded_claims, claims);
    }

    #[test]
    fn empty_signature_is_fatal() {
        let unsigned = UnsignedToken::new(&IdTokenHeader::new("K1"), &claims()).unwrap();
        let err = unsigned.assemble(&[]).unwrap_err();
        assert!(matches!(err, OidcError::SigningUnavailable(_)));
    }
}
