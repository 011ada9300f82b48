//! Mock signing backend.

use async_trait::async_trait;
use rand::Rng;

use oidc_stub_core::oidc::{OidcError, Result, SignatureProvider};

enum Mode {
    /// Fresh random bytes per call. The default for local runs.
    Random,
    /// A fixed signature, so tests can assert the assembled token exactly.
    Fixed(Vec<u8>),
    /// Always fails, for exercising the no-signature path.
    Unavailable,
}

/// Signer that never touches a real key.
///
/// Signatures produced here are NOT verifiable; this backend exists so the
/// token endpoint can be exercised without KMS.
pub struct MockSigner {
    mode: Mode,
}

impl Default for MockSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSigner {
    /// Signer returning 64 fresh random bytes per call.
    pub fn new() -> Self {
        Self { mode: Mode::Random }
    }

    /// Signer returning the given bytes on every call.
    pub fn with_signature(signature: Vec<u8>) -> Self {
        Self {
            mode: Mode::Fixed(signature),
        }
    }

    /// Signer that reports the signing service as unavailable.
    pub fn unavailable() -> Self {
        Self {
            mode: Mode::Unavailable,
        }
    }
}

#[async_trait]
impl SignatureProvider for MockSigner {
    async fn sign(&self, key_id: &str, _message: &[u8]) -> Result<Vec<u8>> {
        match &self.mode {
            Mode::Random => {
                let mut signature = vec![0u8; 64];
                rand::rng().fill(&mut signature[..]);
                Ok(signature)
            }
            Mode::Fixed(signature) => Ok(signature.clone()),
            Mode::Unavailable => Err(OidcError::SigningUnavailable(format!(
                "no signature material returned for key {key_id}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn random_mode_signs_with_fresh_bytes() {
        let signer = MockSigner::new();
        let first = signer.sign("K1", b"input").await.unwrap();
        let second = signer.sign("K1", b"input").await.unwrap();

        assert_eq!(first.len(), 64);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn fixed_mode_returns_the_seeded_signature() {
        let signer = MockSigner::with_signature(b"sig".to_vec());
        assert_eq!(signer.sign("K1", b"input").await.unwrap(), b"sig");
    }

    #[tokio::test]
    async fn unavailable_mode_fails_with_signing_unavailable() {
        let signer = MockSigner::unavailable();
        let err = signer.sign("K1", b"input").await.unwrap_err();
        assert!(matches!(err, OidcError::SigningUnavailable(_)));
    }
}
