//! KMS signing backend.

use async_trait::async_trait;
use aws_sdk_kms::primitives::Blob;
use aws_sdk_kms::types::{MessageType, SigningAlgorithmSpec};
use aws_sdk_kms::Client;

use oidc_stub_core::oidc::{OidcError, Result, SignatureProvider};

/// AWS KMS asymmetric signer.
///
/// Requests an ECDSA-over-SHA-256 signature over the raw signing input. The
/// key never leaves KMS; this process only ever sees the signature bytes.
pub struct KmsSigner {
    client: Client,
}

impl KmsSigner {
    /// Creates a new signer with the given KMS client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new signer from the AWS SDK default credential chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl SignatureProvider for KmsSigner {
    async fn sign(&self, key_id: &str, message: &[u8]) -> Result<Vec<u8>> {
        let response = self
            .client
            .sign()
            .key_id(key_id)
            .message(Blob::new(message))
            .message_type(MessageType::Raw)
            .signing_algorithm(SigningAlgorithmSpec::EcdsaSha256)
            .send()
            .await
            .map_err(|e| OidcError::SigningUnavailable(format!("KMS Sign failed: {e}")))?;

        match response.signature {
            Some(signature) if !signature.as_ref().is_empty() => Ok(signature.into_inner()),
            _ => Err(OidcError::SigningUnavailable(format!(
                "no signature material returned for key {key_id}"
            ))),
        }
    }
}
