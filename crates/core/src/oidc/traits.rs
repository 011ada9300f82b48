use async_trait::async_trait;

use super::error::OidcError;
use super::types::{AuditEvent, NonceBinding};

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, OidcError>;

/// Write side of the nonce store.
///
/// Each write is keyed by a freshly generated code, so implementations need
/// no coordination between concurrent calls; last-write-wins on a (never
/// expected) duplicate key is acceptable. Redemption and expiry of bindings
/// belong to the backing store, not this system.
#[async_trait]
pub trait NonceRepository: Send + Sync {
    /// Persist a binding. Failure maps to [`OidcError::StoreUnavailable`]
    /// and is not retried; the authorize call fails with it.
    async fn put_binding(&self, binding: &NonceBinding) -> Result<()>;
}

/// Fire-and-forget delivery of audit events to the analytics pipeline.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Attempt delivery once. Errors surface as
    /// [`OidcError::AuditDelivery`]; the caller logs and drops them rather
    /// than failing the request.
    async fn deliver(&self, event: &AuditEvent) -> Result<()>;
}

/// External asymmetric signer the token endpoint delegates to.
///
/// This is the entire security boundary of token issuance; no signing
/// happens in-process.
#[async_trait]
pub trait SignatureProvider: Send + Sync {
    /// Produce an ECDSA-over-SHA-256 signature for `message` with the named
    /// key. An empty or absent signature is
    /// [`OidcError::SigningUnavailable`], fatal to the token call.
    async fn sign(&self, key_id: &str, message: &[u8]) -> Result<Vec<u8>>;
}
