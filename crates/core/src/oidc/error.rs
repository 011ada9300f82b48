use thiserror::Error;

#[derive(Debug, Error)]
pub enum OidcError {
    #[error("missing required parameter: {0}")]
    InvalidRequest(&'static str),

    #[error("nonce store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("signing service unavailable: {0}")]
    SigningUnavailable(String),

    #[error("audit delivery failed: {0}")]
    AuditDelivery(String),

    #[error("missing required configuration: {0}")]
    ConfigurationMissing(&'static str),

    #[error("token encoding failed: {0}")]
    TokenEncoding(String),
}
