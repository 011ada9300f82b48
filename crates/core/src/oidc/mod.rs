mod error;
mod functions;
mod traits;
mod types;
mod validation;

pub use error::OidcError;
pub use functions::{generate_code, removal_deadline, resolve_user_id};
pub use traits::{AuditSink, NonceRepository, Result, SignatureProvider};
pub use types::{
    AuditEvent, AuditUser, AuthorizeParams, AuthorizeRequest, NonceBinding, TokenResponse,
    AUTH_CODE_ISSUED_EVENT, BINDING_TTL_SECS, DEFAULT_SCENARIO, PLACEHOLDER_USER_ID,
    RELYING_PARTY_CLIENT_ID,
};
pub use validation::validate_authorize;
