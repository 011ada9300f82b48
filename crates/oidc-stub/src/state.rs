//! Application state.

use std::sync::Arc;

use oidc_stub_core::oidc::{AuditSink, NonceRepository, SignatureProvider};

use crate::config::Config;

/// Shared state for the protocol handlers.
///
/// Backends are held as trait objects and injected at construction time so
/// tests can substitute fakes without touching process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub nonces: Arc<dyn NonceRepository>,
    pub audit: Arc<dyn AuditSink>,
    pub signer: Arc<dyn SignatureProvider>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        nonces: Arc<dyn NonceRepository>,
        audit: Arc<dyn AuditSink>,
        signer: Arc<dyn SignatureProvider>,
        config: Config,
    ) -> Self {
        Self {
            nonces,
            audit,
            signer,
            config,
        }
    }
}
