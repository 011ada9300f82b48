//! In-memory nonce store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use oidc_stub_core::oidc::{NonceBinding, NonceRepository, Result};

/// In-memory nonce store for testing and local runs.
///
/// Bindings live in a HashMap behind `Arc<RwLock<_>>` keyed by code. Nothing
/// expires; data is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNonceStore {
    bindings: Arc<RwLock<HashMap<String, NonceBinding>>>,
}

impl InMemoryNonceStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a binding by code.
    pub async fn get(&self, code: &str) -> Option<NonceBinding> {
        let bindings = self.bindings.read().await;
        bindings.get(code).cloned()
    }

    /// Number of stored bindings.
    pub async fn len(&self) -> usize {
        let bindings = self.bindings.read().await;
        bindings.len()
    }

    /// Whether the store holds no bindings.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl NonceRepository for InMemoryNonceStore {
    async fn put_binding(&self, binding: &NonceBinding) -> Result<()> {
        let mut bindings = self.bindings.write().await;
        bindings.insert(binding.code.clone(), binding.clone());
        Ok(())
    }
}
