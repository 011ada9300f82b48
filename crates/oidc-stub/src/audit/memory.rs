//! In-memory audit sink implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use oidc_stub_core::oidc::{AuditEvent, AuditSink, Result};

/// Audit sink that records delivered events in memory.
///
/// Used by tests to assert that emission happened (or didn't) and by local
/// runs where no queue exists. Events are lost when the sink is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditSink {
    delivered: Arc<RwLock<Vec<AuditEvent>>>,
}

impl InMemoryAuditSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events delivered so far, in order.
    pub async fn delivered(&self) -> Vec<AuditEvent> {
        let delivered = self.delivered.read().await;
        delivered.clone()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn deliver(&self, event: &AuditEvent) -> Result<()> {
        let mut delivered = self.delivered.write().await;
        delivered.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn records_events_in_order() {
        let sink = InMemoryAuditSink::new();
        let first = AuditEvent::code_issued("user-1", Utc::now());
        let second = AuditEvent::code_issued("user-2", Utc::now());

        sink.deliver(&first).await.unwrap();
        sink.deliver(&second).await.unwrap();

        let delivered = sink.delivered().await;
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].user.user_id, "user-1");
        assert_eq!(delivered[1].user.user_id, "user-2");
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let sink = InMemoryAuditSink::new();
        let clone = sink.clone();

        sink.deliver(&AuditEvent::code_issued("user-1", Utc::now()))
            .await
            .unwrap();
        assert_eq!(clone.delivered().await.len(), 1);
    }
}
