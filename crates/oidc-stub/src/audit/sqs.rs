//! SQS audit sink implementation.

use async_trait::async_trait;
use aws_sdk_sqs::Client;

use oidc_stub_core::oidc::{AuditEvent, AuditSink, OidcError, Result};

/// SQS-backed audit sink.
///
/// One SendMessage attempt per event; the message body is the event's JSON
/// encoding so downstream consumers can parse it without coordination on
/// delivery order.
pub struct SqsAuditSink {
    client: Client,
    queue_url: String,
}

impl SqsAuditSink {
    /// Creates a new sink with the given SQS client and queue URL.
    pub fn new(client: Client, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }

    /// Creates a new sink from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain. `AUDIT_QUEUE_URL` has no
    /// sensible default; a deployment without it fails closed.
    pub async fn from_env() -> Result<Self> {
        let queue_url = std::env::var("AUDIT_QUEUE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .ok_or(OidcError::ConfigurationMissing("AUDIT_QUEUE_URL"))?;

        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Ok(Self::new(Client::new(&config), queue_url))
    }

    /// Get the queue URL.
    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }
}

#[async_trait]
impl AuditSink for SqsAuditSink {
    async fn deliver(&self, event: &AuditEvent) -> Result<()> {
        let body = serde_json::to_string(event)
            .map_err(|e| OidcError::AuditDelivery(format!("event encoding failed: {e}")))?;

        let result = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| OidcError::AuditDelivery(format!("SendMessage failed: {e}")))?;

        tracing::debug!(
            event_id = %event.event_id,
            message_id = result.message_id().unwrap_or("<none>"),
            "audit event delivered"
        );

        Ok(())
    }
}
