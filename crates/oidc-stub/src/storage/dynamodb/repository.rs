//! DynamoDB nonce store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use oidc_stub_core::oidc::{NonceBinding, NonceRepository, Result};

use super::conversions::binding_to_item;
use super::error::map_put_item_error;

/// DynamoDB-backed nonce store.
pub struct DynamoDbNonceStore {
    client: Client,
    table_name: String,
}

impl DynamoDbNonceStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain and reads the table name
    /// from `TABLE_NAME` (defaults to "oidc-stub-nonces").
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        let table_name =
            std::env::var("TABLE_NAME").unwrap_or_else(|_| "oidc-stub-nonces".to_string());

        Self::new(client, table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl NonceRepository for DynamoDbNonceStore {
    async fn put_binding(&self, binding: &NonceBinding) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(binding_to_item(binding)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
