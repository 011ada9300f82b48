//! DynamoDB nonce store backend.
//!
//! Persists nonce bindings with `aws-sdk-dynamodb`. Expiry of bindings is a
//! table capability (TTL on the `remove_at` attribute), not application
//! logic.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbNonceStore;
