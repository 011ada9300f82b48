//! Nonce store backend implementations.
//!
//! Concrete implementations of `oidc_stub_core::oidc::NonceRepository`,
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed store for tests and local runs
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one nonce store backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No nonce store backend selected. Enable 'inmemory' or 'dynamodb'. \
    Example: cargo build -p oidc_stub --features inmemory"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryNonceStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbNonceStore;
