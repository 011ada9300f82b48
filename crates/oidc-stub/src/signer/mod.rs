//! Signing backend implementations.
//!
//! Concrete implementations of `oidc_stub_core::oidc::SignatureProvider`,
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `mock-signer` (default): produces unverifiable signature bytes for
//!   tests and local runs
//! - `kms`: AWS KMS asymmetric signing using `aws-sdk-kms`
//!
//! These features are mutually exclusive - only one signing backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "mock-signer", feature = "kms"))]
compile_error!(
    "Features 'mock-signer' and 'kms' are mutually exclusive. \
    Enable only one signing backend at a time."
);

#[cfg(not(any(feature = "mock-signer", feature = "kms")))]
compile_error!(
    "No signing backend selected. Enable 'mock-signer' or 'kms'. \
    Example: cargo build -p oidc_stub --features mock-signer"
);

#[cfg(feature = "mock-signer")]
mod mock;

#[cfg(feature = "kms")]
mod kms;

#[cfg(feature = "mock-signer")]
pub use mock::MockSigner;

#[cfg(feature = "kms")]
pub use kms::KmsSigner;
