//! Audit delivery backend implementations.
//!
//! Concrete implementations of `oidc_stub_core::oidc::AuditSink`, selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory-audit` (default): records events in memory for tests and local
//!   runs
//! - `sqs`: AWS SQS delivery using `aws-sdk-sqs`
//!
//! These features are mutually exclusive - only one audit backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory-audit", feature = "sqs"))]
compile_error!(
    "Features 'memory-audit' and 'sqs' are mutually exclusive. \
    Enable only one audit backend at a time."
);

#[cfg(not(any(feature = "memory-audit", feature = "sqs")))]
compile_error!(
    "No audit backend selected. Enable 'memory-audit' or 'sqs'. \
    Example: cargo build -p oidc_stub --features memory-audit"
);

#[cfg(feature = "memory-audit")]
mod memory;

#[cfg(feature = "sqs")]
mod sqs;

#[cfg(feature = "memory-audit")]
pub use memory::InMemoryAuditSink;

#[cfg(feature = "sqs")]
pub use sqs::SqsAuditSink;
