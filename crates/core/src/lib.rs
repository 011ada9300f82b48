//! Core for the OIDC stub identity provider.
//!
//! Pure protocol logic with no HTTP or AWS types: the authorization-code
//! issuance data model, request validation, audit event construction, signed
//! token assembly, and the traits the server wires concrete backends into.

pub mod oidc;
pub mod scenarios;
pub mod token;
