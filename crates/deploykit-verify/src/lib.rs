//! # deploykit-verify
//!
//! Verifies the external assumptions a deployment depends on before any
//! resource is provisioned.
//!
//! - [`service`]: contracts for the identity, branch-listing, and
//!   repository-listing services.
//! - [`verifier`]: [`PreconditionVerifier`], which issues every check
//!   concurrently, joins them, and reports every failure.
//! - [`facts`]: a static, file-backed implementation of the services.
//! - [`gateway`]: an HTTP implementation of the services.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod facts;
pub mod gateway;
pub mod service;
pub mod verifier;

pub use verifier::PreconditionVerifier;
