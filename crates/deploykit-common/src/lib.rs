//! # deploykit-common
//!
//! Shared configuration document, tier classification, error definitions,
//! and constants used across the entire deploykit workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate. Every other component holds a shared reference to the
//! [`ConfigDocument`](config::ConfigDocument) loaded here and never mutates it.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
