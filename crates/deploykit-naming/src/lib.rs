//! # deploykit-naming
//!
//! Pure naming functions derived from the deployment target.
//!
//! - [`NameEngine`](engine::NameEngine): identifiers, resource names,
//!   parameter-store paths, and domains.
//! - [`casing`]: word-boundary capitalization and segment normalization.
//! - [`StackLookup`](lookup::StackLookup): the persisted logical-unit lookup file.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod casing;
pub mod engine;
pub mod lookup;

pub use engine::NameEngine;
pub use lookup::StackLookup;
