//! # deploykit-profile
//!
//! Environment-conditioned parameter profiles.
//!
//! Each subsystem owns one table keyed by [`Durability`]: staging and
//! production resolve the durable row, development the disposable row.
//! Profiles are plain values recomputed on every query, so independent
//! resource definitions asking for the same profile always agree.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod compute;
pub mod database;
pub mod network;
pub mod storage;

use deploykit_common::config::ConfigDocument;
use deploykit_common::error::{DeployError, Result, Violation};
use deploykit_common::types::{Durability, Tier};
use serde::Serialize;

pub use compute::ComputeProfile;
pub use database::DatabaseProfile;
pub use network::NetworkProfile;
pub use storage::StorageProfile;

/// Resolves profiles for the target tier of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileResolver {
    tier: Tier,
}

impl ProfileResolver {
    /// Creates a resolver for an explicit tier.
    #[must_use]
    pub const fn new(tier: Tier) -> Self {
        Self { tier }
    }

    /// Creates a resolver for the document's target tier.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the target names an unknown tier.
    pub fn for_document(doc: &ConfigDocument) -> Result<Self> {
        doc.target_tier()
            .map(Self::new)
            .ok_or_else(|| DeployError::Configuration {
                app: doc.app().to_string(),
                violations: vec![Violation::UnknownTargetTier {
                    name: doc.target.environment.clone(),
                }],
            })
    }

    /// Tier the profiles are resolved for.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Durability class driving every table lookup.
    #[must_use]
    pub const fn durability(&self) -> Durability {
        self.tier.durability()
    }

    /// Networking profile.
    #[must_use]
    pub const fn network(&self) -> NetworkProfile {
        network::resolve(self.durability())
    }

    /// Storage lifecycle profile.
    #[must_use]
    pub const fn storage(&self) -> StorageProfile {
        storage::resolve(self.durability())
    }

    /// Database profile.
    #[must_use]
    pub const fn database(&self) -> DatabaseProfile {
        database::resolve(self.durability())
    }

    /// Compute and scaling profile.
    #[must_use]
    pub const fn compute(&self) -> ComputeProfile {
        compute::resolve(self.durability())
    }

    /// Resolves every subsystem at once.
    #[must_use]
    pub fn resolve_all(&self) -> ResolvedProfiles {
        tracing::debug!(tier = %self.tier, durability = %self.durability(), "resolving profiles");
        ResolvedProfiles {
            tier: self.tier,
            durability: self.durability(),
            network: self.network(),
            storage: self.storage(),
            database: self.database(),
            compute: self.compute(),
        }
    }
}

/// Every subsystem profile for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedProfiles {
    /// Tier resolved for.
    pub tier: Tier,
    /// Durability class of the tier.
    pub durability: Durability,
    /// Networking profile.
    pub network: NetworkProfile,
    /// Storage lifecycle profile.
    pub storage: StorageProfile,
    /// Database profile.
    pub database: DatabaseProfile,
    /// Compute and scaling profile.
    pub compute: ComputeProfile,
}
