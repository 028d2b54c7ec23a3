//! Identifier and name derivation from the deployment target.
//!
//! Every function here is total and deterministic: the same target and base
//! always produce the same string. Dependent deployment units rely on that to
//! find each other by name across re-runs.

use deploykit_common::config::{ConfigDocument, Target};
use deploykit_common::types::{Durability, Tier};

use crate::casing::{normalize_segment, pascal_case};

/// Derives names scoped to one application, tier, and branch.
#[derive(Debug, Clone)]
pub struct NameEngine {
    app: String,
    tier: String,
    branch: String,
    durability: Durability,
}

impl NameEngine {
    /// Creates an engine for the given target.
    ///
    /// A target naming an unknown tier is treated as disposable, so its names
    /// stay branch-qualified.
    #[must_use]
    pub fn new(target: &Target) -> Self {
        let durability = target
            .environment
            .parse::<Tier>()
            .map_or(Durability::Disposable, |tier| tier.durability());
        Self {
            app: normalize_segment(&target.app),
            tier: normalize_segment(&target.environment),
            branch: normalize_segment(&target.branch),
            durability,
        }
    }

    /// Creates an engine for the document's target.
    #[must_use]
    pub fn for_document(doc: &ConfigDocument) -> Self {
        Self::new(&doc.target)
    }

    /// Durability class the names are derived for.
    #[must_use]
    pub const fn durability(&self) -> Durability {
        self.durability
    }

    /// Logical identifier `AppTierBranchBase`, unique per app, tier, and branch.
    ///
    /// Target segments are capitalized on hyphen boundaries; `base` is appended
    /// verbatim.
    #[must_use]
    pub fn identifier(&self, base: &str) -> String {
        format!(
            "{}{}{}{base}",
            pascal_case(&self.app),
            pascal_case(&self.tier),
            pascal_case(&self.branch)
        )
    }

    /// Physical resource name.
    ///
    /// Durable tiers share one deployment per tier (`app-tier-base`); disposable
    /// tiers are branch-qualified (`app-tier-branch-base`).
    #[must_use]
    pub fn resource_name(&self, base: &str) -> String {
        if self.durability.is_durable() {
            format!("{}-{}-{base}", self.app, self.tier)
        } else {
            format!("{}-{}-{}-{base}", self.app, self.tier, self.branch)
        }
    }

    /// Parameter-store path `/app/tier/branch/base` used for cross-unit handoff.
    #[must_use]
    pub fn resource_name_path(&self, base: &str) -> String {
        format!("/{}/{}/{}/{base}", self.app, self.tier, self.branch)
    }

    /// Fully qualified domain under `base_domain`.
    #[must_use]
    pub fn domain(&self, base_domain: &str) -> String {
        if self.durability.is_durable() {
            format!("{}.{base_domain}", self.tier)
        } else {
            format!("{}-{}.{base_domain}", self.tier, self.branch)
        }
    }
}
