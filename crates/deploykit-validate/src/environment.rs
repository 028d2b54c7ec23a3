//! Environment collection checks.

use std::collections::HashSet;

use deploykit_common::config::ConfigDocument;
use deploykit_common::error::{Result, Violation};
use deploykit_common::types::Tier;

/// Validates the environment collection against the target.
///
/// # Checks performed
///
/// 1. The target tier is a known tier.
/// 2. Every environment record names a known tier.
/// 3. No two records share a tier name.
/// 4. No two records share an account identifier.
/// 5. The target tier matches exactly one record.
///
/// # Errors
///
/// Returns a configuration error listing every failed check.
pub fn validate_environments(doc: &ConfigDocument) -> Result<()> {
    tracing::info!(app = %doc.app(), environments = doc.environments.len(), "validating environments");
    crate::into_result(doc, environment_violations(doc))
}

/// Collects every environment violation without failing early.
#[must_use]
pub fn environment_violations(doc: &ConfigDocument) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_target_tier(doc, &mut violations);
    check_known_tiers(doc, &mut violations);
    check_duplicate_tiers(doc, &mut violations);
    check_duplicate_accounts(doc, &mut violations);
    check_target_match(doc, &mut violations);
    violations
}

fn check_target_tier(doc: &ConfigDocument, violations: &mut Vec<Violation>) {
    if doc.target.environment.parse::<Tier>().is_err() {
        violations.push(Violation::UnknownTargetTier {
            name: doc.target.environment.clone(),
        });
    }
}

fn check_known_tiers(doc: &ConfigDocument, violations: &mut Vec<Violation>) {
    for env in doc.environments.iter().filter(|env| env.tier().is_none()) {
        violations.push(Violation::UnknownTier {
            name: env.name.clone(),
        });
    }
}

fn check_duplicate_tiers(doc: &ConfigDocument, violations: &mut Vec<Violation>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for env in &doc.environments {
        if !seen.insert(env.name.as_str()) && reported.insert(env.name.as_str()) {
            violations.push(Violation::DuplicateTier {
                name: env.name.clone(),
            });
        }
    }
}

fn check_duplicate_accounts(doc: &ConfigDocument, violations: &mut Vec<Violation>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for env in &doc.environments {
        if !seen.insert(env.account.as_str()) && reported.insert(env.account.as_str()) {
            violations.push(Violation::DuplicateAccount {
                account: env.account.clone(),
            });
        }
    }
}

fn check_target_match(doc: &ConfigDocument, violations: &mut Vec<Violation>) {
    let count = doc
        .environments
        .iter()
        .filter(|env| env.name == doc.target.environment)
        .count();
    if count != 1 {
        violations.push(Violation::TargetTierMatches {
            tier: doc.target.environment.clone(),
            count,
        });
    }
}
