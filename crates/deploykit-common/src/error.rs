//! Unified error types for the deploykit workspace.
//!
//! Every error is fatal: nothing in the engine recovers locally, and each
//! deployment-facing variant renders with the application name as prefix so
//! the operator sees which deployment aborted.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single violated invariant of the configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `target.environment` is not one of development/staging/production.
    UnknownTargetTier {
        /// Offending tier name.
        name: String,
    },
    /// An environment record carries a tier name outside the enumeration.
    UnknownTier {
        /// Offending tier name.
        name: String,
    },
    /// Two environment records share a tier name.
    DuplicateTier {
        /// Repeated tier name.
        name: String,
    },
    /// Two environment records share an account identifier.
    DuplicateAccount {
        /// Repeated account identifier.
        account: String,
    },
    /// The target tier matches zero or several environment records.
    TargetTierMatches {
        /// Target tier name.
        tier: String,
        /// Number of matching records.
        count: usize,
    },
    /// A container references a tier with no valid environment record.
    UnknownContainerTier {
        /// Container logical name.
        container: String,
        /// Referenced tier name.
        tier: String,
    },
    /// A required container field is empty.
    EmptyField {
        /// Container logical name.
        container: String,
        /// Name of the empty field.
        field: &'static str,
    },
    /// Two container records share a logical name.
    DuplicateContainer {
        /// Repeated logical name.
        name: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTargetTier { name } => {
                write!(f, "target environment \"{name}\" is not a known tier")
            }
            Self::UnknownTier { name } => write!(f, "environment \"{name}\" is not a known tier"),
            Self::DuplicateTier { name } => write!(f, "duplicate environment tier: \"{name}\""),
            Self::DuplicateAccount { account } => {
                write!(f, "duplicate account identifier: \"{account}\"")
            }
            Self::TargetTierMatches { tier, count } => write!(
                f,
                "target environment \"{tier}\" matches {count} environment record(s), \
                 expected exactly 1"
            ),
            Self::UnknownContainerTier { container, tier } => write!(
                f,
                "container \"{container}\" references unknown environment \"{tier}\""
            ),
            Self::EmptyField { container, field } => {
                write!(f, "container \"{container}\" has an empty {field}")
            }
            Self::DuplicateContainer { name } => write!(f, "duplicate container name: \"{name}\""),
        }
    }
}

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The configuration document is malformed or inconsistent.
    #[error("[{app}] invalid configuration: {}", join(.violations))]
    Configuration {
        /// Application name from the target.
        app: String,
        /// Every invariant the document violates.
        violations: Vec<Violation>,
    },

    /// An expected template or build artifact is missing.
    #[error("[{app}] artifact not found: {}", .path.display())]
    ArtifactNotFound {
        /// Application name from the target.
        app: String,
        /// Path that was probed.
        path: PathBuf,
    },

    /// The caller identity belongs to a different account than the target environment.
    #[error("[{app}] identity mismatch: expected account {expected}, caller is in {actual}")]
    IdentityMismatch {
        /// Application name from the target.
        app: String,
        /// Account of the target environment.
        expected: String,
        /// Account reported by the identity service.
        actual: String,
    },

    /// The target branch does not exist in the source repository.
    #[error("[{app}] branch \"{branch}\" not found in repository \"{repository}\"")]
    BranchNotFound {
        /// Application name from the target.
        app: String,
        /// Source repository identifier.
        repository: String,
        /// Missing branch.
        branch: String,
    },

    /// A container repository does not exist in the target account.
    #[error(
        "[{app}] container repository \"{repository}\" not found in account {account} ({region})"
    )]
    RepositoryNotFound {
        /// Application name from the target.
        app: String,
        /// Account that was listed.
        account: String,
        /// Region that was listed.
        region: String,
        /// Missing repository name.
        repository: String,
    },

    /// An external verification service call failed.
    #[error("[{app}] {service} service call failed: {message}")]
    Service {
        /// Application name from the target.
        app: String,
        /// Which external service failed.
        service: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// More than one precondition check failed.
    #[error("[{app}] {} precondition check(s) failed: {}", .failures.len(), join(.failures))]
    Preconditions {
        /// Application name from the target.
        app: String,
        /// Every failure, in identity, branch, repository order.
        failures: Vec<DeployError>,
    },

    /// An I/O operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A document could not be parsed.
    #[error("failed to parse {}: {message}", .path.display())]
    Parse {
        /// Path of the document.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DeployError>;
