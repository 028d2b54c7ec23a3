//! External service contracts consumed by the verifier.
//!
//! Transport is the implementor's concern. The verifier applies no timeout
//! and no retry: an `Err` from any call is a fatal precondition failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of an external service call.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ServiceError {
    /// Description of the failure.
    pub message: String,
}

impl ServiceError {
    /// Creates a service error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of an external service call.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Identity of the credentials the deployment runs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// Account the caller belongs to.
    pub account: String,
}

/// Branches of a source repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchListing {
    /// Branch names.
    pub branches: Vec<String>,
}

/// One container repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Repository name.
    pub name: String,
}

/// Container repositories of an account and region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryListing {
    /// Repositories present.
    pub repositories: Vec<RepositorySummary>,
}

impl RepositoryListing {
    /// Returns `true` if a repository named `name` is listed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.repositories.iter().any(|r| r.name == name)
    }
}

/// Resolves the caller identity.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Returns the identity of the caller in `region`.
    async fn get_caller_identity(&self, region: &str) -> ServiceResult<CallerIdentity>;
}

/// Lists branches of a source repository.
#[async_trait]
pub trait BranchService: Send + Sync {
    /// Returns every branch of `repository`.
    async fn list_branches(&self, repository: &str) -> ServiceResult<BranchListing>;
}

/// Lists container repositories.
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Returns every container repository in `account` and `region`.
    async fn list_container_repositories(
        &self,
        account: &str,
        region: &str,
    ) -> ServiceResult<RepositoryListing>;
}
