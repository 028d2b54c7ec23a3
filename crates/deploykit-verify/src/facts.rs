//! File-backed service implementation for offline dry runs.
//!
//! A facts file records what the external services would answer:
//!
//! ```yaml
//! account: "111111111111"
//! branches:
//!   org/demo: [main, feature-1]
//! repositories:
//!   - account: "111111111111"
//!     region: eu-west-1
//!     names: [demo-api]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use deploykit_common::error::{DeployError, Result};
use serde::{Deserialize, Serialize};

use crate::service::{
    BranchListing, BranchService, CallerIdentity, IdentityService, RepositoryListing,
    RepositoryService, RepositorySummary, ServiceError, ServiceResult,
};

/// Container repositories present in one account and region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryFacts {
    /// Account identifier.
    pub account: String,
    /// Region.
    pub region: String,
    /// Repository names.
    #[serde(default)]
    pub names: Vec<String>,
}

/// Static answers for every verification service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFacts {
    /// Account the caller belongs to, in every region.
    pub account: String,
    /// Branches keyed by source repository.
    #[serde(default)]
    pub branches: BTreeMap<String, Vec<String>>,
    /// Container repositories per account and region.
    #[serde(default)]
    pub repositories: Vec<RepositoryFacts>,
}

impl StaticFacts {
    /// Loads facts from a YAML or JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading verification facts");
        let content = std::fs::read_to_string(path).map_err(|e| DeployError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| DeployError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }
}

#[async_trait]
impl IdentityService for StaticFacts {
    async fn get_caller_identity(&self, _region: &str) -> ServiceResult<CallerIdentity> {
        Ok(CallerIdentity {
            account: self.account.clone(),
        })
    }
}

#[async_trait]
impl BranchService for StaticFacts {
    async fn list_branches(&self, repository: &str) -> ServiceResult<BranchListing> {
        self.branches
            .get(repository)
            .map(|branches| BranchListing {
                branches: branches.clone(),
            })
            .ok_or_else(|| ServiceError::new(format!("unknown source repository \"{repository}\"")))
    }
}

#[async_trait]
impl RepositoryService for StaticFacts {
    async fn list_container_repositories(
        &self,
        account: &str,
        region: &str,
    ) -> ServiceResult<RepositoryListing> {
        let repositories = self
            .repositories
            .iter()
            .filter(|facts| facts.account == account && facts.region == region)
            .flat_map(|facts| facts.names.iter())
            .map(|name| RepositorySummary { name: name.clone() })
            .collect();
        Ok(RepositoryListing { repositories })
    }
}
