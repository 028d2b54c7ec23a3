//! Hierarchical configuration document model.
//!
//! A [`ConfigDocument`] is loaded once per process, optionally adjusted by
//! [`TargetOverrides`] at load time, and then only ever shared by reference.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DeployError, Result};
use crate::types::Tier;

/// The deployment context selected for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Application name.
    pub app: String,
    /// Tier name of the environment being deployed.
    pub environment: String,
    /// Source branch being deployed.
    pub branch: String,
    /// Source repository identifier (e.g. `org/name`).
    pub repository: String,
}

/// A deployable environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    /// Tier name; must be one of development/staging/production.
    pub name: String,
    /// Cloud account identifier.
    pub account: String,
    /// Cloud region.
    pub region: String,
    /// Domain suffix for this environment.
    pub domain: String,
}

impl EnvironmentRecord {
    /// Parses the record's tier name.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        self.name.parse().ok()
    }
}

/// A deployable container image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    /// Logical name, unique across the document.
    pub name: String,
    /// Tier name of the owning environment.
    pub environment: String,
    /// Container repository name.
    #[serde(default)]
    pub repository: String,
    /// Build-context directory holding the template.
    #[serde(default)]
    pub image_path: PathBuf,
    /// Version tokens substituted into the template by position.
    #[serde(default)]
    pub versions: Vec<String>,
    /// Image tag.
    #[serde(default)]
    pub tag: String,
}

impl ContainerRecord {
    /// Path of the template artifact inside the build context.
    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.image_path.join(crate::constants::TEMPLATE_FILE)
    }

    /// Path of the rendered build artifact inside the build context.
    #[must_use]
    pub fn rendered_path(&self) -> PathBuf {
        self.image_path.join(crate::constants::RENDERED_FILE)
    }
}

/// Target fields that may be replaced before the document is frozen.
#[derive(Debug, Clone, Default)]
pub struct TargetOverrides {
    /// Replacement tier name.
    pub environment: Option<String>,
    /// Replacement branch.
    pub branch: Option<String>,
}

/// Root configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Selected deployment context.
    pub target: Target,
    /// Environment records, in document order.
    #[serde(default)]
    pub environments: Vec<EnvironmentRecord>,
    /// Container records, in document order.
    #[serde(default)]
    pub containers: Vec<ContainerRecord>,
}

impl ConfigDocument {
    /// Loads a document from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not match the document shape.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading configuration document");
        let content = std::fs::read_to_string(path).map_err(|e| DeployError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc = Self::parse(path, &content)?;
        tracing::debug!(
            app = %doc.target.app,
            environment = %doc.target.environment,
            branch = %doc.target.branch,
            environments = doc.environments.len(),
            containers = doc.containers.len(),
            "configuration loaded"
        );
        Ok(doc)
    }

    /// Loads a document and applies target overrides before returning it.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`ConfigDocument::load`].
    pub fn load_with_overrides(path: &Path, overrides: TargetOverrides) -> Result<Self> {
        Self::load(path).map(|doc| doc.with_overrides(overrides))
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let parsed = match extension {
            "yaml" | "yml" => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            "json" => serde_json::from_str(content).map_err(|e| e.to_string()),
            other => Err(format!("unsupported configuration format \"{other}\"")),
        };
        parsed.map_err(|message| DeployError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Consumes the document and replaces the overridden target fields.
    #[must_use]
    pub fn with_overrides(mut self, overrides: TargetOverrides) -> Self {
        if let Some(environment) = overrides.environment {
            tracing::info!(from = %self.target.environment, to = %environment, "overriding target environment");
            self.target.environment = environment;
        }
        if let Some(branch) = overrides.branch {
            tracing::info!(from = %self.target.branch, to = %branch, "overriding target branch");
            self.target.branch = branch;
        }
        self
    }

    /// Application name of the target, used to prefix every error.
    #[must_use]
    pub fn app(&self) -> &str {
        &self.target.app
    }

    /// Parsed target tier, if the target names a known tier.
    #[must_use]
    pub fn target_tier(&self) -> Option<Tier> {
        self.target.environment.parse().ok()
    }

    /// The single environment record matching the target tier.
    ///
    /// Returns `None` when zero or several records match.
    #[must_use]
    pub fn target_environment(&self) -> Option<&EnvironmentRecord> {
        let mut matches = self
            .environments
            .iter()
            .filter(|env| env.name == self.target.environment);
        match (matches.next(), matches.next()) {
            (Some(env), None) => Some(env),
            _ => None,
        }
    }

    /// Container records owned by the target tier.
    pub fn target_containers(&self) -> impl Iterator<Item = &ContainerRecord> {
        self.containers
            .iter()
            .filter(|c| c.environment == self.target.environment)
    }
}
