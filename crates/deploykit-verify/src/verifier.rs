//! Concurrent precondition verification.
//!
//! The identity check, the branch check, and one repository check per target
//! container are issued together and joined before returning. No check can
//! mask another: every failure is collected, and the deployment proceeds only
//! when all of them pass.

use deploykit_common::config::{ConfigDocument, ContainerRecord, EnvironmentRecord};
use deploykit_common::error::{DeployError, Result, Violation};
use futures::future::join_all;

use crate::service::{BranchService, IdentityService, RepositoryService, ServiceError};

/// Verifies external state against a configuration document.
pub struct PreconditionVerifier<'a> {
    doc: &'a ConfigDocument,
    identity: &'a dyn IdentityService,
    branches: &'a dyn BranchService,
    repositories: &'a dyn RepositoryService,
}

impl std::fmt::Debug for PreconditionVerifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreconditionVerifier")
            .field("app", &self.doc.app())
            .finish_non_exhaustive()
    }
}

impl<'a> PreconditionVerifier<'a> {
    /// Creates a verifier over shared references to the document and services.
    #[must_use]
    pub fn new(
        doc: &'a ConfigDocument,
        identity: &'a dyn IdentityService,
        branches: &'a dyn BranchService,
        repositories: &'a dyn RepositoryService,
    ) -> Self {
        Self {
            doc,
            identity,
            branches,
            repositories,
        }
    }

    /// Runs every check concurrently and waits for all of them.
    ///
    /// # Errors
    ///
    /// Returns the single failure if exactly one check fails, or
    /// [`DeployError::Preconditions`] with every failure (identity, branch,
    /// then repositories in document order) if several fail. Returns a
    /// configuration error without issuing any check when the target
    /// environment cannot be resolved.
    pub async fn verify_all(&self) -> Result<()> {
        let env = self.target_environment()?;
        tracing::info!(app = %self.doc.app(), account = %env.account, region = %env.region, "verifying preconditions");

        let repository_checks = join_all(
            self.doc
                .target_containers()
                .map(|container| self.check_repository(env, container)),
        );
        let (identity, branch, repositories) = tokio::join!(
            self.check_identity(env),
            self.check_branch(),
            repository_checks
        );

        let mut failures: Vec<DeployError> = [identity, branch]
            .into_iter()
            .chain(repositories)
            .filter_map(Result::err)
            .collect();

        if failures.len() > 1 {
            tracing::error!(app = %self.doc.app(), failures = failures.len(), "precondition verification failed");
            return Err(DeployError::Preconditions {
                app: self.doc.app().to_string(),
                failures,
            });
        }
        failures.pop().map_or_else(
            || {
                tracing::info!(app = %self.doc.app(), "all preconditions hold");
                Ok(())
            },
            Err,
        )
    }

    /// Checks that the caller belongs to the target environment's account.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::IdentityMismatch`] on a different account, or
    /// [`DeployError::Service`] if the identity service fails.
    pub async fn verify_identity(&self) -> Result<()> {
        let env = self.target_environment()?;
        self.check_identity(env).await
    }

    /// Checks that the target branch exists in the source repository.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::BranchNotFound`] if the branch is absent, or
    /// [`DeployError::Service`] if the branch service fails.
    pub async fn verify_branch(&self) -> Result<()> {
        self.check_branch().await
    }

    /// Checks that the container's repository exists in the target account.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::RepositoryNotFound`] if the repository is absent,
    /// or [`DeployError::Service`] if the repository service fails.
    pub async fn verify_repository(&self, container: &ContainerRecord) -> Result<()> {
        let env = self.target_environment()?;
        self.check_repository(env, container).await
    }

    fn target_environment(&self) -> Result<&'a EnvironmentRecord> {
        let doc = self.doc;
        doc.target_environment()
            .ok_or_else(|| DeployError::Configuration {
                app: doc.app().to_string(),
                violations: vec![Violation::TargetTierMatches {
                    tier: doc.target.environment.clone(),
                    count: doc
                        .environments
                        .iter()
                        .filter(|e| e.name == doc.target.environment)
                        .count(),
                }],
            })
    }

    async fn check_identity(&self, env: &EnvironmentRecord) -> Result<()> {
        tracing::debug!(region = %env.region, "identity check issued");
        let identity = self
            .identity
            .get_caller_identity(&env.region)
            .await
            .map_err(|e| self.service_error("identity", e))?;
        if identity.account != env.account {
            tracing::error!(expected = %env.account, actual = %identity.account, "identity mismatch");
            return Err(DeployError::IdentityMismatch {
                app: self.doc.app().to_string(),
                expected: env.account.clone(),
                actual: identity.account,
            });
        }
        tracing::debug!(account = %identity.account, "identity check passed");
        Ok(())
    }

    async fn check_branch(&self) -> Result<()> {
        let target = &self.doc.target;
        tracing::debug!(repository = %target.repository, branch = %target.branch, "branch check issued");
        let listing = self
            .branches
            .list_branches(&target.repository)
            .await
            .map_err(|e| self.service_error("branch listing", e))?;
        if !listing.branches.iter().any(|b| *b == target.branch) {
            tracing::error!(repository = %target.repository, branch = %target.branch, "branch not found");
            return Err(DeployError::BranchNotFound {
                app: self.doc.app().to_string(),
                repository: target.repository.clone(),
                branch: target.branch.clone(),
            });
        }
        tracing::debug!(branch = %target.branch, "branch check passed");
        Ok(())
    }

    async fn check_repository(
        &self,
        env: &EnvironmentRecord,
        container: &ContainerRecord,
    ) -> Result<()> {
        tracing::debug!(container = %container.name, repository = %container.repository, "repository check issued");
        let listing = self
            .repositories
            .list_container_repositories(&env.account, &env.region)
            .await
            .map_err(|e| self.service_error("repository listing", e))?;
        if !listing.contains(&container.repository) {
            tracing::error!(container = %container.name, repository = %container.repository, "container repository not found");
            return Err(DeployError::RepositoryNotFound {
                app: self.doc.app().to_string(),
                account: env.account.clone(),
                region: env.region.clone(),
                repository: container.repository.clone(),
            });
        }
        tracing::debug!(repository = %container.repository, "repository check passed");
        Ok(())
    }

    fn service_error(&self, service: &'static str, err: ServiceError) -> DeployError {
        tracing::error!(service, error = %err, "external service call failed");
        DeployError::Service {
            app: self.doc.app().to_string(),
            service,
            message: err.message,
        }
    }
}
