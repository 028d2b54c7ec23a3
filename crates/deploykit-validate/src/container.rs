//! Container collection checks and template presence probe.

use std::collections::HashSet;

use deploykit_common::config::{ConfigDocument, ContainerRecord};
use deploykit_common::error::{DeployError, Result, Violation};
use deploykit_common::types::Tier;

/// Validates every container record.
///
/// # Checks performed
///
/// 1. The tier reference is a known tier with an environment record.
/// 2. Repository, image path, version list, and tag are non-empty.
/// 3. No two records share a logical name.
/// 4. The template artifact exists in each image path.
///
/// # Errors
///
/// Returns a configuration error listing every failed record check, or
/// [`DeployError::ArtifactNotFound`] for the first missing template once the
/// records themselves are valid.
pub fn validate_containers(doc: &ConfigDocument) -> Result<()> {
    tracing::info!(app = %doc.app(), containers = doc.containers.len(), "validating containers");
    crate::into_result(doc, container_violations(doc))?;
    check_templates(doc)
}

/// Collects every container record violation without failing early.
#[must_use]
pub fn container_violations(doc: &ConfigDocument) -> Vec<Violation> {
    let known: HashSet<&str> = doc
        .environments
        .iter()
        .filter(|env| env.tier().is_some())
        .map(|env| env.name.as_str())
        .collect();

    let mut violations = Vec::new();
    for container in &doc.containers {
        check_tier_reference(container, &known, &mut violations);
        check_required_fields(container, &mut violations);
    }
    check_duplicate_names(doc, &mut violations);
    violations
}

fn check_tier_reference(
    container: &ContainerRecord,
    known: &HashSet<&str>,
    violations: &mut Vec<Violation>,
) {
    let valid = container.environment.parse::<Tier>().is_ok()
        && known.contains(container.environment.as_str());
    if !valid {
        violations.push(Violation::UnknownContainerTier {
            container: container.name.clone(),
            tier: container.environment.clone(),
        });
    }
}

fn check_required_fields(container: &ContainerRecord, violations: &mut Vec<Violation>) {
    let empty = [
        ("repository", container.repository.trim().is_empty()),
        ("image path", container.image_path.as_os_str().is_empty()),
        ("version list", container.versions.is_empty()),
        ("tag", container.tag.trim().is_empty()),
    ];
    for (field, is_empty) in empty {
        if is_empty {
            violations.push(Violation::EmptyField {
                container: container.name.clone(),
                field,
            });
        }
    }
}

fn check_duplicate_names(doc: &ConfigDocument, violations: &mut Vec<Violation>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for container in &doc.containers {
        if !seen.insert(container.name.as_str()) && reported.insert(container.name.as_str()) {
            violations.push(Violation::DuplicateContainer {
                name: container.name.clone(),
            });
        }
    }
}

pub(crate) fn check_templates(doc: &ConfigDocument) -> Result<()> {
    for container in &doc.containers {
        let path = container.template_path();
        if !path.is_file() {
            tracing::error!(app = %doc.app(), container = %container.name, path = %path.display(), "template missing");
            return Err(DeployError::ArtifactNotFound {
                app: doc.app().to_string(),
                path,
            });
        }
        tracing::debug!(container = %container.name, path = %path.display(), "template present");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use deploykit_common::config::{EnvironmentRecord, Target};

    use super::*;

    fn container(name: &str, image_path: &Path) -> ContainerRecord {
        ContainerRecord {
            name: name.into(),
            environment: "development".into(),
            repository: "demo-api".into(),
            image_path: image_path.to_path_buf(),
            versions: vec!["1.2.3".into()],
            tag: "latest".into(),
        }
    }

    fn document(containers: Vec<ContainerRecord>) -> ConfigDocument {
        ConfigDocument {
            target: Target {
                app: "demo".into(),
                environment: "development".into(),
                branch: "main".into(),
                repository: "org/demo".into(),
            },
            environments: vec![EnvironmentRecord {
                name: "development".into(),
                account: "111".into(),
                region: "eu-west-1".into(),
                domain: "dev.example.com".into(),
            }],
            containers,
        }
    }

    fn image_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        std::fs::write(
            dir.path().join(deploykit_common::constants::TEMPLATE_FILE),
            "FROM node:${VERSION_0}\n",
        )
        .expect("failed to write template");
        dir
    }

    #[test]
    fn validate_well_formed_containers_succeeds() {
        let dir = image_dir();
        let doc = document(vec![container("api", dir.path()), container("worker", dir.path())]);
        assert!(validate_containers(&doc).is_ok());
    }

    #[test]
    fn duplicate_container_name_fails() {
        let dir = image_dir();
        let doc = document(vec![container("api", dir.path()), container("api", dir.path())]);
        let err = validate_containers(&doc).unwrap_err();
        assert!(err.to_string().contains("duplicate container name: \"api\""), "got: {err}");
    }

    #[test]
    fn unknown_tier_reference_fails() {
        let dir = image_dir();
        let mut api = container("api", dir.path());
        api.environment = "production".into();
        assert_eq!(
            container_violations(&document(vec![api])),
            vec![Violation::UnknownContainerTier {
                container: "api".into(),
                tier: "production".into()
            }]
        );
    }

    #[test]
    fn empty_fields_are_each_reported() {
        let api = ContainerRecord {
            repository: String::new(),
            image_path: PathBuf::new(),
            versions: Vec::new(),
            tag: " ".into(),
            ..container("api", Path::new("unused"))
        };
        let fields: Vec<_> = container_violations(&document(vec![api]))
            .into_iter()
            .filter_map(|v| match v {
                Violation::EmptyField { field, .. } => Some(field),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["repository", "image path", "version list", "tag"]);
    }

    #[test]
    fn missing_template_is_artifact_not_found() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let doc = document(vec![container("api", dir.path())]);
        let err = validate_containers(&doc).unwrap_err();
        assert!(matches!(err, DeployError::ArtifactNotFound { .. }), "got: {err}");
        assert!(err.to_string().starts_with("[demo] artifact not found"), "got: {err}");
    }

    #[test]
    fn record_violations_take_precedence_over_missing_templates() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let doc = document(vec![container("api", dir.path()), container("api", dir.path())]);
        let err = validate_containers(&doc).unwrap_err();
        assert!(matches!(err, DeployError::Configuration { .. }), "got: {err}");
    }
}
