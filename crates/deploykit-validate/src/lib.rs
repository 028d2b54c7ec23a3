//! # deploykit-validate
//!
//! Static validation of a [`ConfigDocument`] before anything is verified
//! or provisioned.
//!
//! Every predicate runs; the caller receives either `Ok(())` or one
//! [`DeployError::Configuration`] listing each violated invariant.
//! Template presence is probed only once the document itself is consistent.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod container;
pub mod environment;

use deploykit_common::config::ConfigDocument;
use deploykit_common::error::{DeployError, Result, Violation};

pub use container::{container_violations, validate_containers};
pub use environment::{environment_violations, validate_environments};

/// Runs environment and container validation.
///
/// Violations from both passes are reported together.
///
/// # Errors
///
/// Returns [`DeployError::Configuration`] if any invariant is violated, or
/// [`DeployError::ArtifactNotFound`] if a container template is missing.
pub fn validate(doc: &ConfigDocument) -> Result<()> {
    validate_records(doc)?;
    container::check_templates(doc)
}

/// Runs environment and container record checks without touching the filesystem.
///
/// # Errors
///
/// Returns [`DeployError::Configuration`] listing every violated invariant.
pub fn validate_records(doc: &ConfigDocument) -> Result<()> {
    let mut violations = environment_violations(doc);
    violations.extend(container_violations(doc));
    into_result(doc, violations)
}

pub(crate) fn into_result(doc: &ConfigDocument, violations: Vec<Violation>) -> Result<()> {
    if violations.is_empty() {
        return Ok(());
    }
    for violation in &violations {
        tracing::warn!(app = %doc.app(), %violation, "configuration violation");
    }
    Err(DeployError::Configuration {
        app: doc.app().to_string(),
        violations,
    })
}

#[cfg(test)]
mod tests {
    use deploykit_common::config::{ContainerRecord, EnvironmentRecord, Target};

    use super::*;

    fn document() -> ConfigDocument {
        ConfigDocument {
            target: Target {
                app: "demo".into(),
                environment: "production".into(),
                branch: "main".into(),
                repository: "org/demo".into(),
            },
            environments: vec![EnvironmentRecord {
                name: "staging".into(),
                account: "111".into(),
                region: "eu-west-1".into(),
                domain: "example.com".into(),
            }],
            containers: vec![ContainerRecord {
                name: "api".into(),
                environment: "staging".into(),
                repository: String::new(),
                image_path: "images/api".into(),
                versions: vec!["1".into()],
                tag: "latest".into(),
            }],
        }
    }

    #[test]
    fn validate_records_reports_both_passes_together() {
        let Err(DeployError::Configuration { violations, .. }) = validate_records(&document())
        else {
            panic!("expected configuration error");
        };
        assert!(violations.iter().any(|v| matches!(v, Violation::TargetTierMatches { .. })));
        assert!(
            violations
                .iter()
                .any(|v| matches!(v, Violation::EmptyField { field: "repository", .. }))
        );
    }

    #[test]
    fn missing_container_fields_are_violations_not_parse_errors() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("deploykit.yaml");
        std::fs::write(
            &path,
            r"
target:
  app: demo
  environment: development
  branch: main
  repository: org/demo
environments:
  - name: development
    account: '111'
    region: eu-west-1
    domain: example.com
containers:
  - name: api
    environment: development
    versions: ['1']
",
        )
        .expect("failed to write config");
        let doc = ConfigDocument::load(&path).expect("load failed");
        let err = validate(&doc).unwrap_err();
        assert!(err.to_string().starts_with("[demo]"), "got: {err}");
        let DeployError::Configuration { violations, .. } = err else {
            panic!("expected configuration error");
        };
        let fields: Vec<_> = violations
            .iter()
            .filter_map(|v| match v {
                Violation::EmptyField { field, .. } => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["repository", "image path", "tag"]);
    }

    #[test]
    fn validate_stops_before_probing_templates() {
        let err = validate(&document()).unwrap_err();
        assert!(matches!(err, DeployError::Configuration { .. }), "got: {err}");
    }
}
