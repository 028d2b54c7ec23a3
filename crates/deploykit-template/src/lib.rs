//! # deploykit-template
//!
//! Renders a container's `Dockerfile.template` into a concrete `Dockerfile`
//! by substituting `${VERSION_i}` with the i-th entry of the version list.
//!
//! Placeholders without a matching version are left verbatim; no other
//! substitution syntax exists.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use std::path::PathBuf;

use deploykit_common::config::{ConfigDocument, ContainerRecord};
use deploykit_common::constants::VERSION_PLACEHOLDER_PREFIX;
use deploykit_common::error::{DeployError, Result};

/// Substitutes every `${VERSION_i}` in `template` with `versions[i]`.
///
/// The template is scanned once; inserted versions are never rescanned.
#[must_use]
pub fn substitute<S: AsRef<str>>(template: &str, versions: &[S]) -> String {
    let open = format!("${{{VERSION_PLACEHOLDER_PREFIX}");
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((before, after)) = rest.split_once(open.as_str()) {
        rendered.push_str(before);
        let resolved = after
            .split_once('}')
            .and_then(|(index, tail)| version_at(versions, index).map(|v| (v, tail)));
        if let Some((version, tail)) = resolved {
            rendered.push_str(version);
            rest = tail;
        } else {
            rendered.push_str(&open);
            rest = after;
        }
    }
    rendered.push_str(rest);
    rendered
}

/// Version for a canonical decimal placeholder index, if one is supplied.
fn version_at<'a, S: AsRef<str>>(versions: &'a [S], index: &str) -> Option<&'a str> {
    index
        .parse::<usize>()
        .ok()
        .filter(|i| i.to_string() == index)
        .and_then(|i| versions.get(i))
        .map(AsRef::as_ref)
}

/// Renders one container's template next to it and returns the artifact path.
///
/// # Errors
///
/// Returns [`DeployError::ArtifactNotFound`] if the template is missing, or
/// an I/O error if it cannot be read or the artifact cannot be written.
pub fn render(app: &str, container: &ContainerRecord) -> Result<PathBuf> {
    let template_path = container.template_path();
    if !template_path.is_file() {
        return Err(DeployError::ArtifactNotFound {
            app: app.to_string(),
            path: template_path,
        });
    }
    let template = std::fs::read_to_string(&template_path).map_err(|e| DeployError::Io {
        path: template_path.clone(),
        source: e,
    })?;

    let rendered = substitute(&template, &container.versions);
    let output = container.rendered_path();
    std::fs::write(&output, rendered).map_err(|e| DeployError::Io {
        path: output.clone(),
        source: e,
    })?;
    tracing::info!(
        container = %container.name,
        versions = container.versions.len(),
        path = %output.display(),
        "rendered build template"
    );
    Ok(output)
}

/// Renders the template of every container owned by the target tier.
///
/// # Errors
///
/// Stops at the first container that fails to render.
pub fn render_all(doc: &ConfigDocument) -> Result<Vec<PathBuf>> {
    doc.target_containers()
        .map(|container| render(doc.app(), container))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use deploykit_common::config::Target;
    use deploykit_common::constants::{RENDERED_FILE, TEMPLATE_FILE};

    use super::*;

    fn container(name: &str, image_path: &Path, versions: &[&str]) -> ContainerRecord {
        ContainerRecord {
            name: name.into(),
            environment: "development".into(),
            repository: "demo-api".into(),
            image_path: image_path.to_path_buf(),
            versions: versions.iter().map(ToString::to_string).collect(),
            tag: "latest".into(),
        }
    }

    #[test]
    fn substitute_single_version() {
        assert_eq!(substitute("FROM x:${VERSION_0}", &["1.2.3"]), "FROM x:1.2.3");
    }

    #[test]
    fn substitute_leaves_out_of_range_placeholder() {
        assert_eq!(
            substitute("FROM x:${VERSION_0}\nARG y=${VERSION_1}", &["1.2.3"]),
            "FROM x:1.2.3\nARG y=${VERSION_1}"
        );
    }

    #[test]
    fn substitute_every_occurrence_by_position() {
        let template = "${VERSION_1} ${VERSION_0} ${VERSION_1} ${VERSION_10}";
        let versions: Vec<String> = (0..11).map(|i| format!("v{i}")).collect();
        assert_eq!(substitute(template, &versions), "v1 v0 v1 v10");
    }

    #[test]
    fn substituted_versions_are_not_rescanned() {
        assert_eq!(
            substitute("A=${VERSION_0} B=${VERSION_1}", &["${VERSION_1}", "2.0"]),
            "A=${VERSION_1} B=2.0"
        );
    }

    #[test]
    fn substitute_leaves_non_canonical_index() {
        assert_eq!(
            substitute("${VERSION_01} ${VERSION_} ${VERSION_0", &["1", "2"]),
            "${VERSION_01} ${VERSION_} ${VERSION_0"
        );
    }

    #[test]
    fn substitute_ignores_other_syntax() {
        assert_eq!(
            substitute("$VERSION_0 {VERSION_0} ${version_0}", &["1"]),
            "$VERSION_0 {VERSION_0} ${version_0}"
        );
    }

    #[test]
    fn render_writes_artifact_next_to_template() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        std::fs::write(dir.path().join(TEMPLATE_FILE), "FROM x:${VERSION_0}").expect("write");

        let output =
            render("demo", &container("api", dir.path(), &["1.2.3"])).expect("render failed");
        assert_eq!(output, dir.path().join(RENDERED_FILE));
        assert_eq!(std::fs::read_to_string(output).expect("read"), "FROM x:1.2.3");
    }

    #[test]
    fn render_missing_template_fails() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let err = render("demo", &container("api", dir.path(), &["1"])).unwrap_err();
        assert!(matches!(err, DeployError::ArtifactNotFound { .. }), "got: {err}");
        assert!(!dir.path().join(RENDERED_FILE).exists());
    }

    #[test]
    fn render_all_only_touches_target_containers() {
        let dev = tempfile::tempdir().expect("failed to create tempdir");
        let prod = tempfile::tempdir().expect("failed to create tempdir");
        for dir in [&dev, &prod] {
            std::fs::write(dir.path().join(TEMPLATE_FILE), "FROM x:${VERSION_0}").expect("write");
        }
        let mut prod_container = container("api-prod", prod.path(), &["2"]);
        prod_container.environment = "production".into();

        let doc = ConfigDocument {
            target: Target {
                app: "demo".into(),
                environment: "development".into(),
                branch: "main".into(),
                repository: "org/demo".into(),
            },
            environments: Vec::new(),
            containers: vec![container("api", dev.path(), &["1"]), prod_container],
        };

        let written = render_all(&doc).expect("render_all failed");
        assert_eq!(written, vec![dev.path().join(RENDERED_FILE)]);
        assert!(!prod.path().join(RENDERED_FILE).exists());
    }
}
