//! Integration tests driving the `dkit` binary end to end.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new(environment: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let image = dir.path().join("images").join("api");
        std::fs::create_dir_all(&image).expect("create image dir");
        std::fs::write(
            image.join("Dockerfile.template"),
            "FROM node:${VERSION_0}\nLABEL tool=${VERSION_1}\n",
        )
        .expect("write template");

        let config = format!(
            r"
target:
  app: demo
  environment: {environment}
  branch: feature-1
  repository: org/demo
environments:
  - name: development
    account: '111111111111'
    region: eu-west-1
    domain: example.com
  - name: production
    account: '222222222222'
    region: eu-west-1
    domain: example.com
containers:
  - name: api
    environment: {environment}
    repository: demo-api
    image_path: {}
    versions: ['20.11']
    tag: latest
",
            image.display()
        );
        std::fs::write(dir.path().join("deploykit.yaml"), config).expect("write config");
        std::fs::write(
            dir.path().join("facts.yaml"),
            r"
account: '111111111111'
branches:
  org/demo: [main, feature-1]
repositories:
  - account: '111111111111'
    region: eu-west-1
    names: [demo-api]
",
        )
        .expect("write facts");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dkit"))
            .arg("--config")
            .arg(self.path("deploykit.yaml"))
            .args(args)
            .env_remove("DEPLOYKIT_ENVIRONMENT")
            .env_remove("DEPLOYKIT_BRANCH")
            .current_dir(self.dir.path())
            .output()
            .expect("failed to run dkit")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn check_passes_for_consistent_development_target() {
    let ws = Workspace::new("development");
    let facts = ws.path("facts.yaml");
    let output = ws.run(&["check", "--facts", facts.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("preconditions"));
}

#[test]
fn check_fails_on_identity_mismatch() {
    let ws = Workspace::new("production");
    let facts = ws.path("facts.yaml");
    let output = ws.run(&["check", "--facts", facts.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("[demo] identity mismatch"), "stderr: {}", stderr(&output));
}

#[test]
fn validate_reports_missing_target_environment() {
    let ws = Workspace::new("staging");
    let output = ws.run(&["validate"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("matches 0 environment record(s)"));
}

#[test]
fn names_prints_branch_qualified_development_names() {
    let ws = Workspace::new("development");
    let output = ws.run(&["names", "CertStack", "--domain", "example.com"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("DemoDevelopmentFeature1CertStack"), "stdout: {text}");
    assert!(text.contains("demo-development-feature-1-CertStack"), "stdout: {text}");
    assert!(text.contains("/demo/development/feature-1/CertStack"), "stdout: {text}");
    assert!(text.contains("development-feature-1.example.com"), "stdout: {text}");
}

#[test]
fn branch_override_comes_from_environment() {
    let ws = Workspace::new("development");
    let output = Command::new(env!("CARGO_BIN_EXE_dkit"))
        .arg("--config")
        .arg(ws.path("deploykit.yaml"))
        .args(["names", "alb"])
        .env("DEPLOYKIT_BRANCH", "hotfix")
        .env_remove("DEPLOYKIT_ENVIRONMENT")
        .output()
        .expect("failed to run dkit");
    assert!(stdout(&output).contains("demo-development-hotfix-alb"));
}

#[test]
fn lookup_writes_default_units() {
    let ws = Workspace::new("production");
    let out = ws.path("lookup.json");
    let output = ws.run(&["lookup", "--output", out.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Certificate  DemoProductionFeature1Certificate"), "stdout: {text}");
    assert!(text.contains("Wrote 6 unit(s)"), "stdout: {text}");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("read")).expect("json");
    assert_eq!(json["Network"], "DemoProductionFeature1Network");
    assert_eq!(json.as_object().map(serde_json::Map::len), Some(6));
}

#[test]
fn render_substitutes_versions_and_keeps_unmatched() {
    let ws = Workspace::new("development");
    let output = ws.run(&["render"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let rendered = std::fs::read_to_string(
        Path::new(&ws.path("images")).join("api").join("Dockerfile"),
    )
    .expect("read rendered");
    assert_eq!(rendered, "FROM node:20.11\nLABEL tool=${VERSION_1}\n");
}

#[test]
fn profile_prints_compute_json() {
    let ws = Workspace::new("production");
    let output = ws.run(&["profile", "--subsystem", "compute"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(json["scaling"]["min_capacity"], 2);
    assert_eq!(json["scaling"]["max_capacity"], 8);
    assert_eq!(json["scaling"]["cpu_utilization"], 70);
}
