//! System-wide constants and default paths.

/// Default configuration document looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "deploykit.yaml";

/// Default path of the persisted stack lookup file.
pub const DEFAULT_LOOKUP_FILE: &str = "stack-lookup.json";

/// Template file expected inside every container's image path.
pub const TEMPLATE_FILE: &str = "Dockerfile.template";

/// Concrete build artifact rendered next to the template.
pub const RENDERED_FILE: &str = "Dockerfile";

/// Placeholder prefix substituted by the template renderer (`${VERSION_0}`, ...).
pub const VERSION_PLACEHOLDER_PREFIX: &str = "VERSION_";

/// Logical deployment units recorded in the lookup file when none are given.
pub const DEFAULT_UNITS: &[&str] = &[
    "Network",
    "Database",
    "Storage",
    "Compute",
    "Certificate",
    "Bastion",
];

/// Environment variable overriding the target tier at load time.
pub const ENV_ENVIRONMENT: &str = "DEPLOYKIT_ENVIRONMENT";

/// Environment variable overriding the target branch at load time.
pub const ENV_BRANCH: &str = "DEPLOYKIT_BRANCH";

/// Application name used in CLI output.
pub const APP_NAME: &str = "deploykit";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "dkit";
