//! CLI command definitions and dispatch.

pub mod check;
pub mod lookup;
pub mod names;
pub mod profile;
pub mod render;
pub mod validate;
pub mod verify;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use deploykit_common::config::{ConfigDocument, TargetOverrides};
use deploykit_common::constants;

/// deploykit — deployment configuration resolution and precondition checks.
#[derive(Parser, Debug)]
#[command(name = "dkit", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration document (YAML or JSON).
    #[arg(long, global = true, default_value = constants::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the target environment tier.
    #[arg(long, global = true, env = constants::ENV_ENVIRONMENT)]
    pub environment: Option<String>,

    /// Override the target branch.
    #[arg(long, global = true, env = constants::ENV_BRANCH)]
    pub branch: Option<String>,

    /// Log output format (logs go to stderr).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate environments, containers, and template presence.
    Validate(validate::ValidateArgs),
    /// Verify caller identity, source branch, and container repositories.
    Verify(verify::VerifyArgs),
    /// Validate, then verify: the full pre-deployment gate.
    Check(check::CheckArgs),
    /// Print the resolved profiles for the target tier as JSON.
    Profile(profile::ProfileArgs),
    /// Print identifiers, resource names, and parameter paths.
    Names(names::NamesArgs),
    /// Write the stack lookup file.
    Lookup(lookup::LookupArgs),
    /// Render the build templates of every target container.
    Render(render::RenderArgs),
}

impl Cli {
    /// Loads the configuration document with target overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    pub fn load_document(&self) -> anyhow::Result<ConfigDocument> {
        let overrides = TargetOverrides {
            environment: self.environment.clone(),
            branch: self.branch.clone(),
        };
        Ok(ConfigDocument::load_with_overrides(&self.config, overrides)?)
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let doc = cli.load_document()?;
    match cli.command {
        Command::Validate(args) => validate::execute(&doc, &args),
        Command::Verify(args) => verify::execute(&doc, &args),
        Command::Check(args) => check::execute(&doc, &args),
        Command::Profile(args) => profile::execute(&doc, &args),
        Command::Names(args) => names::execute(&doc, &args),
        Command::Lookup(args) => lookup::execute(&doc, &args),
        Command::Render(args) => render::execute(&doc, &args),
    }
}
