//! `dkit profile` — Print resolved profiles as JSON.

use clap::{Args, ValueEnum};
use deploykit_common::config::ConfigDocument;
use deploykit_profile::ProfileResolver;

/// Subsystem selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Subsystem {
    /// Networking profile.
    Network,
    /// Storage lifecycle profile.
    Storage,
    /// Database profile.
    Database,
    /// Compute and scaling profile.
    Compute,
}

/// Arguments for the `profile` command.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Print only one subsystem.
    #[arg(long, value_enum)]
    pub subsystem: Option<Subsystem>,
}

/// Executes the `profile` command.
///
/// # Errors
///
/// Returns an error if the target tier is unknown.
pub fn execute(doc: &ConfigDocument, args: &ProfileArgs) -> anyhow::Result<()> {
    let resolver = ProfileResolver::for_document(doc)?;
    let json = match args.subsystem {
        None => serde_json::to_string_pretty(&resolver.resolve_all())?,
        Some(Subsystem::Network) => serde_json::to_string_pretty(&resolver.network())?,
        Some(Subsystem::Storage) => serde_json::to_string_pretty(&resolver.storage())?,
        Some(Subsystem::Database) => serde_json::to_string_pretty(&resolver.database())?,
        Some(Subsystem::Compute) => serde_json::to_string_pretty(&resolver.compute())?,
    };
    println!("{json}");
    Ok(())
}
