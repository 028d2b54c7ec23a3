//! `dkit verify` — Verify external preconditions.

use std::path::PathBuf;

use clap::Args;
use deploykit_common::config::ConfigDocument;
use deploykit_verify::PreconditionVerifier;
use deploykit_verify::facts::StaticFacts;
use deploykit_verify::gateway::HttpGateway;

use crate::output;

/// Where verification answers come from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ServiceArgs {
    /// Answer every check from a static facts file (offline dry run).
    #[arg(long)]
    pub facts: Option<PathBuf>,

    /// Base URL of a verification gateway.
    #[arg(long)]
    pub gateway: Option<String>,
}

/// Arguments for the `verify` command.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Service backend.
    #[command(flatten)]
    pub services: ServiceArgs,
}

/// Executes the `verify` command.
///
/// # Errors
///
/// Returns an error if any precondition does not hold.
pub fn execute(doc: &ConfigDocument, args: &VerifyArgs) -> anyhow::Result<()> {
    println!("{}", output::heading(&format!("Verifying {}", doc.app())));
    verify_document(doc, &args.services)
}

/// Runs every precondition check on a single-threaded runtime.
///
/// # Errors
///
/// Returns an error if the runtime or backend cannot be set up, or if any
/// precondition does not hold.
pub fn verify_document(doc: &ConfigDocument, services: &ServiceArgs) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = if let Some(path) = &services.facts {
        let facts = StaticFacts::load(path)?;
        runtime.block_on(PreconditionVerifier::new(doc, &facts, &facts, &facts).verify_all())
    } else if let Some(url) = &services.gateway {
        let gateway = HttpGateway::new(url.as_str());
        runtime.block_on(PreconditionVerifier::new(doc, &gateway, &gateway, &gateway).verify_all())
    } else {
        anyhow::bail!("no verification backend selected: pass --facts or --gateway");
    };

    println!("{}", output::outcome("preconditions", outcome.is_ok()));
    outcome?;
    Ok(())
}
