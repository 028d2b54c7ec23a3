//! `dkit check` — The full pre-deployment gate.

use clap::Args;
use deploykit_common::config::ConfigDocument;

use super::verify::{ServiceArgs, verify_document};
use crate::output;

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Service backend.
    #[command(flatten)]
    pub services: ServiceArgs,
}

/// Executes the `check` command.
///
/// Verification starts only once validation has passed.
///
/// # Errors
///
/// Returns the first failing gate.
pub fn execute(doc: &ConfigDocument, args: &CheckArgs) -> anyhow::Result<()> {
    println!("{}", output::heading(&format!("Checking {}", doc.app())));
    super::validate::report(doc);
    deploykit_validate::validate(doc)?;
    println!("{}", output::outcome("templates", true));
    verify_document(doc, &args.services)?;
    tracing::info!(app = %doc.app(), "deployment gate passed");
    Ok(())
}
