//! `dkit validate` — Validate the configuration document.

use clap::Args;
use deploykit_common::config::ConfigDocument;

use crate::output;

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Skip the template presence probe.
    #[arg(long)]
    pub skip_templates: bool,
}

/// Executes the `validate` command.
///
/// Prints every violated invariant, then fails if there was any.
///
/// # Errors
///
/// Returns an error if the document is invalid or a template is missing.
pub fn execute(doc: &ConfigDocument, args: &ValidateArgs) -> anyhow::Result<()> {
    println!("{}", output::heading(&format!("Validating {}", doc.app())));
    report(doc);
    if args.skip_templates {
        deploykit_validate::validate_records(doc)?;
    } else {
        deploykit_validate::validate(doc)?;
        println!("{}", output::outcome("templates", true));
    }
    Ok(())
}

/// Prints the outcome of each record pass with its violations.
pub fn report(doc: &ConfigDocument) {
    let environments = deploykit_validate::environment_violations(doc);
    let containers = deploykit_validate::container_violations(doc);
    println!("{}", output::outcome("environments", environments.is_empty()));
    println!("{}", output::outcome("containers", containers.is_empty()));
    for violation in environments.iter().chain(&containers) {
        println!("      {violation}");
    }
}
