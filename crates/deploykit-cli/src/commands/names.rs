//! `dkit names` — Print derived names for one or more base tokens.

use clap::Args;
use deploykit_common::config::ConfigDocument;
use deploykit_naming::NameEngine;

use crate::output;

/// Arguments for the `names` command.
#[derive(Args, Debug)]
pub struct NamesArgs {
    /// Base tokens to derive names for.
    #[arg(required = true)]
    pub bases: Vec<String>,

    /// Also derive the domain under this base domain.
    #[arg(long)]
    pub domain: Option<String>,
}

/// Executes the `names` command.
///
/// # Errors
///
/// This command does not fail once the document is loaded.
pub fn execute(doc: &ConfigDocument, args: &NamesArgs) -> anyhow::Result<()> {
    let names = NameEngine::for_document(doc);
    println!(
        "{}",
        output::heading(&format!(
            "{} / {} / {} ({})",
            doc.target.app,
            doc.target.environment,
            doc.target.branch,
            names.durability()
        ))
    );
    for base in &args.bases {
        println!("  {base}");
        println!("      identifier: {}", names.identifier(base));
        println!("      resource:   {}", names.resource_name(base));
        println!("      parameter:  {}", names.resource_name_path(base));
    }
    if let Some(domain) = &args.domain {
        println!("  domain: {}", names.domain(domain));
    }
    Ok(())
}
