//! `dkit lookup` — Write the stack lookup file.

use std::path::PathBuf;

use clap::Args;
use deploykit_common::config::ConfigDocument;
use deploykit_common::constants;
use deploykit_naming::{NameEngine, StackLookup};

/// Arguments for the `lookup` command.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Output path of the lookup file.
    #[arg(short, long, default_value = constants::DEFAULT_LOOKUP_FILE)]
    pub output: PathBuf,

    /// Logical unit to record (repeatable); defaults to the standard units.
    #[arg(long = "unit")]
    pub units: Vec<String>,
}

/// Executes the `lookup` command.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn execute(doc: &ConfigDocument, args: &LookupArgs) -> anyhow::Result<()> {
    let names = NameEngine::for_document(doc);
    let lookup = if args.units.is_empty() {
        StackLookup::build(&names, constants::DEFAULT_UNITS)
    } else {
        StackLookup::build(&names, &args.units)
    };
    lookup.write(&args.output)?;
    for (unit, identifier) in lookup.iter() {
        println!("  {unit:<12} {identifier}");
    }
    println!("Wrote {} unit(s) to {}", lookup.len(), args.output.display());
    Ok(())
}
