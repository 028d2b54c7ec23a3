//! `dkit render` — Render build templates of the target containers.

use clap::Args;
use deploykit_common::config::ConfigDocument;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if a template is missing or cannot be rendered.
pub fn execute(doc: &ConfigDocument, _args: &RenderArgs) -> anyhow::Result<()> {
    let written = deploykit_template::render_all(doc)?;
    for path in &written {
        println!("Rendered {}", path.display());
    }
    if written.is_empty() {
        println!("No containers for environment \"{}\".", doc.target.environment);
    }
    Ok(())
}
