//! Habitability status command.

use super::output::{JsonReport, format_report};
use super::{CliError, OutputFormat};
use habitat::Habitat;
use habitat::persistence::load_grid;
use std::path::Path;

/// Execute the status command.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded.
pub(crate) fn execute(map: &Path, format: OutputFormat) -> Result<(), CliError> {
    let habitat = Habitat::new(load_grid(map)?);
    let report = habitat.report();

    match format {
        OutputFormat::Text => print!("{}", format_report(&habitat.grid, &report)),
        OutputFormat::Json => {
            let json = JsonReport::from_report(&habitat.grid, &report);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
