//! Map validation command implementation.

use super::CliError;
use habitat::persistence::read_rows;
use habitat::{GridError, GridMap};
use std::fs;
use std::io::BufReader;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the map file cannot be read or is invalid.
pub(crate) fn execute(map: &Path) -> Result<(), CliError> {
    let file = fs::File::open(map)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", map.display())))?;
    let rows = read_rows(BufReader::new(file))?;

    println!("Validating: {}", map.display());
    println!();

    let rows_ok = !rows.is_empty();
    print_check("Non-empty", rows_ok);

    let grid = GridMap::construct(&rows);
    let shape_ok = !matches!(grid, Err(GridError::Format(_)));
    print_check("Rectangular with # boundary", rows_ok && shape_ok);
    print_check("Known symbols only", grid.is_ok());

    let grid = grid.map_err(|e| CliError::new(format!("Invalid map: {e}")))?;

    println!();
    println!("Summary:");
    println!("  Size:         {}x{}", grid.width(), grid.height());
    println!("  Occupants:    {}", grid.occupants().count());

    println!();
    println!("Validation successful!");

    Ok(())
}

/// Print a check result line.
fn print_check(name: &str, passed: bool) {
    let status = if passed { "OK" } else { "FAILED" };
    println!("  {name:.<30} {status}");
}
