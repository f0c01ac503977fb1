//! Loading and saving grid text files.
//!
//! A grid file holds one row per line. Lines may end in `\n` or `\r\n`;
//! saved files always use `\n`.

use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{GridError, GridResult};
use crate::game::GridMap;

/// Read grid rows from `reader`, stripping line terminators.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_rows<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|mut row| {
                if row.ends_with('\r') {
                    row.pop();
                }
                row
            })
        })
        .collect()
}

/// Load and validate the grid stored at `path`.
///
/// # Errors
///
/// Returns [`GridError::SourceNotFound`] if the file does not exist, an I/O
/// error if it cannot be read, or the construction error if its content is
/// not a valid grid.
pub fn load_grid(path: &Path) -> GridResult<GridMap> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(GridError::SourceNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let rows = read_rows(BufReader::new(file))?;
    let grid = GridMap::construct(&rows)?;
    tracing::info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "grid loaded"
    );
    Ok(grid)
}

/// Write `grid` to `path`, one row per line.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_grid(grid: &GridMap, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    for row in grid.serialize() {
        writer.write_all(row.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), "grid saved");
    Ok(())
}
