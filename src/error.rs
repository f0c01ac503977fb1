//! Error types for grid loading and unit interaction.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::{Category, Coord};

/// Shape violations detected while constructing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The grid has no rows, or its rows have no columns.
    #[error("grid is empty")]
    Empty,
    /// A row differs in length from the first row.
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The first or last row contains something other than the boundary marker.
    #[error("row {row} must be entirely boundary")]
    BoundaryRow {
        /// Index of the offending row.
        row: usize,
    },
    /// A row does not start and end with the boundary marker.
    #[error("row {row} must start and end with boundary")]
    BoundaryColumn {
        /// Index of the offending row.
        row: usize,
    },
}

/// Errors raised while loading or constructing a grid.
///
/// All of these are fatal for the attempt: no partially valid grid is ever
/// produced, the caller has to retry with new input.
#[derive(Debug, Error)]
pub enum GridError {
    /// The grid text is not a well-formed bounded rectangle.
    #[error("invalid file content: {0}")]
    Format(#[from] FormatError),
    /// An interior symbol is not in the entity catalog.
    #[error("unknown item {symbol:?} found at ({x}, {y})")]
    UnknownEntity {
        /// The unrecognised character.
        symbol: char,
        /// Column of the character.
        x: usize,
        /// Row of the character.
        y: usize,
    },
    /// The grid source does not exist.
    #[error("file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// Any other I/O failure while reading or writing grid text.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A resolver step was requested for a coordinate without a matching unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {expected:?} at ({}, {})", .at.x, .at.y)]
pub struct StepError {
    /// Coordinate the step was requested for.
    pub at: Coord,
    /// Category the resolver drives.
    pub expected: Category,
}

/// Result type for grid construction and loading.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input stream ended.
    #[error("input closed")]
    InputClosed,
    /// A resolver was driven on a coordinate without its unit.
    #[error(transparent)]
    Step(#[from] StepError),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
