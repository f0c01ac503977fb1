//! Grid and coordinate types.

use serde::Serialize;

use crate::error::{FormatError, GridError, GridResult};
use crate::game::{BOUNDARY, Direction, EMPTY, Entity, is_known_symbol};

/// A coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: usize,
    /// Y coordinate (row).
    pub y: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The coordinate one step along `direction`.
    ///
    /// Returns `None` if the step would leave the non-negative quadrant.
    #[must_use]
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let x = self.x.checked_add_signed(isize::from(direction.dx))?;
        let y = self.y.checked_add_signed(isize::from(direction.dy))?;
        Some(Self::new(x, y))
    }
}

/// The validated terrain grid.
///
/// Rows are stored as characters in row-major order. Construction checks the
/// shape and the symbols once; afterwards mutation is unchecked and callers
/// are responsible for only making legal moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Symbols in row-major order.
    cells: Vec<char>,
}

impl GridMap {
    /// Validate `rows` and build a grid from them.
    ///
    /// Checks run in order: uniform row length, boundary first and last rows,
    /// boundary first and last columns, known interior symbols. The first
    /// failing check is reported.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Format`] for shape violations and
    /// [`GridError::UnknownEntity`] for an unregistered symbol.
    pub fn construct<S: AsRef<str>>(rows: &[S]) -> GridResult<Self> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();

        let Some(first) = rows.first() else {
            return Err(FormatError::Empty.into());
        };
        let width = first.len();

        for (row, line) in rows.iter().enumerate() {
            if line.len() != width {
                return Err(FormatError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                }
                .into());
            }
        }

        if width == 0 {
            return Err(FormatError::Empty.into());
        }

        let last_row = rows.len() - 1;
        for row in [0, last_row] {
            if rows[row].iter().any(|&c| c != BOUNDARY) {
                return Err(FormatError::BoundaryRow { row }.into());
            }
        }

        for (row, line) in rows.iter().enumerate() {
            if line[0] != BOUNDARY || line[width - 1] != BOUNDARY {
                return Err(FormatError::BoundaryColumn { row }.into());
            }
        }

        for (y, line) in rows.iter().enumerate() {
            if let Some(x) = line.iter().position(|&c| !is_known_symbol(c)) {
                return Err(GridError::UnknownEntity {
                    symbol: line[x],
                    x,
                    y,
                });
            }
        }

        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate is within the grid.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.y * self.width + coord.x)
    }

    /// Symbol at `coord`.
    ///
    /// Coordinates outside the grid read as the boundary marker.
    #[must_use]
    pub fn symbol_at(&self, coord: Coord) -> char {
        self.index(coord).map_or(BOUNDARY, |idx| self.cells[idx])
    }

    /// Symbol one step from `coord` along `direction`.
    #[must_use]
    pub fn symbol_toward(&self, coord: Coord, direction: Direction) -> char {
        coord
            .step(direction)
            .map_or(BOUNDARY, |target| self.symbol_at(target))
    }

    /// Entity standing at `coord`, if any.
    #[must_use]
    pub fn entity_at(&self, coord: Coord) -> Option<Entity> {
        Entity::lookup(self.symbol_at(coord))
    }

    /// Whether `coord` holds the empty marker.
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.symbol_at(coord) == EMPTY
    }

    /// Overwrite the symbol at `coord`.
    ///
    /// No legality check is made. Returns `false` if the coordinate is out of
    /// bounds.
    pub fn set_symbol(&mut self, coord: Coord, symbol: char) -> bool {
        if let Some(idx) = self.index(coord) {
            self.cells[idx] = symbol;
            true
        } else {
            false
        }
    }

    /// Move the occupant at `from` one step along `direction`.
    ///
    /// The source becomes empty and the target is overwritten with the
    /// occupant's symbol. Returns the target coordinate, or `None` without
    /// touching the grid if the target lies outside it.
    pub fn move_symbol(&mut self, from: Coord, direction: Direction) -> Option<Coord> {
        let to = from.step(direction).filter(|&c| self.in_bounds(c))?;
        let symbol = self.symbol_at(from);
        self.set_symbol(from, EMPTY);
        self.set_symbol(to, symbol);
        Some(to)
    }

    /// Iterate over all coordinates and symbols in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &symbol)| (Coord::new(idx % width, idx / width), symbol))
    }

    /// Iterate over all occupants in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Coord, Entity)> + '_ {
        self.iter()
            .filter_map(|(coord, symbol)| Entity::lookup(symbol).map(|e| (coord, e)))
    }

    /// Coordinates of every occupant matching `filter`, in row-major order.
    #[must_use]
    pub fn positions_of(&self, filter: impl Fn(Entity) -> bool) -> Vec<(Coord, Entity)> {
        self.occupants().filter(|&(_, e)| filter(e)).collect()
    }

    /// The grid as text rows, exactly as constructed plus any mutation.
    #[must_use]
    pub fn serialize(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect())
            .collect()
    }
}
