//! Compass directions selected from the direction menu.

/// A unit offset on the grid.
///
/// Menu keys map as follows: `1` north, `2` west, `3` east, `4` south,
/// `5` north-west, `6` south-west, `7` north-east, `8` south-east and
/// `0` the null offset (which the session treats as "go back").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Column offset, -1..=1.
    pub dx: i8,
    /// Row offset, -1..=1 (negative is north).
    pub dy: i8,
}

impl Direction {
    /// The null offset.
    pub const STAY: Self = Self::new(0, 0);
    /// One row up.
    pub const NORTH: Self = Self::new(0, -1);
    /// One row down.
    pub const SOUTH: Self = Self::new(0, 1);
    /// One column left.
    pub const WEST: Self = Self::new(-1, 0);
    /// One column right.
    pub const EAST: Self = Self::new(1, 0);
    /// Up and left.
    pub const NORTH_WEST: Self = Self::new(-1, -1);
    /// Down and left.
    pub const SOUTH_WEST: Self = Self::new(-1, 1);
    /// Up and right.
    pub const NORTH_EAST: Self = Self::new(1, -1);
    /// Down and right.
    pub const SOUTH_EAST: Self = Self::new(1, 1);

    /// Menu labels for keys 1 through 8, in key order.
    pub const MENU: [(u8, &'static str); 8] = [
        (1, "north"),
        (2, "west"),
        (3, "east"),
        (4, "south"),
        (5, "north-west"),
        (6, "south-west"),
        (7, "north-east"),
        (8, "south-east"),
    ];

    const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// Map a menu key to a direction.
    ///
    /// Returns `None` for keys outside `0..=8`.
    #[must_use]
    pub const fn from_key(key: u8) -> Option<Self> {
        let direction = match key {
            0 => Self::STAY,
            1 => Self::NORTH,
            2 => Self::WEST,
            3 => Self::EAST,
            4 => Self::SOUTH,
            5 => Self::NORTH_WEST,
            6 => Self::SOUTH_WEST,
            7 => Self::NORTH_EAST,
            8 => Self::SOUTH_EAST,
            _ => return None,
        };
        Some(direction)
    }

    /// Whether this is the null offset.
    #[must_use]
    pub const fn is_stay(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}
