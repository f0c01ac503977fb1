//! Sparse health storage for health-bearing occupants.

use std::collections::HashMap;

use crate::game::{Coord, Direction, GridMap};

/// Health of every health-bearing occupant, keyed by its coordinate.
///
/// An absent key means the coordinate holds nothing that carries health.
/// Entries follow their occupant: they are relocated on every move and
/// removed when the occupant dies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthTable {
    entries: HashMap<Coord, i32>,
}

impl HealthTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table with one baseline entry per health-bearing occupant.
    #[must_use]
    pub fn from_grid(grid: &GridMap) -> Self {
        let entries = grid
            .occupants()
            .filter(|(_, entity)| entity.is_health_bearing())
            .map(|(coord, entity)| (coord, entity.baseline_health()))
            .collect();
        Self { entries }
    }

    /// Current health at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<i32> {
        self.entries.get(&coord).copied()
    }

    /// Whether `coord` has an entry.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Set the health at `coord`, replacing any previous entry.
    pub fn put(&mut self, coord: Coord, health: i32) {
        self.entries.insert(coord, health);
    }

    /// Remove the entry at `coord`, returning its value.
    pub fn remove(&mut self, coord: Coord) -> Option<i32> {
        self.entries.remove(&coord)
    }

    /// Add `delta` to the entry at `coord`.
    ///
    /// Returns the new value, or `None` if there is no entry.
    pub fn add(&mut self, coord: Coord, delta: i32) -> Option<i32> {
        let health = self.entries.get_mut(&coord)?;
        *health = health.saturating_add(delta);
        Some(*health)
    }

    /// Move the entry at `from` one step along `direction`.
    ///
    /// Returns the relocated value. Does nothing if there is no entry at
    /// `from` or the step leaves the coordinate space.
    pub fn relocate(&mut self, from: Coord, direction: Direction) -> Option<i32> {
        let to = from.step(direction)?;
        let health = self.entries.remove(&from)?;
        self.entries.insert(to, health);
        Some(health)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        self.entries.iter().map(|(&coord, &health)| (coord, health))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_baselines() {
        let grid = GridMap::construct(&["######", "#HJDC#", "######"]).unwrap();
        let table = HealthTable::from_grid(&grid);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(Coord::new(1, 1)), Some(15));
        assert_eq!(table.get(Coord::new(2, 1)), Some(15));
        assert_eq!(table.get(Coord::new(3, 1)), Some(10));
        assert_eq!(table.get(Coord::new(4, 1)), None);
    }

    #[test]
    fn test_put_add_remove() {
        let mut table = HealthTable::new();
        let coord = Coord::new(3, 3);
        assert_eq!(table.add(coord, 2), None);

        table.put(coord, 15);
        assert_eq!(table.add(coord, 2), Some(17));
        assert_eq!(table.get(coord), Some(17));

        assert_eq!(table.remove(coord), Some(17));
        assert!(!table.contains(coord));
        assert!(table.is_empty());
    }

    #[test]
    fn test_relocate() {
        let mut table = HealthTable::new();
        let from = Coord::new(2, 2);
        table.put(from, 9);

        assert_eq!(table.relocate(from, Direction::SOUTH_EAST), Some(9));
        assert_eq!(table.get(from), None);
        assert_eq!(table.get(Coord::new(3, 3)), Some(9));
    }

    #[test]
    fn test_relocate_missing_entry() {
        let mut table = HealthTable::new();
        table.put(Coord::new(5, 5), 4);
        assert_eq!(table.relocate(Coord::new(1, 1), Direction::EAST), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_relocate_overwrites_target() {
        let mut table = HealthTable::new();
        table.put(Coord::new(1, 1), 15);
        table.put(Coord::new(2, 1), 10);
        table.relocate(Coord::new(1, 1), Direction::EAST);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Coord::new(2, 1)), Some(15));
    }
}
