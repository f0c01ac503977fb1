//! Space rover movement.

use crate::error::StepError;
use crate::game::{Blocked, Category, Coord, Direction, Entity, Habitat, Neighbour, ScoredEvent};

/// Outcome of a single rover step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoverStep {
    /// The rover moved onto an empty cell.
    Moved {
        /// New rover position.
        to: Coord,
    },
    /// The rover drove over a rock and destroyed it.
    DestroyedRock {
        /// New rover position.
        to: Coord,
    },
    /// The rover drove over a mineral and collected it.
    CollectedMineral {
        /// New rover position.
        to: Coord,
    },
    /// The rover could not move.
    Blocked(Blocked),
}

impl RoverStep {
    /// Position of the rover after the step, if it moved.
    #[must_use]
    pub const fn destination(self) -> Option<Coord> {
        match self {
            RoverStep::Moved { to }
            | RoverStep::DestroyedRock { to }
            | RoverStep::CollectedMineral { to } => Some(to),
            RoverStep::Blocked(_) => None,
        }
    }
}

/// Drive the rover at `at` one step along `direction`.
///
/// Empty cells, rocks and minerals can be entered; rocks and minerals are
/// removed and earn their bonus. Everything else blocks the rover.
///
/// # Errors
///
/// Returns an error if there is no rover at `at`.
pub fn step(habitat: &mut Habitat, at: Coord, direction: Direction) -> Result<RoverStep, StepError> {
    habitat.require(at, Category::Rover)?;

    let outcome = match habitat.neighbour(at, direction) {
        Neighbour::Boundary => RoverStep::Blocked(Blocked::Boundary),
        Neighbour::Empty(_) => match habitat.grid.move_symbol(at, direction) {
            Some(to) => RoverStep::Moved { to },
            None => RoverStep::Blocked(Blocked::Boundary),
        },
        Neighbour::Occupant(_, Entity::Rock) => match habitat.grid.move_symbol(at, direction) {
            Some(to) => {
                habitat.behavior.award(ScoredEvent::RockDestroyed);
                RoverStep::DestroyedRock { to }
            }
            None => RoverStep::Blocked(Blocked::Boundary),
        },
        Neighbour::Occupant(_, Entity::Mineral) => match habitat.grid.move_symbol(at, direction) {
            Some(to) => {
                habitat.behavior.award(ScoredEvent::MineralCollected);
                RoverStep::CollectedMineral { to }
            }
            None => RoverStep::Blocked(Blocked::Boundary),
        },
        Neighbour::Occupant(_, entity) => RoverStep::Blocked(Blocked::Occupied(entity)),
    };

    tracing::debug!(?at, ?direction, ?outcome, "rover step");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GridMap;

    fn habitat(rows: &[&str]) -> Habitat {
        Habitat::new(GridMap::construct(rows).unwrap())
    }

    #[test]
    fn test_move_empty_no_score() {
        let mut h = habitat(&["####", "#X.#", "####"]);
        let step = step(&mut h, Coord::new(1, 1), Direction::EAST).unwrap();
        assert_eq!(step, RoverStep::Moved { to: Coord::new(2, 1) });
        assert_eq!(h.behavior.value(), 0);
        assert_eq!(h.grid.serialize()[1], "#.X#");
    }

    #[test]
    fn test_destroy_rock() {
        let mut h = habitat(&["#####", "#X@.#", "#####"]);
        let step = step(&mut h, Coord::new(1, 1), Direction::EAST).unwrap();
        assert_eq!(step, RoverStep::DestroyedRock { to: Coord::new(2, 1) });
        assert_eq!(h.behavior.value(), 1);
        assert_eq!(h.grid.serialize()[1], "#.X.#");
    }

    #[test]
    fn test_collect_mineral() {
        let mut h = habitat(&["####", "#*.#", "#X.#", "####"]);
        let step = step(&mut h, Coord::new(1, 2), Direction::NORTH).unwrap();
        assert_eq!(step.destination(), Some(Coord::new(1, 1)));
        assert_eq!(h.behavior.value(), 2);
    }

    #[test]
    fn test_blocked_by_occupants() {
        let mut h = habitat(&["######", "#PXZ.#", "#.C..#", "######"]);
        let rover = Coord::new(2, 1);
        let before = h.grid.clone();
        assert_eq!(
            step(&mut h, rover, Direction::WEST).unwrap(),
            RoverStep::Blocked(Blocked::Occupied(Entity::Potato))
        );
        assert_eq!(
            step(&mut h, rover, Direction::EAST).unwrap(),
            RoverStep::Blocked(Blocked::Occupied(Entity::SpaceRobot))
        );
        assert_eq!(
            step(&mut h, rover, Direction::SOUTH).unwrap(),
            RoverStep::Blocked(Blocked::Occupied(Entity::Cow))
        );
        assert_eq!(
            step(&mut h, rover, Direction::NORTH).unwrap(),
            RoverStep::Blocked(Blocked::Boundary)
        );
        assert_eq!(h.grid, before);
        assert_eq!(h.behavior.value(), 0);
    }
}
