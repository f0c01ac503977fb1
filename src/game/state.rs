//! Simulation state.

use crate::error::StepError;
use crate::game::{
    BOUNDARY, BehaviorScore, Category, CensusEntry, Coord, Direction, EMPTY, Entity, FaunaStep,
    GridMap, HabitabilityReport, HealthTable, RobotStep, RoverStep, census, fauna, robot, rover,
    total_score,
};

/// Why a unit could not move in the chosen direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    /// The edge of the habitat is in the way.
    Boundary,
    /// Something the unit cannot interact with is in the way.
    Occupied(Entity),
}

/// What lies one step from a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbour {
    /// The boundary marker, or the edge of the coordinate space.
    Boundary,
    /// An empty cell.
    Empty(Coord),
    /// An occupied cell.
    Occupant(Coord, Entity),
}

/// Complete simulation state for one session.
///
/// Owns the grid, the health of every health-bearing occupant and the
/// behaviour bonus. All interaction goes through the resolvers, which keep
/// the three consistent.
#[derive(Debug, Clone)]
pub struct Habitat {
    /// The terrain grid.
    pub grid: GridMap,
    /// Health of animals on the grid.
    pub health: HealthTable,
    /// Behaviour bonus accumulated this session.
    pub behavior: BehaviorScore,
}

impl Habitat {
    /// Create a habitat from a validated grid, giving every health-bearing
    /// occupant its baseline health.
    #[must_use]
    pub fn new(grid: GridMap) -> Self {
        let health = HealthTable::from_grid(&grid);
        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            animals = health.len(),
            "habitat created"
        );
        Self {
            grid,
            health,
            behavior: BehaviorScore::default(),
        }
    }

    /// Look one step from `at` along `direction`.
    #[must_use]
    pub fn neighbour(&self, at: Coord, direction: Direction) -> Neighbour {
        let Some(target) = at.step(direction).filter(|&c| self.grid.in_bounds(c)) else {
            return Neighbour::Boundary;
        };
        match self.grid.symbol_at(target) {
            EMPTY => Neighbour::Empty(target),
            BOUNDARY => Neighbour::Boundary,
            symbol => Entity::lookup(symbol)
                .map_or(Neighbour::Boundary, |entity| Neighbour::Occupant(target, entity)),
        }
    }

    /// Check that `at` holds a unit of `expected` category.
    pub(crate) fn require(&self, at: Coord, expected: Category) -> Result<Entity, StepError> {
        self.grid
            .entity_at(at)
            .filter(|entity| entity.category() == expected)
            .ok_or(StepError { at, expected })
    }

    /// Space robots in selection order.
    #[must_use]
    pub fn robots(&self) -> Vec<(Coord, Entity)> {
        self.grid.positions_of(|e| e.category() == Category::Robot)
    }

    /// Space rovers in selection order.
    #[must_use]
    pub fn rovers(&self) -> Vec<(Coord, Entity)> {
        self.grid.positions_of(|e| e.category() == Category::Rover)
    }

    /// Martian animals in selection order (by row, then column).
    #[must_use]
    pub fn martian_animals(&self) -> Vec<(Coord, Entity)> {
        self.grid.positions_of(Entity::is_martian_animal)
    }

    /// Move a robot one step, or report the interaction it faces.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no robot at `at`.
    pub fn step_robot(&mut self, at: Coord, direction: Direction) -> Result<RobotStep, StepError> {
        robot::step(self, at, direction)
    }

    /// Drive a rover one step.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no rover at `at`.
    pub fn step_rover(&mut self, at: Coord, direction: Direction) -> Result<RoverStep, StepError> {
        rover::step(self, at, direction)
    }

    /// Move a Martian animal one step, consuming or fighting what it meets.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no Martian animal at `at`.
    pub fn step_fauna(&mut self, at: Coord, direction: Direction) -> Result<FaunaStep, StepError> {
        fauna::step(self, at, direction)
    }

    /// Water the plant at `target`. Returns `false` if there is none.
    pub fn water(&mut self, target: Coord) -> bool {
        robot::water(self, target)
    }

    /// Feed the animal at `target`. Returns `false` if there is none.
    pub fn feed(&mut self, target: Coord) -> bool {
        robot::feed(self, target)
    }

    /// Plant `flora` on the empty cell `site`.
    pub fn plant(&mut self, site: Coord, flora: Entity) -> bool {
        robot::plant(self, site, flora)
    }

    /// Put `animal` on the empty cell `site`.
    pub fn add_livestock(&mut self, site: Coord, animal: Entity) -> bool {
        robot::add_livestock(self, site, animal)
    }

    /// Total habitability score.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        total_score(&self.grid, self.behavior)
    }

    /// Occupant counts in catalog order.
    #[must_use]
    pub fn census(&self) -> Vec<CensusEntry> {
        census(&self.grid)
    }

    /// Full score breakdown.
    #[must_use]
    pub fn report(&self) -> HabitabilityReport {
        HabitabilityReport::new(&self.grid, self.behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habitat(rows: &[&str]) -> Habitat {
        Habitat::new(GridMap::construct(rows).unwrap())
    }

    #[test]
    fn test_new_initializes_health() {
        let h = habitat(&["#####", "#H.D#", "#####"]);
        assert_eq!(h.health.get(Coord::new(1, 1)), Some(15));
        assert_eq!(h.health.get(Coord::new(3, 1)), Some(10));
        assert_eq!(h.behavior.value(), 0);
    }

    #[test]
    fn test_neighbour() {
        let h = habitat(&["#####", "#Z.P#", "#####"]);
        let robot = Coord::new(1, 1);
        assert_eq!(h.neighbour(robot, Direction::WEST), Neighbour::Boundary);
        assert_eq!(
            h.neighbour(robot, Direction::EAST),
            Neighbour::Empty(Coord::new(2, 1))
        );
        assert_eq!(
            h.neighbour(Coord::new(2, 1), Direction::EAST),
            Neighbour::Occupant(Coord::new(3, 1), Entity::Potato)
        );
        assert_eq!(
            h.neighbour(Coord::new(0, 0), Direction::NORTH),
            Neighbour::Boundary
        );
    }

    #[test]
    fn test_unit_lists() {
        let h = habitat(&["######", "#ZX.Z#", "#J.H.#", "######"]);
        assert_eq!(h.robots().len(), 2);
        assert_eq!(h.rovers(), vec![(Coord::new(2, 1), Entity::SpaceRover)]);
        assert_eq!(
            h.martian_animals(),
            vec![
                (Coord::new(1, 2), Entity::Jeebie),
                (Coord::new(3, 2), Entity::Heebie)
            ]
        );
    }

    #[test]
    fn test_require() {
        let h = habitat(&["####", "#Z.#", "####"]);
        assert_eq!(
            h.require(Coord::new(1, 1), Category::Robot),
            Ok(Entity::SpaceRobot)
        );
        assert_eq!(
            h.require(Coord::new(2, 1), Category::Robot),
            Err(StepError {
                at: Coord::new(2, 1),
                expected: Category::Robot
            })
        );
    }
}
