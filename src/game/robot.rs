//! Space robot interactions.
//!
//! A robot walks onto empty cells and tends whatever it bumps into: plants
//! can be watered, animals can be fed. After a successful move it may plant
//! flora or add livestock on the cell one further step along the same
//! direction, provided that cell is empty.

use crate::error::StepError;
use crate::game::{
    Blocked, Category, Coord, Direction, EMPTY, Entity, Habitat, Neighbour, ScoredEvent,
};

/// Outcome of a single robot step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotStep {
    /// The robot moved to `to`.
    Moved {
        /// New robot position.
        to: Coord,
        /// Empty cell available for planting or livestock, if any.
        site: Option<Coord>,
    },
    /// A plant is in the way; the robot may water it.
    CanWater {
        /// Position of the plant.
        target: Coord,
        /// The plant.
        flora: Entity,
    },
    /// An animal is in the way; the robot may feed it.
    CanFeed {
        /// Position of the animal.
        target: Coord,
        /// The animal.
        animal: Entity,
    },
    /// The robot could not move.
    Blocked(Blocked),
}

/// Move the robot at `at` one step along `direction`.
///
/// Only an empty neighbour is entered. Plants and animals are reported so
/// the caller can offer watering or feeding; nothing else changes until
/// [`water`] or [`feed`] is called.
///
/// # Errors
///
/// Returns an error if there is no robot at `at`.
pub fn step(habitat: &mut Habitat, at: Coord, direction: Direction) -> Result<RobotStep, StepError> {
    habitat.require(at, Category::Robot)?;

    let outcome = match habitat.neighbour(at, direction) {
        Neighbour::Boundary => RobotStep::Blocked(Blocked::Boundary),
        Neighbour::Empty(_) => {
            let Some(to) = habitat.grid.move_symbol(at, direction) else {
                return Ok(RobotStep::Blocked(Blocked::Boundary));
            };
            // The site is one step further along the same direction, which
            // for diagonals skips the orthogonal neighbours.
            let site = to
                .step(direction)
                .filter(|&site| habitat.grid.symbol_at(site) == EMPTY);
            RobotStep::Moved { to, site }
        }
        Neighbour::Occupant(target, entity) => match entity.category() {
            Category::Flora(_) => RobotStep::CanWater {
                target,
                flora: entity,
            },
            Category::MartianAnimal | Category::EarthAnimal => RobotStep::CanFeed {
                target,
                animal: entity,
            },
            Category::Robot | Category::Rover | Category::Terrain => {
                RobotStep::Blocked(Blocked::Occupied(entity))
            }
        },
    };

    tracing::debug!(?at, ?direction, ?outcome, "robot step");
    Ok(outcome)
}

/// Water the plant at `target`, earning the watering bonus.
///
/// Returns `false` without scoring if `target` holds no plant.
pub fn water(habitat: &mut Habitat, target: Coord) -> bool {
    if !habitat.grid.entity_at(target).is_some_and(Entity::is_flora) {
        return false;
    }
    habitat.behavior.award(ScoredEvent::Watered);
    true
}

/// Feed the animal at `target`, earning the feeding bonus.
///
/// Returns `false` without scoring if `target` holds no animal.
pub fn feed(habitat: &mut Habitat, target: Coord) -> bool {
    let fed = habitat
        .grid
        .entity_at(target)
        .is_some_and(|e| e.is_martian_animal() || e.is_earth_animal());
    if fed {
        habitat.behavior.award(ScoredEvent::Fed);
    }
    fed
}

/// Plant `flora` on the empty cell `site`.
///
/// Returns `false` without changes if `flora` is not a plant or the site is
/// not empty.
pub fn plant(habitat: &mut Habitat, site: Coord, flora: Entity) -> bool {
    if !flora.is_flora() || !habitat.grid.is_empty_at(site) {
        return false;
    }
    habitat.grid.set_symbol(site, flora.symbol());
    tracing::debug!(?site, ?flora, "planted");
    true
}

/// Put `animal` on the empty cell `site`.
///
/// Health-bearing livestock starts at its baseline health. Returns `false`
/// without changes if `animal` is not livestock or the site is not empty.
pub fn add_livestock(habitat: &mut Habitat, site: Coord, animal: Entity) -> bool {
    if !animal.is_earth_animal() || !habitat.grid.is_empty_at(site) {
        return false;
    }
    habitat.grid.set_symbol(site, animal.symbol());
    if animal.is_health_bearing() {
        habitat.health.put(site, animal.baseline_health());
    }
    tracing::debug!(?site, ?animal, "livestock added");
    true
}
