//! Martian animal movement.

use crate::error::StepError;
use crate::game::{
    Blocked, Category, Coord, Direction, Entity, Fight, Habitat, Neighbour, Side, engage,
};

/// Health gained by eating a plant or an earth animal.
pub const FEEDING_GAIN: i32 = 2;

/// Outcome of a single Martian animal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaunaStep {
    /// The animal moved onto an empty cell.
    Moved {
        /// New position.
        to: Coord,
    },
    /// The animal ate whatever stood on the target cell and moved there.
    Consumed {
        /// New position.
        to: Coord,
        /// What was eaten.
        prey: Entity,
        /// Health after eating.
        health: i32,
    },
    /// The animal attacked a dog.
    Fought(Fight),
    /// The animal could not move.
    Blocked(Blocked),
}

impl FaunaStep {
    /// Where the animal stands after the step.
    ///
    /// `None` if it died in a fight. Blocked animals stay at `from`.
    #[must_use]
    pub fn position_after(&self, from: Coord) -> Option<Coord> {
        match self {
            FaunaStep::Moved { to } | FaunaStep::Consumed { to, .. } => Some(*to),
            FaunaStep::Fought(fight) => match fight.duel.winner {
                Side::Attacker => Some(fight.arena),
                Side::Defender => None,
            },
            FaunaStep::Blocked(_) => Some(from),
        }
    }
}

/// Move the Martian animal at `at` one step along `direction`.
///
/// Plants and livestock other than dogs are eaten, raising the animal's own
/// health. Dogs are fought. Units, terrain and other Martian animals block.
///
/// # Errors
///
/// Returns an error if there is no Martian animal at `at`.
pub fn step(habitat: &mut Habitat, at: Coord, direction: Direction) -> Result<FaunaStep, StepError> {
    let animal = habitat.require(at, Category::MartianAnimal)?;

    let outcome = match habitat.neighbour(at, direction) {
        Neighbour::Boundary => FaunaStep::Blocked(Blocked::Boundary),
        Neighbour::Empty(_) => match habitat.grid.move_symbol(at, direction) {
            Some(to) => {
                habitat.health.relocate(at, direction);
                FaunaStep::Moved { to }
            }
            None => FaunaStep::Blocked(Blocked::Boundary),
        },
        Neighbour::Occupant(_, Entity::Dog) => match engage(habitat, at, direction) {
            Some(fight) => FaunaStep::Fought(fight),
            None => FaunaStep::Blocked(Blocked::Occupied(Entity::Dog)),
        },
        Neighbour::Occupant(_, prey) if prey.is_flora() || prey.is_earth_animal() => {
            match habitat.grid.move_symbol(at, direction) {
                Some(to) => {
                    habitat.health.relocate(at, direction);
                    let health = habitat
                        .health
                        .add(to, FEEDING_GAIN)
                        .unwrap_or_else(|| {
                            let health = animal.baseline_health() + FEEDING_GAIN;
                            habitat.health.put(to, health);
                            health
                        });
                    FaunaStep::Consumed { to, prey, health }
                }
                None => FaunaStep::Blocked(Blocked::Boundary),
            }
        }
        Neighbour::Occupant(_, entity) => FaunaStep::Blocked(Blocked::Occupied(entity)),
    };

    tracing::debug!(?at, ?direction, ?outcome, "fauna step");
    Ok(outcome)
}
