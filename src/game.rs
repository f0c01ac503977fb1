//! Simulation layer for the habitat.
//!
//! Implements the rules on top of the terrain grid:
//! - Grid of single-character cells enclosed by a `#` boundary
//! - Closed catalog of occupants with fixed score and health
//! - Health table for Martian animals and dogs
//! - Movement resolvers for robots, rovers and Martian fauna
//! - Deterministic combat between fauna and dogs
//! - Habitability scoring

mod combat;
mod direction;
mod entity;
pub mod fauna;
mod health;
mod invariants;
mod map;
pub mod robot;
pub mod rover;
mod score;
mod state;

pub use combat::{Duel, Fight, Round, STRIKE_DAMAGE, Side, engage, resolve_duel};
pub use direction::Direction;
pub use entity::{
    BOUNDARY, Category, EARTH_ANIMAL_SCORE, EMPTY, Entity, EntityDescriptor, FLORA_SCORE,
    FloraKind, is_known_symbol,
};
pub use fauna::{FEEDING_GAIN, FaunaStep};
pub use health::HealthTable;
pub use invariants::{InvariantViolation, check_invariants};
pub use map::{Coord, GridMap};
pub use robot::RobotStep;
pub use rover::RoverStep;
pub use score::{
    BehaviorScore, CensusEntry, HabitabilityReport, ScoredEvent, census, total_score,
};
pub use state::{Blocked, Habitat, Neighbour};
