//! Habitat invariants - sanity checks that detect bugs.
//!
//! The resolvers keep the grid and the health table consistent. If any of
//! these checks fire after a sequence of legal interactions, a resolver has a
//! bug.

use crate::game::{GridMap, Habitat};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: String) -> Self {
        Self { message }
    }
}

/// Check all habitat invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(habitat: &Habitat) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // The grid must still pass construction-time validation.
    if let Err(e) = GridMap::construct(&habitat.grid.serialize()) {
        violations.push(InvariantViolation::new(format!(
            "grid no longer valid: {e}"
        )));
    }

    // Every health-bearing occupant has exactly one entry.
    for (coord, entity) in habitat.grid.occupants() {
        if entity.is_health_bearing() && !habitat.health.contains(coord) {
            violations.push(InvariantViolation::new(format!(
                "{} at {coord:?} has no health entry",
                entity.name()
            )));
        }
    }

    // Every entry belongs to a living health-bearing occupant.
    for (coord, health) in habitat.health.iter() {
        match habitat.grid.entity_at(coord) {
            Some(entity) if entity.is_health_bearing() => {
                if health <= 0 {
                    violations.push(InvariantViolation::new(format!(
                        "{} at {coord:?} is alive with health {health}",
                        entity.name()
                    )));
                }
            }
            other => violations.push(InvariantViolation::new(format!(
                "health entry {health} at {coord:?} belongs to {other:?}"
            ))),
        }
    }

    violations
}
