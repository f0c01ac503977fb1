//! Habitability scoring.
//!
//! The total score is recomputed from scratch on every request: the static
//! score of every occupant on the grid plus the behaviour bonus accumulated
//! from scored player actions.

use serde::Serialize;

use crate::game::{Entity, GridMap};

/// A discrete player action that earns behaviour points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoredEvent {
    /// The robot watered a plant.
    Watered,
    /// The robot fed an animal.
    Fed,
    /// The rover destroyed a rock.
    RockDestroyed,
    /// The rover collected a mineral.
    MineralCollected,
    /// A dog survived an attack by Martian fauna.
    DogSurvived,
}

impl ScoredEvent {
    /// Points awarded for this event.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            ScoredEvent::Watered | ScoredEvent::RockDestroyed => 1,
            ScoredEvent::Fed | ScoredEvent::MineralCollected => 2,
            ScoredEvent::DogSurvived => 7,
        }
    }
}

/// Accumulated behaviour bonus. Only ever increases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BehaviorScore {
    total: u32,
}

impl BehaviorScore {
    /// Start from a known total, e.g. when restoring a session.
    #[must_use]
    pub const fn with_total(total: u32) -> Self {
        Self { total }
    }

    /// Record an event and return the new total.
    pub fn award(&mut self, event: ScoredEvent) -> u32 {
        self.total = self.total.saturating_add(event.points());
        tracing::debug!(?event, total = self.total, "behaviour score awarded");
        self.total
    }

    /// Current total.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.total
    }
}

/// Sum of static occupant scores plus the behaviour bonus.
#[must_use]
pub fn total_score(grid: &GridMap, behavior: BehaviorScore) -> u32 {
    let occupants: u32 = grid.occupants().map(|(_, entity)| entity.score()).sum();
    occupants.saturating_add(behavior.value())
}

/// Count of one entity kind present on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CensusEntry {
    /// The kind counted.
    pub entity: Entity,
    /// How many occupants of that kind are on the grid.
    pub count: u32,
}

/// Count every registered kind present on the grid, in catalog order.
///
/// Kinds with no occupant are omitted.
#[must_use]
pub fn census(grid: &GridMap) -> Vec<CensusEntry> {
    let mut counts = [0u32; Entity::ALL.len()];
    for (_, entity) in grid.occupants() {
        counts[entity as usize] += 1;
    }

    Entity::ALL
        .iter()
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .map(|(&entity, count)| CensusEntry { entity, count })
        .collect()
}

/// Snapshot of the habitat's score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitabilityReport {
    /// Occupant counts in catalog order.
    pub census: Vec<CensusEntry>,
    /// Accumulated behaviour bonus.
    pub behavior_score: u32,
    /// Total habitability score.
    pub total_score: u32,
}

impl HabitabilityReport {
    /// Build a report for the current grid and bonus.
    #[must_use]
    pub fn new(grid: &GridMap, behavior: BehaviorScore) -> Self {
        Self {
            census: census(grid),
            behavior_score: behavior.value(),
            total_score: total_score(grid, behavior),
        }
    }

    /// How many occupants of `entity` the census counted.
    #[must_use]
    pub fn count_of(&self, entity: Entity) -> u32 {
        self.census
            .iter()
            .find(|entry| entry.entity == entity)
            .map_or(0, |entry| entry.count)
    }
}
