//! Combat resolution between Martian fauna and dogs.
//!
//! Fights are a deterministic exchange of fixed-damage strikes. The attacker
//! always strikes first, so within a round at most one side can drop to zero.

use crate::game::{Coord, Direction, EMPTY, Entity, Habitat, ScoredEvent};

/// Health removed by every strike.
pub const STRIKE_DAMAGE: i32 = 2;

/// A side of a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The Martian animal that started the fight.
    Attacker,
    /// The dog that was attacked.
    Defender,
}

/// Health after each strike of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// Defender health after the attacker's strike.
    pub defender_health: i32,
    /// Attacker health after the defender's strike; `None` if the defender
    /// died before striking back.
    pub attacker_health: Option<i32>,
}

/// Result of a fight between two health values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duel {
    /// The side left standing.
    pub winner: Side,
    /// Final attacker health.
    pub attacker_health: i32,
    /// Final defender health.
    pub defender_health: i32,
    /// Every round, in order.
    pub rounds: Vec<Round>,
}

impl Duel {
    /// Health of the survivor.
    #[must_use]
    pub const fn survivor_health(&self) -> i32 {
        match self.winner {
            Side::Attacker => self.attacker_health,
            Side::Defender => self.defender_health,
        }
    }
}

/// Exchange strikes until one side drops to zero or below.
///
/// Each round the defender loses [`STRIKE_DAMAGE`] first; if it survives, the
/// attacker loses the same. The defender's health strictly decreases every
/// round, so the loop always terminates.
#[must_use]
pub fn resolve_duel(attacker: i32, defender: i32) -> Duel {
    let mut attacker_health = attacker;
    let mut defender_health = defender;
    let mut rounds = Vec::new();

    loop {
        defender_health = defender_health.saturating_sub(STRIKE_DAMAGE);
        if defender_health <= 0 {
            rounds.push(Round {
                defender_health,
                attacker_health: None,
            });
            return Duel {
                winner: Side::Attacker,
                attacker_health,
                defender_health,
                rounds,
            };
        }

        attacker_health = attacker_health.saturating_sub(STRIKE_DAMAGE);
        rounds.push(Round {
            defender_health,
            attacker_health: Some(attacker_health),
        });
        if attacker_health <= 0 {
            return Duel {
                winner: Side::Defender,
                attacker_health,
                defender_health,
                rounds,
            };
        }
    }
}

/// A fight that took place on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fight {
    /// The attacking animal.
    pub attacker: Entity,
    /// Where the attacker stood.
    pub from: Coord,
    /// Where the dog stood; the survivor ends up here.
    pub arena: Coord,
    /// Round-by-round result.
    pub duel: Duel,
}

/// Attack the dog one step from `from` with the Martian animal at `from`.
///
/// Both health entries are taken out of the table for the fight and the
/// survivor's is written back at the dog's coordinate. If the attacker wins
/// it moves onto the dog's cell; if the dog wins the attacker's cell is
/// cleared and the dog's survival bonus is awarded.
///
/// Returns `None` without changes unless `from` holds a Martian animal and
/// the neighbouring cell holds a dog.
pub fn engage(habitat: &mut Habitat, from: Coord, direction: Direction) -> Option<Fight> {
    let attacker = habitat
        .grid
        .entity_at(from)
        .filter(|e| e.is_martian_animal())?;
    let arena = from
        .step(direction)
        .filter(|&c| habitat.grid.entity_at(c) == Some(Entity::Dog))?;

    let attacker_health = take_health(habitat, from, attacker);
    let defender_health = take_health(habitat, arena, Entity::Dog);

    let duel = resolve_duel(attacker_health, defender_health);

    match duel.winner {
        Side::Attacker => {
            habitat.grid.move_symbol(from, direction);
        }
        Side::Defender => {
            habitat.grid.set_symbol(from, EMPTY);
            habitat.behavior.award(ScoredEvent::DogSurvived);
        }
    }
    habitat.health.put(arena, duel.survivor_health());

    tracing::debug!(
        ?attacker,
        ?from,
        ?arena,
        winner = ?duel.winner,
        rounds = duel.rounds.len(),
        survivor_health = duel.survivor_health(),
        "fight resolved"
    );

    Some(Fight {
        attacker,
        from,
        arena,
        duel,
    })
}

fn take_health(habitat: &mut Habitat, coord: Coord, entity: Entity) -> i32 {
    habitat.health.remove(coord).unwrap_or_else(|| {
        tracing::warn!(?coord, ?entity, "missing health entry, using baseline");
        entity.baseline_health()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GridMap;

    fn habitat(rows: &[&str]) -> Habitat {
        Habitat::new(GridMap::construct(rows).unwrap())
    }

    #[test]
    fn test_baseline_fight_attacker_wins_round_five() {
        let duel = resolve_duel(15, 10);
        assert_eq!(duel.winner, Side::Attacker);
        assert_eq!(duel.rounds.len(), 5);
        let defender: Vec<i32> = duel.rounds.iter().map(|r| r.defender_health).collect();
        assert_eq!(defender, vec![8, 6, 4, 2, 0]);
        let attacker: Vec<Option<i32>> = duel.rounds.iter().map(|r| r.attacker_health).collect();
        assert_eq!(attacker, vec![Some(13), Some(11), Some(9), Some(7), None]);
        assert_eq!(duel.attacker_health, 7);
        assert_eq!(duel.survivor_health(), 7);
    }

    #[test]
    fn test_weak_attacker_loses() {
        let duel = resolve_duel(4, 10);
        assert_eq!(duel.winner, Side::Defender);
        assert_eq!(duel.rounds.len(), 2);
        assert_eq!(duel.attacker_health, 0);
        assert_eq!(duel.defender_health, 6);
    }

    #[test]
    fn test_odd_health_goes_negative() {
        let duel = resolve_duel(3, 20);
        assert_eq!(duel.winner, Side::Defender);
        assert_eq!(duel.attacker_health, -1);
        assert_eq!(duel.defender_health, 16);
    }

    #[test]
    fn test_exactly_one_side_down() {
        for attacker in 1..40 {
            for defender in 1..40 {
                let duel = resolve_duel(attacker, defender);
                let attacker_down = duel.attacker_health <= 0;
                let defender_down = duel.defender_health <= 0;
                assert!(attacker_down ^ defender_down, "{attacker} vs {defender}");
                assert_eq!(duel.winner == Side::Defender, attacker_down);
            }
        }
    }

    #[test]
    fn test_engage_attacker_takes_cell() {
        let mut h = habitat(&["#####", "#HD.#", "#####"]);
        let fight = engage(&mut h, Coord::new(1, 1), Direction::EAST).unwrap();
        assert_eq!(fight.duel.winner, Side::Attacker);
        assert_eq!(h.grid.serialize()[1], "#.H.#");
        assert_eq!(h.health.get(Coord::new(1, 1)), None);
        assert_eq!(h.health.get(Coord::new(2, 1)), Some(7));
        assert_eq!(h.health.len(), 1);
        assert_eq!(h.behavior.value(), 0);
    }

    #[test]
    fn test_engage_dog_survives() {
        let mut h = habitat(&["#####", "#JD.#", "#####"]);
        h.health.put(Coord::new(1, 1), 4);
        let fight = engage(&mut h, Coord::new(1, 1), Direction::EAST).unwrap();
        assert_eq!(fight.duel.winner, Side::Defender);
        assert_eq!(h.grid.serialize()[1], "#.D.#");
        assert_eq!(h.health.get(Coord::new(1, 1)), None);
        assert_eq!(h.health.get(Coord::new(2, 1)), Some(6));
        assert_eq!(h.behavior.value(), 7);
    }

    #[test]
    fn test_engage_requires_dog() {
        let mut h = habitat(&["#####", "#HC.#", "#####"]);
        assert!(engage(&mut h, Coord::new(1, 1), Direction::EAST).is_none());
        assert_eq!(h.health.get(Coord::new(1, 1)), Some(15));
    }
}
