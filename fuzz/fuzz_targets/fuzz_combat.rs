#![no_main]

use arbitrary::Arbitrary;
use habitat::game::{
    Coord, Direction, GridMap, Habitat, STRIKE_DAMAGE, Side, check_invariants, engage,
};
use libfuzzer_sys::fuzz_target;

/// Structured input for combat fuzzing.
#[derive(Arbitrary, Debug)]
struct CombatInput {
    /// Attacker health before the fight.
    attacker_health: i32,
    /// Dog health before the fight.
    dog_health: i32,
    /// Whether the attacker is a Jeebie rather than a Heebie.
    jeebie: bool,
    /// Direction key from the attacker to the dog.
    direction: u8,
}

fuzz_target!(|input: CombatInput| {
    // Keep fights short and health positive.
    let attacker_health = input.attacker_health.rem_euclid(10_000) + 1;
    let dog_health = input.dog_health.rem_euclid(10_000) + 1;
    let Some(direction) = Direction::from_key(input.direction % 8 + 1) else {
        return;
    };

    // Attacker in the middle of a 5x5 grid, dog one step away.
    let from = Coord::new(2, 2);
    let Some(arena) = from.step(direction) else {
        return;
    };
    let mut rows: Vec<Vec<char>> = ["#####", "#...#", "#...#", "#...#", "#####"]
        .iter()
        .map(|r| r.chars().collect())
        .collect();
    rows[from.y][from.x] = if input.jeebie { 'J' } else { 'H' };
    rows[arena.y][arena.x] = 'D';
    let rows: Vec<String> = rows.into_iter().map(|r| r.into_iter().collect()).collect();

    let mut habitat = match GridMap::construct(&rows) {
        Ok(grid) => Habitat::new(grid),
        Err(e) => panic!("fixture grid rejected: {e}"),
    };
    habitat.health.put(from, attacker_health);
    habitat.health.put(arena, dog_health);
    assert!(check_invariants(&habitat).is_empty());

    let fight = engage(&mut habitat, from, direction).expect("dog is adjacent");

    // Exactly one side is down, and every strike removed the fixed damage.
    let duel = &fight.duel;
    assert!((duel.attacker_health <= 0) ^ (duel.defender_health <= 0));
    let rounds = i32::try_from(duel.rounds.len()).expect("round count fits");
    assert_eq!(duel.defender_health, dog_health - rounds * STRIKE_DAMAGE);

    match duel.winner {
        Side::Attacker => {
            assert_eq!(habitat.behavior.value(), 0);
            assert_eq!(habitat.health.get(arena), Some(attacker_health - (rounds - 1) * STRIKE_DAMAGE));
        }
        Side::Defender => {
            assert_eq!(habitat.behavior.value(), 7);
            assert_eq!(habitat.health.get(arena), Some(duel.defender_health));
        }
    }
    assert_eq!(habitat.health.get(from), None);
    assert_eq!(habitat.health.len(), 1);

    let violations = check_invariants(&habitat);
    assert!(violations.is_empty(), "invariants violated after combat: {violations:?}");
});
