//! Property-based tests for grid construction, combat and interaction.
//!
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use habitat::game::{
    Coord, Direction, Entity, GridMap, Habitat, HealthTable, RobotStep, Side, check_invariants,
    resolve_duel,
};
use habitat::{FormatError, GridError};

fn cell() -> impl Strategy<Value = char> {
    let mut symbols: Vec<char> = Entity::ALL.iter().map(|e| e.symbol()).collect();
    // Weight towards empty cells so units have room to move.
    symbols.extend(['.'; 12]);
    prop::sample::select(symbols)
}

fn interior() -> impl Strategy<Value = Vec<Vec<char>>> {
    (1usize..8, 1usize..8)
        .prop_flat_map(|(w, h)| prop::collection::vec(prop::collection::vec(cell(), w), h))
}

fn bordered(interior: &[Vec<char>]) -> Vec<String> {
    let width = interior[0].len() + 2;
    let mut rows = vec!["#".repeat(width)];
    for row in interior {
        rows.push(format!("#{}#", row.iter().collect::<String>()));
    }
    rows.push("#".repeat(width));
    rows
}

fn grid_rows() -> impl Strategy<Value = Vec<String>> {
    interior().prop_map(|cells| bordered(&cells))
}

fn replace_char(row: &str, index: usize, with: char) -> String {
    row.chars()
        .enumerate()
        .map(|(i, c)| if i == index { with } else { c })
        .collect()
}

/// Static part of the habitability score recomputed from scratch.
fn occupant_score(grid: &GridMap) -> u32 {
    grid.occupants().map(|(_, entity)| entity.score()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Serializing a constructed grid reproduces its text row for row.
    #[test]
    fn prop_round_trip(rows in grid_rows()) {
        let grid = GridMap::construct(&rows).unwrap();
        prop_assert_eq!(grid.serialize(), rows);
    }

    /// A row of different length is reported before any other problem.
    #[test]
    fn prop_ragged_rows_rejected(rows in grid_rows(), pick in any::<prop::sample::Index>()) {
        let mut rows = rows;
        let row = pick.index(rows.len());
        // '?' would also be an unknown symbol; raggedness must win.
        rows[row].push('?');
        let err = GridMap::construct(&rows).unwrap_err();
        prop_assert!(
            matches!(err, GridError::Format(FormatError::RaggedRow { .. })),
            "unexpected error {:?}",
            err
        );
    }

    /// Any non-boundary character on the edge is rejected.
    #[test]
    fn prop_broken_boundary_rejected(
        rows in grid_rows(),
        pick in any::<prop::sample::Index>(),
        top_or_left in any::<bool>(),
    ) {
        let mut rows = rows;
        let height = rows.len();
        let width = rows[0].len();
        if top_or_left {
            let x = pick.index(width);
            let y = if pick.index(2) == 0 { 0 } else { height - 1 };
            rows[y] = replace_char(&rows[y], x, '.');
        } else {
            let y = pick.index(height);
            let x = if pick.index(2) == 0 { 0 } else { width - 1 };
            rows[y] = replace_char(&rows[y], x, 'Z');
        }
        let err = GridMap::construct(&rows).unwrap_err();
        prop_assert!(
            matches!(
                err,
                GridError::Format(
                    FormatError::BoundaryRow { .. } | FormatError::BoundaryColumn { .. }
                )
            ),
            "unexpected error {:?}",
            err
        );
    }

    /// An unregistered interior symbol is reported with its position.
    #[test]
    fn prop_unknown_symbol_rejected(
        rows in grid_rows(),
        px in any::<prop::sample::Index>(),
        py in any::<prop::sample::Index>(),
    ) {
        let mut rows = rows;
        let x = 1 + px.index(rows[0].len() - 2);
        let y = 1 + py.index(rows.len() - 2);
        rows[y] = replace_char(&rows[y], x, '?');
        let err = GridMap::construct(&rows).unwrap_err();
        prop_assert!(
            matches!(err, GridError::UnknownEntity { symbol: '?', x: ex, y: ey } if ex == x && ey == y),
            "unexpected error {:?}",
            err
        );
    }

    /// Every fight ends with exactly one side at or below zero.
    #[test]
    fn prop_duel_has_one_loser(attacker in 1i32..500, defender in 1i32..500) {
        let duel = resolve_duel(attacker, defender);
        let attacker_down = duel.attacker_health <= 0;
        let defender_down = duel.defender_health <= 0;
        prop_assert!(attacker_down ^ defender_down);
        prop_assert_eq!(duel.winner == Side::Defender, attacker_down);

        let expected_rounds = if duel.winner == Side::Attacker {
            (defender + 1) / 2
        } else {
            (attacker + 1) / 2
        };
        prop_assert_eq!(duel.rounds.len(), usize::try_from(expected_rounds).unwrap());
        for pair in duel.rounds.windows(2) {
            prop_assert!(pair[1].defender_health < pair[0].defender_health);
        }
    }

    /// Relocating an entry moves its value and leaves nothing behind.
    #[test]
    fn prop_relocation(x in 1usize..50, y in 1usize..50, key in 1u8..=8, health in 1i32..100) {
        let from = Coord::new(x, y);
        let direction = Direction::from_key(key).unwrap();
        let to = from.step(direction).unwrap();

        let mut table = HealthTable::new();
        table.put(from, health);
        prop_assert_eq!(table.relocate(from, direction), Some(health));
        prop_assert_eq!(table.get(from), None);
        prop_assert_eq!(table.get(to), Some(health));
        prop_assert_eq!(table.len(), 1);
    }
}

/// One scripted interaction for the random walk.
#[derive(Debug, Clone)]
struct Action {
    kind: u8,
    unit: prop::sample::Index,
    direction: u8,
    confirm: bool,
    follow_up: u8,
}

fn action() -> impl Strategy<Value = Action> {
    (0u8..3, any::<prop::sample::Index>(), 1u8..=8, any::<bool>(), 0u8..=12).prop_map(
        |(kind, unit, direction, confirm, follow_up)| Action {
            kind,
            unit,
            direction,
            confirm,
            follow_up,
        },
    )
}

fn apply(habitat: &mut Habitat, action: &Action) {
    let direction = Direction::from_key(action.direction).unwrap();
    match action.kind {
        0 => {
            let robots = habitat.robots();
            if robots.is_empty() {
                return;
            }
            let (at, _) = robots[action.unit.index(robots.len())];
            match habitat.step_robot(at, direction).unwrap() {
                RobotStep::Moved { site: Some(site), .. } => match action.follow_up {
                    k @ 1..=8 => {
                        habitat.plant(site, Entity::plantable(k).unwrap());
                    }
                    k @ 9..=12 => {
                        habitat.add_livestock(site, Entity::livestock(k - 8).unwrap());
                    }
                    _ => {}
                },
                RobotStep::CanWater { target, .. } if action.confirm => {
                    assert!(habitat.water(target));
                }
                RobotStep::CanFeed { target, .. } if action.confirm => {
                    assert!(habitat.feed(target));
                }
                _ => {}
            }
        }
        1 => {
            let rovers = habitat.rovers();
            if rovers.is_empty() {
                return;
            }
            let (at, _) = rovers[action.unit.index(rovers.len())];
            habitat.step_rover(at, direction).unwrap();
        }
        _ => {
            let animals = habitat.martian_animals();
            if animals.is_empty() {
                return;
            }
            let (at, _) = animals[action.unit.index(animals.len())];
            habitat.step_fauna(at, direction).unwrap();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Random interaction sequences keep the grid, health table and score
    /// consistent, and the behaviour bonus never shrinks.
    #[test]
    fn prop_random_walk_keeps_invariants(
        rows in grid_rows(),
        actions in prop::collection::vec(action(), 0..60),
    ) {
        let mut habitat = Habitat::new(GridMap::construct(&rows).unwrap());
        prop_assert!(check_invariants(&habitat).is_empty());

        let mut behavior = habitat.behavior.value();
        for action in &actions {
            apply(&mut habitat, action);

            let violations = check_invariants(&habitat);
            prop_assert!(violations.is_empty(), "after {:?}: {:?}", action, violations);

            prop_assert!(habitat.behavior.value() >= behavior);
            behavior = habitat.behavior.value();
            prop_assert_eq!(
                habitat.total_score(),
                occupant_score(&habitat.grid) + habitat.behavior.value()
            );
        }
    }
}
