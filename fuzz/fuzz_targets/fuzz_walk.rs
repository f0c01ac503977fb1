#![no_main]

use arbitrary::Arbitrary;
use habitat::game::{Direction, Entity, GridMap, Habitat, RobotStep, check_invariants};
use libfuzzer_sys::fuzz_target;

/// One interaction chosen by the fuzzer.
#[derive(Arbitrary, Debug)]
enum Move {
    Robot { unit: u8, direction: u8, confirm: bool, follow_up: u8 },
    Rover { unit: u8, direction: u8 },
    Fauna { unit: u8, direction: u8 },
}

#[derive(Arbitrary, Debug)]
struct WalkInput {
    /// Interior cells, one byte per cell, mapped onto the catalog.
    cells: Vec<u8>,
    /// Interior width.
    width: u8,
    /// Moves to apply in order.
    moves: Vec<Move>,
}

fn symbol(byte: u8) -> char {
    let index = usize::from(byte) % (Entity::ALL.len() * 2);
    Entity::ALL.get(index).map_or('.', |e| e.symbol())
}

fn direction(key: u8) -> Direction {
    Direction::from_key(key % 8 + 1).unwrap_or(Direction::EAST)
}

fn pick<T: Copy>(items: &[T], index: u8) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(usize::from(index) % items.len()).copied()
}

fuzz_target!(|input: WalkInput| {
    let width = usize::from(input.width % 16) + 1;
    let height = (input.cells.len() / width).min(16);
    if height == 0 || input.moves.len() > 256 {
        return;
    }

    let mut rows = vec!["#".repeat(width + 2)];
    for chunk in input.cells.chunks_exact(width).take(height) {
        let interior: String = chunk.iter().map(|&b| symbol(b)).collect();
        rows.push(format!("#{interior}#"));
    }
    rows.push("#".repeat(width + 2));

    let mut habitat = match GridMap::construct(&rows) {
        Ok(grid) => Habitat::new(grid),
        Err(e) => panic!("generated grid rejected: {e}"),
    };

    for mv in &input.moves {
        match *mv {
            Move::Robot { unit, direction: key, confirm, follow_up } => {
                let Some((at, _)) = pick(&habitat.robots(), unit) else { continue };
                match habitat.step_robot(at, direction(key)).expect("robot listed") {
                    RobotStep::Moved { site: Some(site), .. } => {
                        let key = follow_up % 16;
                        if let Some(flora) = Entity::plantable(key) {
                            assert!(habitat.plant(site, flora));
                        } else if let Some(animal) = key.checked_sub(8).and_then(Entity::livestock) {
                            assert!(habitat.add_livestock(site, animal));
                        }
                    }
                    RobotStep::CanWater { target, .. } if confirm => assert!(habitat.water(target)),
                    RobotStep::CanFeed { target, .. } if confirm => assert!(habitat.feed(target)),
                    _ => {}
                }
            }
            Move::Rover { unit, direction: key } => {
                let Some((at, _)) = pick(&habitat.rovers(), unit) else { continue };
                habitat.step_rover(at, direction(key)).expect("rover listed");
            }
            Move::Fauna { unit, direction: key } => {
                let Some((at, _)) = pick(&habitat.martian_animals(), unit) else { continue };
                habitat.step_fauna(at, direction(key)).expect("animal listed");
            }
        }

        let violations = check_invariants(&habitat);
        assert!(violations.is_empty(), "invariants violated after {mv:?}: {violations:?}");
    }
});
