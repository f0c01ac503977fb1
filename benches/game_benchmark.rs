//! Benchmarks for grid construction, scoring and combat.
//!
//! Scoring rescans the whole grid, so large maps are the interesting case.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use habitat::game::{Direction, GridMap, Habitat, check_invariants, resolve_duel};

const PATTERN: &[u8] = b"..P..C..@..H..*..T..D..R..Z..X..J..";

/// Build a square bordered grid of the given size with a repeating pattern.
fn big_map(size: usize) -> Vec<String> {
    let mut rows = vec!["#".repeat(size)];
    for y in 1..size - 1 {
        let interior: String = (1..size - 1)
            .map(|x| char::from(PATTERN[(x * 7 + y * 13) % PATTERN.len()]))
            .collect();
        rows.push(format!("#{interior}#"));
    }
    rows.push("#".repeat(size));
    rows
}

fn bench_construct(c: &mut Criterion) {
    let rows = big_map(200);

    c.bench_function("construct_200x200", |b| {
        b.iter(|| {
            let grid = GridMap::construct(black_box(&rows)).unwrap();
            black_box(grid)
        });
    });
}

fn bench_score(c: &mut Criterion) {
    let habitat = Habitat::new(GridMap::construct(&big_map(200)).unwrap());

    c.bench_function("total_score_200x200", |b| {
        b.iter(|| black_box(habitat.total_score()));
    });

    c.bench_function("report_200x200", |b| {
        b.iter(|| black_box(habitat.report()));
    });
}

fn bench_duel(c: &mut Criterion) {
    c.bench_function("duel_15_vs_10", |b| {
        b.iter(|| black_box(resolve_duel(black_box(15), black_box(10))));
    });

    c.bench_function("duel_long", |b| {
        b.iter(|| black_box(resolve_duel(black_box(10_000), black_box(9_999))));
    });
}

fn bench_fauna_walk(c: &mut Criterion) {
    let start = Habitat::new(GridMap::construct(&big_map(64)).unwrap());
    let directions = [
        Direction::EAST,
        Direction::SOUTH,
        Direction::SOUTH_EAST,
        Direction::WEST,
        Direction::NORTH_EAST,
    ];

    c.bench_function("fauna_walk_64x64", |b| {
        b.iter(|| {
            let mut habitat = start.clone();
            for (i, (at, _)) in habitat.martian_animals().into_iter().enumerate() {
                let _ = habitat.step_fauna(at, directions[i % directions.len()]);
            }
            black_box(check_invariants(&habitat).len())
        });
    });
}

criterion_group!(
    benches,
    bench_construct,
    bench_score,
    bench_duel,
    bench_fauna_walk
);
criterion_main!(benches);
