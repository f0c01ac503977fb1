#![no_main]

use habitat::game::GridMap;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let rows: Vec<&str> = text.lines().collect();

    // Construction must never panic, and anything it accepts must round-trip.
    if let Ok(grid) = GridMap::construct(&rows) {
        assert_eq!(grid.serialize(), rows, "serialization changed the grid text");
        assert_eq!(grid.height(), rows.len());
    }
});
