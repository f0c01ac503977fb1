//! Console text for maps, status reports and menus.

use std::io::{self, Write};

use crate::game::{Coord, Direction, Entity, GridMap, HabitabilityReport};
use crate::history::RunRecord;

/// Labels for the plant menu, in [`Entity::PLANTABLE`] order.
pub(super) const PLANT_LABELS: [&str; 8] = [
    "a potato",
    "a tomato",
    "an onion",
    "an apple tree",
    "a banana tree",
    "a lily",
    "a rose",
    "a eucalyptus tree",
];

/// Labels for the livestock menu, in [`Entity::LIVESTOCK`] order.
pub(super) const LIVESTOCK_LABELS: [&str; 4] = ["a goat", "a sheep", "a cow", "a dog"];

pub(super) fn write_map<W: Write>(out: &mut W, grid: &GridMap) -> io::Result<()> {
    writeln!(out, "Here is a layout of Martian land.")?;
    writeln!(out)?;
    for row in grid.serialize() {
        writeln!(out, "{row}")?;
    }
    writeln!(out)
}

fn write_status_lines<W: Write>(out: &mut W, lines: &[String], score: u32) -> io::Result<()> {
    writeln!(out, "Habitability Status")?;
    writeln!(out, "======================")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "Total Habitability Score: {score}")
}

pub(super) fn write_status<W: Write>(out: &mut W, report: &HabitabilityReport) -> io::Result<()> {
    if report.census.is_empty() {
        writeln!(out, "Habitability Status")?;
        writeln!(out, "======================")?;
        return writeln!(out, "No Record found.");
    }
    let record = RunRecord::from_report(report);
    write_status_lines(out, &record.status_lines, record.score)
}

pub(super) fn write_history<W: Write>(out: &mut W, records: &[RunRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No Record found.");
    }
    for (run, record) in records.iter().enumerate() {
        writeln!(out, "Program run :{}", run + 1)?;
        write_status_lines(out, &record.status_lines, record.score)?;
    }
    Ok(())
}

pub(super) fn write_units<W: Write>(
    out: &mut W,
    label: &str,
    units: &[(Coord, Entity)],
) -> io::Result<()> {
    writeln!(out, "There are {} {label} found. Select", units.len())?;
    for (n, (at, entity)) in units.iter().enumerate() {
        writeln!(
            out,
            "[{}] for {} at position ({}, {})",
            n + 1,
            entity.name(),
            at.x,
            at.y
        )?;
    }
    writeln!(out, "[0] to go back to main menu")
}

pub(super) fn write_directions<W: Write>(out: &mut W, unit: &str) -> io::Result<()> {
    writeln!(out, "{unit} can move in following directions")?;
    for (key, name) in Direction::MENU {
        writeln!(out, "[{key}] to move {name}.")?;
    }
    writeln!(out, "[0] to go back to main menu")?;
    writeln!(out, "Please enter a direction.")
}

pub(super) fn write_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Please enter")?;
    writeln!(out, "[1] to move Space Robot")?;
    writeln!(out, "[2] to move Space Rover")?;
    writeln!(out, "[3] to move Martian animals")?;
    writeln!(out, "[4] to print the current habitability stats")?;
    writeln!(out, "[5] to print the old habitability stats")?;
    writeln!(out, "[6] to exit")
}

pub(super) fn write_choice_menu<W: Write>(
    out: &mut W,
    title: &str,
    verb: &str,
    labels: &[&str],
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for (n, label) in labels.iter().enumerate() {
        writeln!(out, "[{}] to {verb} {label}", n + 1)?;
    }
    writeln!(out, "[0] to go back to previous menu")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BehaviorScore;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_status() {
        let grid = GridMap::construct(&["#####", "#PC.#", "#####"]).unwrap();
        let report = HabitabilityReport::new(&grid, BehaviorScore::with_total(3));
        let text = render(|out| write_status(out, &report));
        assert_eq!(
            text,
            "Habitability Status\n======================\nPotato = 1\nCow = 1\n\n\
             Total Habitability Score: 10\n"
        );
    }

    #[test]
    fn test_status_of_empty_grid() {
        let grid = GridMap::construct(&["####", "#..#", "####"]).unwrap();
        let report = HabitabilityReport::new(&grid, BehaviorScore::default());
        let text = render(|out| write_status(out, &report));
        assert_eq!(
            text,
            "Habitability Status\n======================\nNo Record found.\n"
        );
    }

    #[test]
    fn test_status_skips_units_and_fauna() {
        let grid = GridMap::construct(&["#######", "#CZ*H@#", "#######"]).unwrap();
        let report = HabitabilityReport::new(&grid, BehaviorScore::default());
        let text = render(|out| write_status(out, &report));
        assert_eq!(
            text,
            "Habitability Status\n======================\nMineral = 1\nCow = 1\n\n\
             Total Habitability Score: 5\n"
        );
    }

    #[test]
    fn test_history_numbers_runs_from_one() {
        let records = vec![
            RunRecord {
                status_lines: vec!["Dog = 1".to_string()],
                score: 5,
            },
            RunRecord {
                status_lines: Vec::new(),
                score: 0,
            },
        ];
        let text = render(|out| write_history(out, &records));
        assert!(text.starts_with("Program run :1\nHabitability Status\n"));
        assert!(text.contains("Program run :2\n"));
        assert!(text.contains("Total Habitability Score: 5\n"));
    }

    #[test]
    fn test_units() {
        let units = [(Coord::new(3, 2), Entity::SpaceRobot)];
        let text = render(|out| write_units(out, "Space Robot", &units));
        assert!(text.contains("[1] for Space Robot at position (3, 2)\n"));
    }

    #[test]
    fn test_menu_labels_line_up() {
        assert_eq!(PLANT_LABELS.len(), Entity::PLANTABLE.len());
        assert_eq!(LIVESTOCK_LABELS.len(), Entity::LIVESTOCK.len());
        assert!(PLANT_LABELS[2].contains(&Entity::PLANTABLE[2].name().to_lowercase()));
    }
}
