//! Output formatting utilities for CLI.

use habitat::history::RunRecord;
use habitat::{GridMap, HabitabilityReport};
use serde::Serialize;

/// JSON-serializable habitability report.
#[derive(Debug, Serialize)]
pub(super) struct JsonReport {
    /// Grid width in cells.
    pub(super) width: usize,
    /// Grid height in cells.
    pub(super) height: usize,
    /// Kinds present on the grid.
    pub(super) census: Vec<JsonCensusEntry>,
    /// Bonus from interactions (zero for a freshly loaded map).
    pub(super) behavior_score: u32,
    /// Total habitability score.
    pub(super) total_score: u32,
}

/// JSON-serializable census line.
#[derive(Debug, Serialize)]
pub(super) struct JsonCensusEntry {
    /// Display name.
    pub(super) name: &'static str,
    /// Map symbol.
    pub(super) symbol: char,
    /// Number on the grid.
    pub(super) count: u32,
    /// Score contributed by this kind.
    pub(super) score: u32,
}

impl JsonReport {
    /// Create from a grid and its report.
    pub(super) fn from_report(grid: &GridMap, report: &HabitabilityReport) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            census: report
                .census
                .iter()
                .map(|entry| JsonCensusEntry {
                    name: entry.entity.name(),
                    symbol: entry.entity.symbol(),
                    count: entry.count,
                    score: entry.count * entry.entity.score(),
                })
                .collect(),
            behavior_score: report.behavior_score,
            total_score: report.total_score,
        }
    }
}

/// JSON-serializable history run.
#[derive(Debug, Serialize)]
pub(super) struct JsonRun<'a> {
    /// Run number, from 1.
    pub(super) run: usize,
    /// The recorded run.
    #[serde(flatten)]
    pub(super) record: &'a RunRecord,
}

/// Format a report as human-readable text.
pub(super) fn format_report(grid: &GridMap, report: &HabitabilityReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Habitability Status ({}x{})\n",
        grid.width(),
        grid.height()
    ));
    output.push_str("======================\n");
    if report.census.is_empty() {
        output.push_str("No Record found.\n");
    }
    for entry in &report.census {
        output.push_str(&format!(
            "  {:<12} {} x{:<3} {:>4} points\n",
            entry.entity.name(),
            entry.entity.symbol(),
            entry.count,
            entry.count * entry.entity.score()
        ));
    }
    output.push_str(&format!(
        "\nTotal Habitability Score: {}\n",
        report.total_score
    ));

    output
}

/// Format history records as human-readable text.
pub(super) fn format_history(records: &[RunRecord]) -> String {
    let mut output = String::new();

    if records.is_empty() {
        output.push_str("No Record found.\n");
    }
    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!("Program run :{}\n", i + 1));
        for line in &record.status_lines {
            output.push_str(&format!("  {line}\n"));
        }
        output.push_str(&format!("  Total Habitability Score: {}\n", record.score));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitat::game::BehaviorScore;

    fn grid() -> GridMap {
        GridMap::construct(&["#####", "#PC.#", "#####"]).unwrap()
    }

    #[test]
    fn test_format_report() {
        let grid = grid();
        let report = HabitabilityReport::new(&grid, BehaviorScore::default());
        let text = format_report(&grid, &report);
        assert!(text.starts_with("Habitability Status (5x3)\n"));
        assert!(text.contains("Potato"));
        assert!(text.contains("  Cow          C x1      5 points\n"));
        assert!(text.ends_with("\nTotal Habitability Score: 7\n"));
    }

    #[test]
    fn test_json_report() {
        let grid = grid();
        let report = HabitabilityReport::new(&grid, BehaviorScore::default());
        let json = serde_json::to_value(JsonReport::from_report(&grid, &report)).unwrap();
        assert_eq!(json["total_score"], 7);
        assert_eq!(json["census"][1]["name"], "Cow");
        assert_eq!(json["census"][1]["score"], 5);
    }

    #[test]
    fn test_format_history() {
        let records = vec![RunRecord {
            status_lines: vec!["Cow = 1".to_string()],
            score: 5,
        }];
        let text = format_history(&records);
        assert_eq!(
            text,
            "Program run :1\n  Cow = 1\n  Total Habitability Score: 5\n"
        );
        assert_eq!(format_history(&[]), "No Record found.\n");
    }
}
