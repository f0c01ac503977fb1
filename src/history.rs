//! Habitability history log.
//!
//! Every finished session appends one record:
//!
//! ```text
//! ==START==
//! Potato = 1
//! Cow = 1
//! SCORE= 10
//! ==END==
//! ```
//!
//! Status lines hold one `<name> = <count>` line per listed kind present,
//! in [`Entity::STATUS_ORDER`].

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::game::{Entity, HabitabilityReport};

const START_MARKER: &str = "==START==";
const END_MARKER: &str = "==END==";
const SCORE_PREFIX: &str = "SCORE=";

/// Errors reading or writing the history log.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The log file does not exist yet.
    #[error("history log not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The log content does not follow the record format.
    #[error("malformed history at line {line}: {reason}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        reason: &'static str,
    },
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    /// Status lines, verbatim.
    pub status_lines: Vec<String>,
    /// Total habitability score.
    pub score: u32,
}

impl RunRecord {
    /// Build a record from a score report.
    ///
    /// Only kinds in [`Entity::STATUS_ORDER`] get a line.
    #[must_use]
    pub fn from_report(report: &HabitabilityReport) -> Self {
        Self {
            status_lines: Entity::STATUS_ORDER
                .iter()
                .filter_map(|&entity| match report.count_of(entity) {
                    0 => None,
                    count => Some(format!("{} = {count}", entity.name())),
                })
                .collect(),
            score: report.total_score,
        }
    }
}

/// Render a record in log format, including the trailing newline.
#[must_use]
pub fn format_record(record: &RunRecord) -> String {
    let mut text = String::new();
    text.push_str(START_MARKER);
    text.push('\n');
    for line in &record.status_lines {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(&format!("{SCORE_PREFIX} {}\n", record.score));
    text.push_str(END_MARKER);
    text.push('\n');
    text
}

/// Append `record` to the log at `path`, creating the file if needed.
///
/// # Errors
///
/// Returns an error if the log cannot be opened or written.
pub fn append_record(path: &Path, record: &RunRecord) -> Result<(), HistoryError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_record(record).as_bytes())?;
    tracing::info!(path = %path.display(), score = record.score, "history record appended");
    Ok(())
}

/// Parse every record in `reader`.
///
/// Lines outside a record are skipped.
///
/// # Errors
///
/// Returns an error on unreadable input, a score that is not a number, a
/// record without a score, or a record left open at end of input.
pub fn parse_history<R: BufRead>(reader: R) -> Result<Vec<RunRecord>, HistoryError> {
    let mut records = Vec::new();
    let mut open: Option<(Vec<String>, Option<u32>)> = None;
    let mut line_no = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        line_no += 1;

        let Some((status_lines, score)) = open.as_mut() else {
            if line.contains(START_MARKER) {
                open = Some((Vec::new(), None));
            } else if !line.trim().is_empty() {
                tracing::warn!(line = line_no, "skipping text outside history record");
            }
            continue;
        };

        if line.contains(END_MARKER) {
            let score = score.ok_or(HistoryError::Malformed {
                line: line_no,
                reason: "record has no score",
            })?;
            records.push(RunRecord {
                status_lines: std::mem::take(status_lines),
                score,
            });
            open = None;
        } else if let Some(value) = line.strip_prefix(SCORE_PREFIX) {
            *score = Some(value.trim().parse().map_err(|_| HistoryError::Malformed {
                line: line_no,
                reason: "score is not a number",
            })?);
        } else {
            status_lines.push(line.to_string());
        }
    }

    if open.is_some() {
        return Err(HistoryError::Malformed {
            line: line_no,
            reason: "unterminated record",
        });
    }
    Ok(records)
}

/// Read every record in the log at `path`.
///
/// # Errors
///
/// Returns [`HistoryError::NotFound`] if the log does not exist, or any
/// parse error from [`parse_history`].
pub fn read_history(path: &Path) -> Result<Vec<RunRecord>, HistoryError> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(HistoryError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    parse_history(BufReader::new(file))
}
