//! History log command.

use super::output::{JsonRun, format_history};
use super::{CliError, OutputFormat};
use habitat::SessionConfig;
use habitat::history::read_history;
use std::path::PathBuf;

/// Execute the history command.
///
/// # Errors
///
/// Returns an error if the log is missing or malformed.
pub(crate) fn execute(log: Option<PathBuf>, format: OutputFormat) -> Result<(), CliError> {
    let config = SessionConfig::from_env().with_history_log(log);
    let records = read_history(&config.history_log)?;

    match format {
        OutputFormat::Text => {
            println!("{}", config.history_log.display());
            print!("{}", format_history(&records));
        }
        OutputFormat::Json => {
            let runs: Vec<JsonRun<'_>> = records
                .iter()
                .enumerate()
                .map(|(i, record)| JsonRun { run: i + 1, record })
                .collect();
            println!("{}", serde_json::to_string_pretty(&runs)?);
        }
    }

    Ok(())
}
