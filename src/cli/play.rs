//! Interactive session command.

use super::CliError;
use habitat::{Session, SessionConfig, SessionEnd};
use std::io;
use std::path::PathBuf;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if console I/O fails or no map could be loaded.
pub(crate) fn execute(map: Option<PathBuf>, log: Option<PathBuf>) -> Result<(), CliError> {
    let config = SessionConfig::from_env().with_history_log(log);
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock(), config);

    match session.run(map.as_deref())? {
        SessionEnd::Completed { .. } | SessionEnd::InputClosed => Ok(()),
        SessionEnd::Aborted => Err(CliError::new("no Martian land map loaded")),
    }
}
