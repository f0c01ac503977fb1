//! Session configuration.
use std::env;
use std::path::PathBuf;

/// Map loaded when the user picks the default map.
pub const DEFAULT_MAP_PATH: &str = "resources/default.in";

/// Habitability history log.
pub const DEFAULT_LOG_PATH: &str = "resources/habitability.log";

/// Paths used by an interactive session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Map loaded by the "default map" startup option.
    pub default_map: PathBuf,
    /// History log read by the stats menu and appended on exit.
    pub history_log: PathBuf,
}

impl SessionConfig {
    /// Construct session configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HABITAT_DEFAULT_MAP` - Default map path (default: `resources/default.in`)
    /// - `HABITAT_LOG` - History log path (default: `resources/habitability.log`)
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("HABITAT_DEFAULT_MAP") {
            config.default_map = path;
        }
        if let Some(path) = read_env::<PathBuf>("HABITAT_LOG") {
            config.history_log = path;
        }

        config
    }

    /// Replace the history log path, if one is given.
    #[must_use]
    pub fn with_history_log(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.history_log = path;
        }
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_map: PathBuf::from(DEFAULT_MAP_PATH),
            history_log: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
