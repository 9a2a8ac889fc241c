//! Application configuration.

use std::path::PathBuf;

/// Default location of the persisted inventory, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Environment variable overriding [`DEFAULT_DATA_FILE`].
pub const DATA_FILE_VAR: &str = "STOCKLOG_DATA_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each known variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup(DATA_FILE_VAR) {
            Some(value) if value.trim().is_empty() => {
                tracing::warn!("{DATA_FILE_VAR} is empty; using {DEFAULT_DATA_FILE}");
            }
            Some(value) => config.data_file = PathBuf::from(value),
            None => {}
        }

        config
    }
}
