// src/config.rs
//! Optional `deckstat.toml` defaults, overridable from the CLI.

use std::path::Path;

use serde::Deserialize;

use crate::error::{DeckstatError, Result};

pub const CONFIG_FILE: &str = "deckstat.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Worker pool size used when the CLI does not specify one.
    pub threads: usize,
    /// Upper bound in seconds on waiting for the pool to finish.
    pub timeout_secs: u64,
    /// Rows shown in the printed top-N table.
    pub top: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: 4,
            timeout_secs: 60,
            top: 10,
        }
    }
}

impl Config {
    /// Loads `deckstat.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file exists but cannot be read, and `Parse` if
    /// it is not valid TOML for this shape.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Same as [`Config::load`] but from an explicit path (used by tests).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| DeckstatError::io(e, path))?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| DeckstatError::parse(path, e.to_string()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.threads == 0 {
            return Err(DeckstatError::parse(path, "threads must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(DeckstatError::parse(path, "timeout_secs must be at least 1"));
        }
        Ok(())
    }
}
