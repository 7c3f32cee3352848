//! CLI configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use labwork_guess::GameConfig;
use labwork_lookup::LookupConfig;
use serde::{Deserialize, Serialize};

/// Settings loaded from `--config`. Missing sections fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub lookup: LookupConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("invalid config '{}'", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }
}
