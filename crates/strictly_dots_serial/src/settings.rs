//! Game settings loaded from TOML.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_dots::{BoardConfig, ConfigError};
use tracing::{debug, info, instrument};

/// Settings file contents.
///
/// ```toml
/// [board]
/// width = 4
/// height = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimensions; 3x3 when absent.
    #[serde(default)]
    board: BoardConfig,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board = %config.board, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides and re-checks the bounds.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn with_overrides(
        &self,
        width: Option<usize>,
        height: Option<usize>,
    ) -> Result<BoardConfig, ConfigError> {
        BoardConfig::new(
            width.unwrap_or(self.board.width()),
            height.unwrap_or(self.board.height()),
        )
    }
}
