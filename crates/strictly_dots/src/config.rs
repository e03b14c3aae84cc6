//! Board dimensions, fixed once a game starts.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest supported board edge, in dots.
pub const MIN_DIM: usize = 2;
/// Largest supported board edge, in dots.
pub const MAX_DIM: usize = 5;
/// Edge length used when nothing else is configured.
pub const DEFAULT_DIM: usize = 3;

/// Width and height of the dot grid.
///
/// Both edges are in `MIN_DIM..=MAX_DIM`. Construction is the only
/// place that range is checked; everything downstream assumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Dimensions")]
pub struct BoardConfig {
    width: usize,
    height: usize,
}

/// Unchecked dimensions as they arrive from a config file.
#[derive(Debug, Clone, Copy, Deserialize)]
struct Dimensions {
    width: usize,
    height: usize,
}

impl TryFrom<Dimensions> for BoardConfig {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(dims: Dimensions) -> Result<Self, Self::Error> {
        Self::new(dims.width, dims.height)
    }
}

impl BoardConfig {
    /// Creates a board configuration, rejecting edges outside `MIN_DIM..=MAX_DIM`.
    #[track_caller]
    #[instrument]
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        for (name, value) in [("width", width), ("height", height)] {
            if !(MIN_DIM..=MAX_DIM).contains(&value) {
                return Err(ConfigError::new(format!(
                    "{name} must be between {MIN_DIM} and {MAX_DIM}, got {value}"
                )));
            }
        }
        Ok(Self { width, height })
    }

    /// Number of dot columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of dot rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of lines on the board, which is also the number of turns.
    pub fn max_moves(&self) -> usize {
        self.width * (self.height - 1) + self.height * (self.width - 1)
    }

    /// Number of unit boxes on the board.
    pub fn boxes_to_win(&self) -> usize {
        (self.width - 1) * (self.height - 1)
    }

    /// Highest coordinate digit the move parser accepts.
    pub fn max_digit(&self) -> usize {
        self.width.max(self.height) - 1
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIM,
            height: DEFAULT_DIM,
        }
    }
}

impl std::fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
