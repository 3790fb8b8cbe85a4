use std::path::Path;

use crate::ai::{MoveSelector, SelectorConfig};
use crate::error::{BoardError, ConfigError};
use crate::game::{GameState, DEFAULT_COLS, DEFAULT_ROWS};

/// Widest board the text rendering can label with single-digit columns.
pub const MAX_DISPLAY_WIDTH: usize = 9;
/// Tallest board the binary will set up.
pub const MAX_HEIGHT: usize = 64;

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub selector: SelectorConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width > MAX_DISPLAY_WIDTH {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_DISPLAY_WIDTH}"
            )));
        }
        if self.board.height > MAX_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_HEIGHT}"
            )));
        }
        Ok(())
    }

    /// Start a game with these settings.
    pub fn new_game(&self) -> Result<GameState, BoardError> {
        Ok(GameState::new(self.board.width, self.board.height)?
            .with_selector(MoveSelector::new(self.selector)))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
