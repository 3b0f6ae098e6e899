use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::snake::Position;

/// Edge length of one slot in pixels.
pub const DEFAULT_SLOT_SIZE: u16 = 20;

/// Board height in slots.
pub const DEFAULT_ROWS: u16 = 20;

/// Board width in slots.
pub const DEFAULT_COLS: u16 = 20;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

pub const DEFAULT_SCORE_PER_FOOD: u32 = 3;
pub const DEFAULT_SCORE_WIN: u32 = 30;
pub const DEFAULT_SNAKE_SIZE: u16 = 5;

/// Logical grid dimensions passed through the game as a named type.
///
/// Width is the column count and height the row count, both in slots.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Pixel size of the playing field.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Optional colour overrides, written as `#rrggbb` or a named ANSI colour.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub board: Option<String>,
    pub food: Option<String>,
    pub snake: Option<String>,
}

/// Static game configuration. Built once at startup and never mutated while
/// a game runs.
///
/// JSON files use the camelCase keys of the browser build this game started
/// from, so `{"scoreWin": 60, "speed": 120}` is a valid partial override.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub score_per_food: u32,
    pub score_win: u32,
    pub slot_size: u16,
    /// Kept for parity with the config record; drawing always fills a
    /// whole slot.
    pub snake_size: u16,
    /// Tick interval in milliseconds.
    pub speed: u64,
    pub rows: u16,
    pub cols: u16,
    pub snake_start_position: Position,
    pub palette: PaletteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            score_per_food: DEFAULT_SCORE_PER_FOOD,
            score_win: DEFAULT_SCORE_WIN,
            slot_size: DEFAULT_SLOT_SIZE,
            snake_size: DEFAULT_SNAKE_SIZE,
            speed: DEFAULT_TICK_INTERVAL_MS,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            snake_start_position: Position {
                x: 5 * i32::from(DEFAULT_SLOT_SIZE),
                y: 5 * i32::from(DEFAULT_SLOT_SIZE),
            },
            palette: PaletteConfig::default(),
        }
    }
}

impl Config {
    /// Reads and validates a JSON config file. Missing keys keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&raw)
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the tick engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zero_checks = [
            ("slotSize", self.slot_size == 0),
            ("rows", self.rows == 0),
            ("cols", self.cols == 0),
            ("speed", self.speed == 0),
            ("scorePerFood", self.score_per_food == 0),
        ];
        if let Some((field, _)) = zero_checks.into_iter().find(|(_, is_zero)| *is_zero) {
            return Err(ConfigError::Zero { field });
        }

        let slot = i32::from(self.slot_size);
        let width = i32::from(self.cols).checked_mul(slot);
        let height = i32::from(self.rows).checked_mul(slot);
        let (Some(width), Some(height)) = (width, height) else {
            return Err(ConfigError::BoardTooLarge {
                cols: self.cols,
                rows: self.rows,
                slot_size: self.slot_size,
            });
        };

        let Position { x, y } = self.snake_start_position;
        if x % slot != 0 || y % slot != 0 {
            return Err(ConfigError::UnalignedStart {
                x,
                y,
                slot_size: self.slot_size,
            });
        }

        if x < 0 || y < 0 || x >= width || y >= height {
            return Err(ConfigError::StartOutsideBoard {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }

        crate::theme::Palette::resolve(&self.palette)?;
        Ok(())
    }

    /// Grid size in slots.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.cols,
            height: self.rows,
        }
    }

    /// Board width in pixels (`cols * slot_size`). Saturates for boards that
    /// [`Config::validate`] rejects.
    #[must_use]
    pub fn board_width_px(&self) -> i32 {
        i32::from(self.cols).saturating_mul(i32::from(self.slot_size))
    }

    /// Board height in pixels (`rows * slot_size`).
    #[must_use]
    pub fn board_height_px(&self) -> i32 {
        i32::from(self.rows).saturating_mul(i32::from(self.slot_size))
    }

    /// Container size derived from the grid, so it always tracks overrides of
    /// `rows`, `cols`, or `slotSize`.
    #[must_use]
    pub fn container_dimensions(&self) -> Dimensions {
        Dimensions {
            width: u32::from(self.cols) * u32::from(self.slot_size),
            height: u32::from(self.rows) * u32::from(self.slot_size),
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed)
    }
}
