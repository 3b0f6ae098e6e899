use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a [`Config`](crate::config::Config) cannot be loaded or used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{cols}x{rows} board with slot size {slot_size} is too large to address in pixels")]
    BoardTooLarge { cols: u16, rows: u16, slot_size: u16 },

    #[error("start position ({x}, {y}) is not aligned to slot size {slot_size}")]
    UnalignedStart { x: i32, y: i32, slot_size: u16 },

    #[error("start position ({x}, {y}) lies outside the {cols}x{rows} board")]
    StartOutsideBoard { x: i32, y: i32, cols: u16, rows: u16 },

    #[error("invalid colour '{value}' for {field}")]
    Colour { field: &'static str, value: String },
}

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
