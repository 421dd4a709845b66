//! Engine error type.

use thiserror::Error;

/// Errors returned by fallible engine operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("map of {width}x{height} is outside {min}x{min}..={max}x{max}")]
    InvalidDimensions { width: i32, height: i32, min: i32, max: i32 },

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("dungeon has {available} free floor cells but {needed} are required")]
    InsufficientFloor { needed: usize, available: usize },

    #[error("no game in progress")]
    NotPlaying,

    #[error("no inventory item at index {0}")]
    NoSuchItem(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
