//! Error type for board construction and configuration.

use crate::types::Tile;

/// Everything that can go wrong before a board exists.
///
/// Once a [`Board`](crate::Board) is built, no operation on it fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("tile value {0} is not a positive power of two")]
    InvalidTile(Tile),

    #[error("position ({x}, {y}) is outside a {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("spawn distribution needs at least one tile with a positive weight")]
    EmptyDistribution,

    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },
}
