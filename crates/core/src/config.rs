//! Game configuration, read from `TUI_2048_*` environment variables.
//!
//! | Variable | Default | Format |
//! |----------|---------|--------|
//! | `TUI_2048_WIDTH` | 4 | positive integer |
//! | `TUI_2048_HEIGHT` | 4 | positive integer |
//! | `TUI_2048_INIT_TILES` | 2 | a count, or `value:x:y` placements separated by commas |
//! | `TUI_2048_TARGET` | 2048 | power of two |
//! | `TUI_2048_SEED` | random | u64 |
//!
//! Unset or blank variables fall back to the default. A variable that is set
//! but malformed is an error.

use std::env;
use std::str::FromStr;

use crate::board::InitialTiles;
use crate::error::BoardError;
use crate::types::{is_tile_value, Tile, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, WIN_TILE};

pub const ENV_WIDTH: &str = "TUI_2048_WIDTH";
pub const ENV_HEIGHT: &str = "TUI_2048_HEIGHT";
pub const ENV_INIT_TILES: &str = "TUI_2048_INIT_TILES";
pub const ENV_TARGET: &str = "TUI_2048_TARGET";
pub const ENV_SEED: &str = "TUI_2048_SEED";

/// Everything needed to start a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub initial_tiles: InitialTiles,
    pub target: Tile,
    /// `None` seeds the spawner from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            initial_tiles: InitialTiles::default(),
            target: WIN_TILE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from the process environment.
    pub fn from_env() -> Result<Self, BoardError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup (the environment, a map in tests, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(|s| (key, s))
        };
        let defaults = Self::default();

        let width = match get(ENV_WIDTH) {
            Some((key, raw)) => parse_number(key, &raw)?,
            None => defaults.width,
        };
        let height = match get(ENV_HEIGHT) {
            Some((key, raw)) => parse_number(key, &raw)?,
            None => defaults.height,
        };
        let initial_tiles = match get(ENV_INIT_TILES) {
            Some((key, raw)) => parse_initial_tiles(key, &raw)?,
            None => defaults.initial_tiles,
        };
        let target = match get(ENV_TARGET) {
            Some((key, raw)) => {
                let target: Tile = parse_number(key, &raw)?;
                if !is_tile_value(target) {
                    return Err(BoardError::InvalidTile(target));
                }
                target
            }
            None => defaults.target,
        };
        let seed = match get(ENV_SEED) {
            Some((key, raw)) => Some(parse_number(key, &raw)?),
            None => defaults.seed,
        };

        Ok(Self {
            width,
            height,
            initial_tiles,
            target,
            seed,
        })
    }
}

fn parse_number<T: FromStr>(key: &'static str, raw: &str) -> Result<T, BoardError> {
    raw.parse().map_err(|_| BoardError::InvalidSetting {
        key,
        value: raw.to_string(),
    })
}

/// `"3"` spawns three random tiles; `"2:0:0,4:1:0"` places explicit tiles.
fn parse_initial_tiles(key: &'static str, raw: &str) -> Result<InitialTiles, BoardError> {
    if !raw.contains(':') {
        return parse_number(key, raw).map(InitialTiles::Random);
    }

    let mut tiles = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let parts: Vec<&str> = entry.split(':').map(str::trim).collect();
        let [value, x, y] = parts.as_slice() else {
            return Err(BoardError::InvalidSetting {
                key,
                value: entry.to_string(),
            });
        };
        tiles.push((
            parse_number(key, value)?,
            parse_number(key, x)?,
            parse_number(key, y)?,
        ));
    }
    Ok(InitialTiles::Placed(tiles))
}
