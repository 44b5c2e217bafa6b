//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 board engine and the game session built on it.
//! It has **no dependencies** on UI, terminals or I/O, which makes it:
//!
//! - **Deterministic**: the same seed spawns the same tiles in the same cells
//! - **Testable**: explicit tile values and positions bypass the RNG entirely
//! - **Portable**: usable from a terminal, a GUI or a headless solver
//!
//! # Module Structure
//!
//! - [`board`]: the grid, the four slides, tile spawning and the win/loss scan
//! - [`game`]: one session (slide, spawn on change, re-classify)
//! - [`rng`]: the seeded tile spawner and its value distribution
//! - [`snapshot`]: plain-data board copies for renderers
//! - [`config`]: `TUI_2048_*` environment configuration
//! - [`error`]: construction and configuration errors
//!
//! # Game Rules
//!
//! - A slide moves every tile as far as it goes toward one edge
//! - Two equal tiles that meet merge into one tile of twice the value
//! - A tile merges at most once per slide: `[2, 2, 2, 0]` slid right is `[0, 0, 2, 4]`
//! - After a slide that changed the board, a 2 (7 in 8) or a 4 (1 in 8) appears
//!   in a random empty cell
//! - Reaching the target tile (2048 by default) wins; a full board with no equal
//!   neighbours loses
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, BoardState, Direction};
//!
//! let mut board = Board::with_seed(4, 4, 12345).unwrap();
//! board.spawn_tile(Some(2), Some((0, 0)));
//! board.spawn_tile(Some(2), Some((3, 0)));
//!
//! assert!(board.slide(Direction::Left));
//! assert_eq!(board.get(0, 0), Some(4));
//! assert_eq!(board.state(), BoardState::Continue);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, InitialTiles};
pub use config::GameConfig;
pub use error::BoardError;
pub use game::{Game, MoveOutcome};
pub use rng::{TileDistribution, TileSpawner};
pub use snapshot::GameSnapshot;
pub use types::{BoardState, Direction, Tile};
