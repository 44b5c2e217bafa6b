//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! A board is `width` columns by `height` rows:
//!
//! - **x** grows to the right (column 0 is the left edge)
//! - **y** grows upward (row 0 is the bottom edge)
//!
//! Every slide and every renderer uses this convention, so "up" always means
//! "toward `y = height - 1`".
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 4 | Columns on a standard board |
//! | `DEFAULT_BOARD_HEIGHT` | 4 | Rows on a standard board |
//! | `DEFAULT_INIT_TILES` | 2 | Random tiles spawned at game start |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Axis, Direction, BoardState, WIN_TILE};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.axis(), Axis::Vertical);
//! assert!(dir.is_positive());
//!
//! assert!(BoardState::Win.is_terminal());
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// A tile value. `0` is an empty cell; anything else is a power of two.
pub type Tile = u32;

/// Value stored in an empty cell.
pub const EMPTY: Tile = 0;

/// Board width in cells for a standard game
pub const DEFAULT_BOARD_WIDTH: usize = 4;

/// Board height in cells for a standard game
pub const DEFAULT_BOARD_HEIGHT: usize = 4;

/// Number of random tiles spawned when a game starts
pub const DEFAULT_INIT_TILES: usize = 2;

/// Reaching this tile wins the game
pub const WIN_TILE: Tile = 2048;

/// Spawn weights as `(value, weight)` pairs: a 4 shows up once in every eight draws.
pub const TILE_SPAWN_WEIGHTS: [(Tile, u32); 2] = [(2, 7), (4, 1)];

/// Returns true for a positive power of two, the only legal non-empty tile values.
#[inline]
pub fn is_tile_value(value: Tile) -> bool {
    value.is_power_of_two()
}

/// Axis a slide moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along x (left/right)
    Horizontal,
    /// Along y (up/down)
    Vertical,
}

/// The four slide directions, named after the edge the tiles move toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The axis tiles travel along.
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// True when tiles move toward the high end of their axis (`Up` and `Right`).
    pub fn is_positive(&self) -> bool {
        matches!(self, Direction::Up | Direction::Right)
    }

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "right" | "r",
    /// "down" | "d", "left" | "l".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Outcome of a terminal-state scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardState {
    /// A tile reached the target value
    Win,
    /// The board is full and no two neighbours match
    Lost,
    /// At least one move can still change the board
    Continue,
}

impl BoardState {
    /// True for `Win` and `Lost`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BoardState::Continue)
    }

    /// Uppercase label, as printed when a game ends.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardState::Win => "WIN",
            BoardState::Lost => "LOST",
            BoardState::Continue => "CONTINUE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_axis_and_sign() {
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Right.axis(), Axis::Horizontal);

        assert!(Direction::Up.is_positive());
        assert!(Direction::Right.is_positive());
        assert!(!Direction::Down.is_positive());
        assert!(!Direction::Left.is_positive());
    }

    #[test]
    fn direction_opposite_flips_sign_but_keeps_axis() {
        for dir in Direction::ALL {
            let opp = dir.opposite();
            assert_eq!(dir.axis(), opp.axis());
            assert_ne!(dir.is_positive(), opp.is_positive());
            assert_eq!(opp.opposite(), dir);
        }
    }

    #[test]
    fn direction_string_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("L"), Some(Direction::Left));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn only_continue_is_non_terminal() {
        assert!(BoardState::Win.is_terminal());
        assert!(BoardState::Lost.is_terminal());
        assert!(!BoardState::Continue.is_terminal());
    }

    #[test]
    fn tile_values_are_powers_of_two() {
        assert!(is_tile_value(2));
        assert!(is_tile_value(1));
        assert!(is_tile_value(WIN_TILE));
        assert!(!is_tile_value(EMPTY));
        assert!(!is_tile_value(6));
    }

    #[test]
    fn default_spawn_weights_favour_two() {
        let total: u32 = TILE_SPAWN_WEIGHTS.iter().map(|&(_, w)| w).sum();
        assert_eq!(total, 8);
        assert_eq!(TILE_SPAWN_WEIGHTS[1], (4, 1));
    }
}
