use crate::types::{BoardState, Tile, EMPTY, WIN_TILE};

/// Plain-data copy of a game for renderers.
///
/// `cells` is row-major with `y = 0` as the bottom row, matching
/// [`Board::cells`](crate::Board::cells).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Tile>,
    pub state: BoardState,
    pub target: Tile,
    pub moves: u32,
}

impl GameSnapshot {
    /// An empty `width x height` snapshot.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
            state: BoardState::Continue,
            target: WIN_TILE,
            moves: 0,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Write a cell; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: Tile) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
        }
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    pub fn playable(&self) -> bool {
        !self.state.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::empty(crate::types::DEFAULT_BOARD_WIDTH, crate::types::DEFAULT_BOARD_HEIGHT)
    }
}
