//! Board module - the grid, slides, spawning and terminal-state scan
//!
//! The board is a `width x height` grid of tile values stored in a flat,
//! row-major buffer (`y * width + x`). `x` grows to the right and `y` grows
//! upward, so `(0, 0)` is the bottom-left cell.
//!
//! All four slides share one routine. A line is walked from the far edge (the
//! edge tiles move toward) back to the near edge with a write cursor that only
//! ever moves away from the far edge, which is what keeps every tile to at most
//! one merge per slide. The result is built in a scratch buffer and swapped in
//! only when it differs from the live grid.

use std::ops::Index;

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::rng::{TileDistribution, TileSpawner};
use crate::types::{is_tile_value, Axis, BoardState, Direction, Tile, EMPTY, WIN_TILE};

/// How a new board gets its first tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialTiles {
    /// Spawn this many random tiles.
    Random(usize),
    /// Place explicit `(value, x, y)` tiles.
    Placed(Vec<(Tile, usize, usize)>),
}

impl Default for InitialTiles {
    fn default() -> Self {
        InitialTiles::Random(crate::types::DEFAULT_INIT_TILES)
    }
}

/// The game board
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Tile>,
    /// Candidate grid for the slide in progress
    scratch: Vec<Tile>,
    target: Tile,
    spawner: TileSpawner,
}

impl Board {
    /// Create an empty board with a random spawn seed.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::with_spawner(width, height, TileSpawner::from_entropy())
    }

    /// Create an empty board whose random draws replay from `seed`.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_spawner(width, height, TileSpawner::new(seed))
    }

    pub fn with_spawner(
        width: usize,
        height: usize,
        spawner: TileSpawner,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        log::debug!(
            "new {}x{} board, spawn seed {}",
            width,
            height,
            spawner.seed()
        );

        let len = width * height;
        Ok(Self {
            width,
            height,
            cells: vec![EMPTY; len],
            scratch: vec![EMPTY; len],
            target: WIN_TILE,
            spawner,
        })
    }

    /// Create a board and seed it with `initial` tiles.
    ///
    /// Explicit placements are validated up front: a value that is not a power
    /// of two or a position off the board fails construction.
    pub fn with_initial_tiles(
        width: usize,
        height: usize,
        initial: &InitialTiles,
        seed: Option<u64>,
    ) -> Result<Self, BoardError> {
        let spawner = match seed {
            Some(seed) => TileSpawner::new(seed),
            None => TileSpawner::from_entropy(),
        };
        let mut board = Self::with_spawner(width, height, spawner)?;

        match initial {
            InitialTiles::Random(count) => {
                for _ in 0..*count {
                    board.spawn_tile(None, None);
                }
            }
            InitialTiles::Placed(tiles) => {
                for &(value, x, y) in tiles {
                    if !is_tile_value(value) {
                        return Err(BoardError::InvalidTile(value));
                    }
                    board.check_bounds(x, y)?;
                    board.spawn_tile(Some(value), Some((x, y)));
                }
            }
        }
        Ok(board)
    }

    /// Set the tile value that wins the game.
    ///
    /// The target must be a tile value (a power of two); anything else fails
    /// with [`BoardError::InvalidTile`].
    pub fn with_target(mut self, target: Tile) -> Result<Self, BoardError> {
        if !is_tile_value(target) {
            return Err(BoardError::InvalidTile(target));
        }
        self.target = target;
        Ok(self)
    }

    /// Replace the distribution used for random tile values.
    pub fn with_distribution(mut self, distribution: TileDistribution) -> Self {
        self.spawner.set_distribution(distribution);
        self
    }

    #[inline(always)]
    fn cell_index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), BoardError> {
        match self.cell_index(x, y) {
            Some(_) => Ok(()),
            None => Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The tile value that wins.
    pub fn target(&self) -> Tile {
        self.target
    }

    /// Seed of the spawn RNG.
    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.cell_index(x, y).map(|idx| self.cells[idx])
    }

    /// Every `(x, y)` on the board, x in the outer loop and y in the inner.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }

    /// Every cell value, in the same order as [`positions`](Self::positions).
    pub fn values(&self) -> impl Iterator<Item = Tile> + '_ {
        self.positions().map(move |(x, y)| self.cells[y * self.width + x])
    }

    /// Row-major view of the grid.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Write a tile, either the given one or a random draw.
    ///
    /// - `value: None` draws from the spawn distribution.
    /// - `pos: None` picks a uniformly random empty cell; if the board is full
    ///   nothing is written and this returns `false`.
    /// - `pos: Some` overwrites that cell whatever it held. An out-of-bounds
    ///   position is rejected: nothing is written and this returns `false`.
    /// - `value: Some` must be a power of two. Any other value is rejected the
    ///   same way: nothing is written and this returns `false`.
    pub fn spawn_tile(&mut self, value: Option<Tile>, pos: Option<(usize, usize)>) -> bool {
        if let Some(value) = value.filter(|&v| !is_tile_value(v)) {
            log::warn!("rejected spawn of non-tile value {}", value);
            return false;
        }

        let idx = match pos {
            Some((x, y)) => match self.cell_index(x, y) {
                Some(idx) => idx,
                None => {
                    log::warn!(
                        "rejected spawn at ({}, {}) on a {}x{} board",
                        x,
                        y,
                        self.width,
                        self.height
                    );
                    return false;
                }
            },
            None => {
                let Some(nth) = self.spawner.pick(self.empty_count()) else {
                    return false;
                };
                match self
                    .cells
                    .iter()
                    .enumerate()
                    .filter(|(_, &v)| v == EMPTY)
                    .nth(nth)
                {
                    Some((idx, _)) => idx,
                    None => return false,
                }
            }
        };

        let value = value.unwrap_or_else(|| self.spawner.next_value());
        self.cells[idx] = value;
        true
    }

    /// Number of independent lines for a slide in `direction`.
    fn line_count(&self, direction: Direction) -> usize {
        match direction.axis() {
            Axis::Vertical => self.width,
            Axis::Horizontal => self.height,
        }
    }

    /// Cells per line for a slide in `direction`.
    fn line_len(&self, direction: Direction) -> usize {
        match direction.axis() {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    /// Flat index of the cell `step` cells back from the far edge of `line`.
    #[inline(always)]
    fn line_cell(&self, direction: Direction, line: usize, step: usize) -> usize {
        let len = self.line_len(direction);
        let along = if direction.is_positive() {
            len - 1 - step
        } else {
            step
        };
        match direction.axis() {
            Axis::Vertical => along * self.width + line,
            Axis::Horizontal => line * self.width + along,
        }
    }

    /// Slide every tile toward the `direction` edge, merging equal neighbours once.
    ///
    /// Returns `true` if any tile moved or merged. When it returns `false` the
    /// grid is untouched.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let len = self.line_len(direction);
        let mut changed = false;

        self.scratch.fill(EMPTY);

        for line in 0..self.line_count(direction) {
            let far = self.line_cell(direction, line, 0);
            self.scratch[far] = self.cells[far];

            let mut cursor = 0;
            for step in 1..len {
                let value = self.cells[self.line_cell(direction, line, step)];
                if value == EMPTY {
                    continue;
                }

                let dst = self.line_cell(direction, line, cursor);
                if self.scratch[dst] == EMPTY {
                    // slide into the free cell; cursor < step, so the tile moved
                    self.scratch[dst] = value;
                    changed = true;
                } else if let Some(merged) = merged_value(self.scratch[dst], value) {
                    // merge; this cell is closed for the rest of the pass
                    self.scratch[dst] = merged;
                    cursor += 1;
                    changed = true;
                } else {
                    // pile up behind the unmergeable tile
                    cursor += 1;
                    let dst = self.line_cell(direction, line, cursor);
                    self.scratch[dst] = value;
                    if cursor != step {
                        changed = true;
                    }
                }
            }
        }

        if changed {
            std::mem::swap(&mut self.cells, &mut self.scratch);
        }
        changed
    }

    pub fn slide_up(&mut self) -> bool {
        self.slide(Direction::Up)
    }

    pub fn slide_right(&mut self) -> bool {
        self.slide(Direction::Right)
    }

    pub fn slide_down(&mut self) -> bool {
        self.slide(Direction::Down)
    }

    pub fn slide_left(&mut self) -> bool {
        self.slide(Direction::Left)
    }

    /// Would a slide in `direction` change the board? Leaves the board as is.
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.clone().slide(direction)
    }

    /// Directions that would change the board right now.
    pub fn available_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_slide(dir))
            .collect()
    }

    /// Classify the board.
    ///
    /// Checked in order: any tile at the target wins; any empty cell continues;
    /// any two equal neighbours continue; otherwise the game is lost.
    pub fn state(&self) -> BoardState {
        if self.cells.iter().any(|&v| v == self.target) {
            return BoardState::Win;
        }

        if self.cells.iter().any(|&v| v == EMPTY) {
            return BoardState::Continue;
        }

        if self.has_equal_neighbours() {
            return BoardState::Continue;
        }

        BoardState::Lost
    }

    /// True if any cell can merge with its in-bounds right or upper neighbour.
    ///
    /// Looking right and up from every cell visits each adjacent pair exactly
    /// once, edges and corners included.
    fn has_equal_neighbours(&self) -> bool {
        for y in 0..self.height {
            for x in 0..self.width {
                let value = self.cells[y * self.width + x];
                if x + 1 < self.width
                    && merged_value(value, self.cells[y * self.width + x + 1]).is_some()
                {
                    return true;
                }
                if y + 1 < self.height
                    && merged_value(value, self.cells[(y + 1) * self.width + x]).is_some()
                {
                    return true;
                }
            }
        }
        false
    }

    /// Build a board from rows written top row first, as they read on screen.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&[Tile]]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let mut board = Self::with_seed(width, height, 1).unwrap();
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width);
            let y = height - 1 - r;
            for (x, &v) in row.iter().enumerate() {
                board.cells[y * width + x] = v;
            }
        }
        board
    }

    /// Rows top row first, the inverse of `from_rows`.
    #[cfg(test)]
    pub(crate) fn to_rows(&self) -> Vec<Vec<Tile>> {
        (0..self.height)
            .rev()
            .map(|y| self.cells[y * self.width..(y + 1) * self.width].to_vec())
            .collect()
    }
}

/// The tile two equal tiles merge into, or `None` if they differ or the
/// result would not fit in a [`Tile`].
#[inline(always)]
fn merged_value(a: Tile, b: Tile) -> Option<Tile> {
    if a == b {
        a.checked_mul(2)
    } else {
        None
    }
}

impl Index<(usize, usize)> for Board {
    type Output = Tile;

    /// Panics if `(x, y)` is off the board; use [`Board::get`] to check.
    fn index(&self, (x, y): (usize, usize)) -> &Tile {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside a {}x{} board",
            x,
            y,
            self.width,
            self.height
        );
        &self.cells[y * self.width + x]
    }
}
