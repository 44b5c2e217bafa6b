//! Game module - one session over a board
//!
//! Ties the board to the move loop every front end runs: slide, spawn a tile
//! if the slide changed anything, then re-classify the board. Once the board
//! is won or lost, further moves are ignored.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::snapshot::GameSnapshot;
use crate::types::{BoardState, Direction};

/// What a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The slide moved or merged at least one tile.
    pub changed: bool,
    /// A new tile was placed after the slide.
    pub spawned: bool,
    /// Board state after the move.
    pub state: BoardState,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: BoardState,
    /// Moves that changed the board
    moves: u32,
}

impl Game {
    /// Start a game from `config`.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let board = Board::with_initial_tiles(
            config.width,
            config.height,
            &config.initial_tiles,
            config.seed,
        )?
        .with_target(config.target)?;
        Ok(Self::from_board(board))
    }

    /// Wrap an already prepared board.
    pub fn from_board(board: Board) -> Self {
        let state = board.state();
        if state.is_terminal() {
            log::info!("game starts in terminal state {}", state.as_str());
        }
        Self {
            board,
            state,
            moves: 0,
        }
    }

    /// Slide in `direction`, spawn if anything changed, and re-check the state.
    pub fn apply(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.is_terminal() {
            return MoveOutcome {
                changed: false,
                spawned: false,
                state: self.state,
            };
        }

        let changed = self.board.slide(direction);
        let spawned = changed && self.board.spawn_tile(None, None);
        if changed {
            self.moves += 1;
        }
        log::trace!(
            "move {} {}: changed={} spawned={}",
            self.moves,
            direction.as_str(),
            changed,
            spawned
        );

        let state = self.board.state();
        if state != self.state {
            log::info!(
                "board is now {} after {} moves (max tile {})",
                state.as_str(),
                self.moves,
                self.board.max_tile()
            );
        }
        self.state = state;

        MoveOutcome {
            changed,
            spawned,
            state,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::empty(self.board.width(), self.board.height());
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out` in place, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.state = self.state;
        out.target = self.board.target();
        out.moves = self.moves;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitialTiles;

    fn placed(width: usize, height: usize, tiles: Vec<(u32, usize, usize)>) -> Game {
        let config = GameConfig {
            width,
            height,
            initial_tiles: InitialTiles::Placed(tiles),
            seed: Some(3),
            ..GameConfig::default()
        };
        Game::new(&config).unwrap()
    }

    #[test]
    fn changing_move_spawns_one_tile() {
        let mut game = placed(4, 4, vec![(2, 0, 0)]);
        let outcome = game.apply(Direction::Right);

        assert!(outcome.changed);
        assert!(outcome.spawned);
        assert_eq!(outcome.state, BoardState::Continue);
        assert_eq!(game.board().get(3, 0), Some(2));
        assert_eq!(game.board().empty_count(), 14);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn blocked_move_does_not_spawn() {
        let mut game = placed(4, 4, vec![(2, 0, 0)]);
        let before = game.board().cells().to_vec();
        let outcome = game.apply(Direction::Left);

        assert!(!outcome.changed);
        assert!(!outcome.spawned);
        assert_eq!(game.board().cells(), &before[..]);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn merging_into_target_wins_and_freezes() {
        let config = GameConfig {
            width: 2,
            height: 1,
            initial_tiles: InitialTiles::Placed(vec![(8, 0, 0), (8, 1, 0)]),
            target: 16,
            seed: Some(1),
        };
        let mut game = Game::new(&config).unwrap();
        let outcome = game.apply(Direction::Left);
        assert_eq!(outcome.state, BoardState::Win);
        assert!(game.is_over());

        let frozen = game.board().cells().to_vec();
        let outcome = game.apply(Direction::Right);
        assert!(!outcome.changed);
        assert_eq!(game.board().cells(), &frozen[..]);
    }

    #[test]
    fn invalid_target_is_rejected() {
        let config = GameConfig {
            target: 0,
            seed: Some(1),
            ..GameConfig::default()
        };
        assert_eq!(Game::new(&config).unwrap_err(), BoardError::InvalidTile(0));
    }

    #[test]
    fn largest_tiles_stay_put() {
        let mut game = placed(2, 1, vec![(1 << 31, 0, 0), (1 << 31, 1, 0)]);
        assert_eq!(game.state(), BoardState::Lost);

        let outcome = game.apply(Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(game.board().cells(), &[1 << 31, 1 << 31]);
    }

    #[test]
    fn snapshot_copies_board() {
        let game = placed(3, 2, vec![(4, 2, 1), (2, 0, 0)]);
        let snap = game.snapshot();
        assert_eq!((snap.width, snap.height), (3, 2));
        assert_eq!(snap.get(2, 1), Some(4));
        assert_eq!(snap.get(0, 0), Some(2));
        assert_eq!(snap.state, BoardState::Continue);

        let mut reused = GameSnapshot::empty(8, 8);
        game.snapshot_into(&mut reused);
        assert_eq!(reused, snap);
    }
}
