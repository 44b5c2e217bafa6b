//! Board tests - slide, spawn and terminal-state properties

use tui_2048::core::{Board, BoardError, InitialTiles};
use tui_2048::types::{BoardState, Direction, Tile, EMPTY};

/// Build a board from rows written top row first, the way they read on screen.
fn board_from_rows(rows: &[&[Tile]]) -> Board {
    let height = rows.len();
    let width = rows[0].len();
    let mut board = Board::with_seed(width, height, 1).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v != EMPTY {
                assert!(board.spawn_tile(Some(v), Some((x, height - 1 - r))));
            }
        }
    }
    board
}

fn rows_of(board: &Board) -> Vec<Vec<Tile>> {
    (0..board.height())
        .rev()
        .map(|y| (0..board.width()).map(|x| board[(x, y)]).collect())
        .collect()
}

fn sum(board: &Board) -> u64 {
    board.values().map(u64::from).sum()
}

/// A few dozen seeded boards at various fill levels.
fn sample_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    for seed in 0..40u64 {
        let count = (seed % 14) as usize + 1;
        boards.push(
            Board::with_initial_tiles(4, 4, &InitialTiles::Random(count), Some(seed)).unwrap(),
        );
    }
    boards
}

#[test]
fn test_board_new_empty() {
    let board = Board::with_seed(4, 4, 1).unwrap();
    assert_eq!(board.size(), (4, 4));
    assert_eq!(board.empty_count(), 16);
    assert!(board.values().all(|v| v == EMPTY));
    assert_eq!(board.state(), BoardState::Continue);
}

#[test]
fn test_board_rejects_zero_dimensions() {
    assert!(matches!(
        Board::new(0, 4),
        Err(BoardError::InvalidDimensions { width: 0, height: 4 })
    ));
    assert!(Board::new(4, 0).is_err());
    assert!(Board::new(1, 1).is_ok());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::with_seed(4, 3, 1).unwrap();
    assert_eq!(board.get(3, 2), Some(EMPTY));
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 3), None);
}

#[test]
fn test_compacted_unmergeable_board_never_changes() {
    let rows: &[&[Tile]] = &[&[2, 4, 2, 4], &[4, 2, 4, 2], &[2, 4, 2, 4], &[4, 2, 4, 2]];
    for dir in Direction::ALL {
        let mut board = board_from_rows(rows);
        let before = board.cells().to_vec();
        assert!(!board.slide(dir), "{:?} should not change the board", dir);
        assert_eq!(board.cells(), &before[..]);
    }

    // Compacted against one edge only: that slide is a no-op.
    let mut board = board_from_rows(&[&[2, 4, 8, 0], &[16, 2, 0, 0]]);
    let before = board.cells().to_vec();
    assert!(!board.slide_left());
    assert_eq!(board.cells(), &before[..]);
}

#[test]
fn test_second_slide_in_same_direction_is_a_no_op() {
    for board in sample_boards() {
        for dir in Direction::ALL {
            let mut b = board.clone();
            b.slide(dir);
            let after_first = b.cells().to_vec();
            assert!(!b.slide(dir));
            assert_eq!(b.cells(), &after_first[..]);
        }
    }
}

#[test]
fn test_slides_preserve_total_and_spawns_add_value() {
    let mut board =
        Board::with_initial_tiles(4, 4, &InitialTiles::Random(2), Some(2024)).unwrap();
    for i in 0..200 {
        let dir = Direction::ALL[i % 4];
        let before = sum(&board);
        if board.slide(dir) {
            assert_eq!(sum(&board), before);
            let before_spawn = sum(&board);
            let empty_before = board.empty_count();
            if board.spawn_tile(None, None) {
                let added = sum(&board) - before_spawn;
                assert!(added == 2 || added == 4);
                assert_eq!(board.empty_count(), empty_before - 1);
            }
        } else {
            assert_eq!(sum(&board), before);
        }
    }
}

#[test]
fn test_three_equal_tiles_merge_only_once() {
    let mut board = board_from_rows(&[&[2, 2, 2, 0]]);
    assert!(board.slide_right());
    assert_eq!(rows_of(&board), vec![vec![0, 0, 2, 4]]);
}

#[test]
fn test_two_pairs_merge_independently() {
    let mut board = board_from_rows(&[&[2, 2, 4, 4]]);
    assert!(board.slide_right());
    assert_eq!(rows_of(&board), vec![vec![0, 0, 4, 8]]);
}

#[test]
fn test_no_merge_through_a_different_tile() {
    let mut board = board_from_rows(&[&[2, 4, 2, 0]]);
    assert!(board.slide_right());
    assert_eq!(rows_of(&board), vec![vec![0, 2, 4, 2]]);
}

#[test]
fn test_merge_across_a_gap() {
    let mut board = board_from_rows(&[&[8, 0, 0, 8]]);
    assert!(board.slide_left());
    assert_eq!(rows_of(&board), vec![vec![16, 0, 0, 0]]);
}

#[test]
fn test_all_four_directions_on_one_board() {
    let rows: &[&[Tile]] = &[&[2, 0, 0, 2], &[0, 4, 0, 0], &[0, 4, 0, 0], &[2, 0, 0, 0]];

    let mut up = board_from_rows(rows);
    assert!(up.slide_up());
    assert_eq!(
        rows_of(&up),
        vec![vec![4, 8, 0, 2], vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]
    );

    let mut down = board_from_rows(rows);
    assert!(down.slide_down());
    assert_eq!(
        rows_of(&down),
        vec![vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![4, 8, 0, 2]]
    );

    let mut left = board_from_rows(rows);
    assert!(left.slide_left());
    assert_eq!(
        rows_of(&left),
        vec![vec![4, 0, 0, 0], vec![4, 0, 0, 0], vec![4, 0, 0, 0], vec![2, 0, 0, 0]]
    );

    let mut right = board_from_rows(rows);
    assert!(right.slide_right());
    assert_eq!(
        rows_of(&right),
        vec![vec![0, 0, 0, 4], vec![0, 0, 0, 4], vec![0, 0, 0, 4], vec![0, 0, 0, 2]]
    );
}

#[test]
fn test_non_square_board_slides() {
    // 3 wide, 2 tall
    let mut board = board_from_rows(&[&[2, 0, 4], &[2, 4, 4]]);
    assert!(board.slide_down());
    assert_eq!(rows_of(&board), vec![vec![0, 0, 0], vec![4, 4, 8]]);
    assert!(board.slide_left());
    assert_eq!(rows_of(&board), vec![vec![0, 0, 0], vec![8, 8, 0]]);
}

#[test]
fn test_win_takes_priority() {
    // Full and otherwise stuck, but holding the target.
    let board = board_from_rows(&[&[2048, 4], &[4, 2]]);
    assert_eq!(board.state(), BoardState::Win);

    // Full with merges available.
    let board = board_from_rows(&[&[2048, 2048], &[2, 2]]);
    assert_eq!(board.state(), BoardState::Win);
}

#[test]
fn test_checkerboard_is_lost() {
    for (w, h) in [(2, 2), (3, 3), (4, 4), (5, 3), (1, 2), (2, 1)] {
        let mut board = Board::with_seed(w, h, 1).unwrap();
        for (x, y) in board.positions().collect::<Vec<_>>() {
            let v = if (x + y) % 2 == 0 { 2 } else { 4 };
            board.spawn_tile(Some(v), Some((x, y)));
        }
        assert_eq!(board.state(), BoardState::Lost, "{}x{}", w, h);
    }
}

#[test]
fn test_explicit_spawn_always_overwrites() {
    let mut board = board_from_rows(&[&[2, 4], &[8, 16]]);
    assert!(board.spawn_tile(Some(4), Some((1, 1))));
    assert_eq!(board[(1, 1)], 4);
    assert!(board.spawn_tile(Some(2), Some((0, 0))));
    assert_eq!(board[(0, 0)], 2);
}

#[test]
fn test_random_spawn_on_full_board_fails() {
    let mut board = board_from_rows(&[&[2, 4], &[8, 16]]);
    let before = board.cells().to_vec();
    assert!(!board.spawn_tile(None, None));
    assert!(!board.spawn_tile(Some(2), None));
    assert_eq!(board.cells(), &before[..]);
}

#[test]
fn test_spawn_is_deterministic_for_a_seed() {
    let a = Board::with_initial_tiles(4, 4, &InitialTiles::Random(6), Some(77)).unwrap();
    let b = Board::with_initial_tiles(4, 4, &InitialTiles::Random(6), Some(77)).unwrap();
    assert_eq!(a.cells(), b.cells());
    assert_eq!(a.empty_count(), 10);
}

#[test]
fn test_state_is_a_pure_query() {
    let board = board_from_rows(&[&[2, 4], &[4, 2]]);
    let before = board.cells().to_vec();
    for _ in 0..3 {
        assert_eq!(board.state(), BoardState::Lost);
    }
    assert_eq!(board.cells(), &before[..]);
}

/// Interior cells against four neighbours plus the four corners against two,
/// the way the terminal check was first written.
fn cornerwise_has_pair(board: &Board) -> bool {
    let (w, h) = board.size();
    let at = |x: usize, y: usize| board[(x, y)];

    for x in 1..w - 1 {
        for y in 1..h - 1 {
            let v = at(x, y);
            if [at(x + 1, y), at(x, y + 1), at(x - 1, y), at(x, y - 1)].contains(&v) {
                return true;
            }
        }
    }

    at(0, 0) == at(0, 1)
        || at(0, 0) == at(1, 0)
        || at(w - 1, 0) == at(w - 2, 0)
        || at(w - 1, 0) == at(w - 1, 1)
        || at(w - 1, h - 1) == at(w - 1, h - 2)
        || at(w - 1, h - 1) == at(w - 2, h - 1)
        || at(0, h - 1) == at(1, h - 1)
        || at(0, h - 1) == at(0, h - 2)
}

#[test]
fn test_lost_exactly_when_no_slide_changes_full_boards() {
    for (w, h) in [(1, 3), (3, 1), (1, 4), (2, 2), (2, 3), (3, 2), (3, 3), (4, 4)] {
        let cells = w * h;
        for mask in 0u32..(1 << cells) {
            let mut board = Board::with_seed(w, h, 1).unwrap();
            for i in 0..cells {
                let v = if mask & (1 << i) != 0 { 4 } else { 2 };
                board.spawn_tile(Some(v), Some((i % w, i / w)));
            }

            let movable = Direction::ALL.iter().any(|&d| board.can_slide(d));
            let state = board.state();
            assert_eq!(
                state == BoardState::Lost,
                !movable,
                "{}x{} mask {:#b}: state {:?}",
                w,
                h,
                mask,
                state
            );

            if w >= 2 && h >= 2 && cornerwise_has_pair(&board) {
                assert_eq!(state, BoardState::Continue);
            }
        }
    }
}

#[test]
fn test_edge_pairs_missed_by_cornerwise_scan_still_continue() {
    // The only equal pair is on the bottom edge between two non-corner cells.
    let board = board_from_rows(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 8, 8, 2],
    ]);
    assert!(!cornerwise_has_pair(&board));
    assert_eq!(board.state(), BoardState::Continue);
    assert!(board.can_slide(Direction::Right));
}
