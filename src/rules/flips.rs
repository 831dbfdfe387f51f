//! Legality and disc flipping
//!
//! A move brackets opponent discs: scanning outward from the placed disc,
//! one or more consecutive opponent discs followed by a disc of the mover.
//! Every one of the 8 directions is scanned independently and a move may
//! capture along several of them at once.

use crate::board::{Board, Cell, Pos, Side};
use crate::error::{OthelloError, Result};

/// Direction vectors for capture checking (all 8 compass directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // ↖
    (-1, 0),  // ↑
    (-1, 1),  // ↗
    (0, -1),  // ←
    (0, 1),   // →
    (1, -1),  // ↙
    (1, 0),   // ↓
    (1, 1),   // ↘
];

/// Length of the opponent run bracketed in direction (dr, dc).
///
/// Returns 0 when the run is empty, ends on an empty cell, or runs off the board.
#[inline]
fn bracketed_run(board: &Board, pos: Pos, side: Side, dr: i32, dc: i32) -> u8 {
    let opponent = side.opponent().cell();
    let own = side.cell();

    let mut run = 0;
    let mut cursor = pos.step(dr, dc);
    while let Some(p) = cursor {
        match board.cell(p) {
            c if c == opponent => run += 1,
            c if c == own => return run,
            _ => return 0,
        }
        cursor = p.step(dr, dc);
    }

    // Ran off the board without reaching an own disc
    0
}

/// Check whether `side` may place a disc on `pos`.
///
/// True iff the cell is empty and at least one direction captures.
#[must_use]
pub fn is_legal_move(board: &Board, pos: Pos, side: Side) -> bool {
    if board.cell(pos) != Cell::Empty {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| bracketed_run(board, pos, side, dr, dc) > 0)
}

/// Check legality for raw coordinates. Fails with `OutOfBounds` outside the grid.
pub fn is_legal_at(board: &Board, row: usize, col: usize, side: Side) -> Result<bool> {
    Ok(is_legal_move(board, Pos::try_new(row, col)?, side))
}

/// Find the discs that would flip if `side` played `pos`.
///
/// Empty when the move is illegal.
#[must_use]
pub fn flipped_positions(board: &Board, pos: Pos, side: Side) -> Vec<Pos> {
    let mut flipped = Vec::new();
    if board.cell(pos) != Cell::Empty {
        return flipped;
    }

    for &(dr, dc) in &DIRECTIONS {
        let run = bracketed_run(board, pos, side, dr, dc);
        let mut p = pos;
        for _ in 0..run {
            // A bracketed run always stays on the board
            let Some(next) = p.step(dr, dc) else { break };
            p = next;
            flipped.push(p);
        }
    }

    flipped
}

/// Play `side` on `pos`, flipping every bracketed run.
///
/// Returns the flipped positions. Fails with `IllegalMove` and leaves the
/// board untouched when the move is not legal.
pub fn apply_move(board: &mut Board, pos: Pos, side: Side) -> Result<Vec<Pos>> {
    let flipped = flipped_positions(board, pos, side);
    if flipped.is_empty() {
        return Err(OthelloError::IllegalMove {
            row: pos.row(),
            col: pos.col(),
            side,
        });
    }

    board.place(pos, side);
    for &p in &flipped {
        board.place(p, side);
    }

    Ok(flipped)
}

/// `apply_move` for raw coordinates.
///
/// Fails with `OutOfBounds` outside the grid before looking at the board.
pub fn apply_at(board: &mut Board, row: usize, col: usize, side: Side) -> Result<Vec<Pos>> {
    apply_move(board, Pos::try_new(row, col)?, side)
}

/// Value-returning form of `apply_move`: the board after `side` plays `pos`.
pub fn play(board: &Board, pos: Pos, side: Side) -> Result<Board> {
    let mut next = board.clone();
    apply_move(&mut next, pos, side)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_opening_capture() {
        let mut board = Board::new();
        let pos = Pos::new(2, 3);
        assert!(is_legal_move(&board, pos, Side::Dark));

        let flipped = apply_move(&mut board, pos, Side::Dark).unwrap();
        assert_eq!(flipped, vec![Pos::new(3, 3)]);
        assert_eq!(board.cell(Pos::new(3, 3)), Cell::Dark);
        assert_eq!(board.count(Side::Dark), 4);
        assert_eq!(board.count(Side::Light), 1);
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board = Board::new();
        assert!(!is_legal_move(&board, Pos::new(3, 3), Side::Dark));
        assert!(!is_legal_move(&board, Pos::new(3, 4), Side::Light));
    }

    #[test]
    fn test_adjacent_own_disc_does_not_capture() {
        // X placed next to X with nothing between
        let board = board_from(
            "........
             .X......
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert!(!is_legal_move(&board, Pos::new(0, 0), Side::Dark));
    }

    #[test]
    fn test_run_off_board_does_not_capture() {
        // Light discs to the edge with no Dark anchor
        let board = board_from(
            "XOOOOOOO
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert!(!is_legal_move(&board, Pos::new(1, 0), Side::Dark));
        // The lone Dark disc sits in the corner and cannot be bracketed
        assert!(!is_legal_move(&board, Pos::new(1, 1), Side::Light));
    }

    #[test]
    fn test_empty_cell_breaks_run() {
        let board = board_from(
            "X.O.....
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert!(!is_legal_move(&board, Pos::new(0, 3), Side::Dark));
    }

    #[test]
    fn test_longest_run_flips_six() {
        let mut board = board_from(
            "XOOOOOO.
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        let flipped = apply_move(&mut board, Pos::new(0, 7), Side::Dark).unwrap();
        assert_eq!(flipped.len(), 6);
        assert_eq!(board.count(Side::Dark), 8);
        assert_eq!(board.count(Side::Light), 0);
    }

    #[test]
    fn test_multi_direction_capture() {
        // Dark at the centre captures along a row and a column, but the
        // diagonal run is not anchored and stays Light.
        let mut board = board_from(
            "...X....
             ...O....
             ...O....
             XOO.OX..
             ....O...
             .....O..
             ........
             ........",
        );
        let center = Pos::new(3, 3);
        let flipped = apply_move(&mut board, center, Side::Dark).unwrap();

        assert_eq!(flipped.len(), 5);
        assert_eq!(board.cell(Pos::new(1, 3)), Cell::Dark);
        assert_eq!(board.cell(Pos::new(2, 3)), Cell::Dark);
        assert_eq!(board.cell(Pos::new(3, 1)), Cell::Dark);
        assert_eq!(board.cell(Pos::new(3, 2)), Cell::Dark);
        assert_eq!(board.cell(Pos::new(3, 4)), Cell::Dark);
        // Unanchored diagonal keeps its colour
        assert_eq!(board.cell(Pos::new(4, 4)), Cell::Light);
        assert_eq!(board.cell(Pos::new(5, 5)), Cell::Light);
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();

        let err = apply_move(&mut board, Pos::new(0, 0), Side::Dark).unwrap_err();
        assert_eq!(
            err,
            OthelloError::IllegalMove {
                row: 0,
                col: 0,
                side: Side::Dark
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_returns_new_board() {
        let board = Board::new();
        let next = play(&board, Pos::new(2, 4), Side::Light).unwrap();

        assert_eq!(board, Board::new());
        assert_eq!(next.count(Side::Light), 4);
        assert_eq!(next.count(Side::Dark), 1);
    }

    #[test]
    fn test_is_legal_at_bounds() {
        let board = Board::new();
        assert_eq!(is_legal_at(&board, 2, 3, Side::Dark), Ok(true));
        assert_eq!(is_legal_at(&board, 0, 0, Side::Dark), Ok(false));
        assert_eq!(
            is_legal_at(&board, 8, 8, Side::Dark),
            Err(OthelloError::OutOfBounds { row: 8, col: 8 })
        );
    }

    #[test]
    fn test_apply_at_rejects_off_board() {
        // A move just below (7, 0) would bracket the Light disc if it existed
        let mut board = board_from(
            "........
             ........
             ........
             ........
             ........
             ........
             X.......
             O.......",
        );
        let before = board;

        assert_eq!(
            apply_at(&mut board, 8, 0, Side::Dark),
            Err(OthelloError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            apply_at(&mut board, 0, 8, Side::Dark),
            Err(OthelloError::OutOfBounds { row: 0, col: 8 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_at_plays_legal_move() {
        let mut board = Board::new();
        let flipped = apply_at(&mut board, 2, 3, Side::Dark).unwrap();
        assert_eq!(flipped, vec![Pos::new(3, 3)]);
        assert_eq!(board.get(2, 3), Ok(Cell::Dark));
        assert!(apply_at(&mut board, 2, 3, Side::Light).is_err());
    }
}
