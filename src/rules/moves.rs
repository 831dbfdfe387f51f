//! Legal move enumeration

use crate::board::{Board, Pos, Side};

use super::flips::is_legal_move;

/// All legal moves for `side`, in row-major order.
///
/// The order is part of the contract: search breaks ties in favour of the
/// earliest move returned here.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| is_legal_move(board, pos, side))
        .collect()
}

/// Check whether `side` has at least one legal move
#[must_use]
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .empty_cells()
        .any(|pos| is_legal_move(board, pos, side))
}
