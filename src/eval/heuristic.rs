//! Static evaluation by disc differential

use crate::board::{Board, Side};

/// Evaluate the board as Light discs minus Dark discs.
///
/// Used at the search horizon and at game over. No positional, mobility or
/// corner terms.
#[must_use]
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    board.count(Side::Light) as i32 - board.count(Side::Dark) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::apply_move;

    #[test]
    fn test_opening_is_balanced() {
        assert_eq!(evaluate(&Board::new()), 0);
        assert_eq!(evaluate(&Board::empty()), 0);
    }

    #[test]
    fn test_sign_follows_leader() {
        let mut board = Board::new();
        apply_move(&mut board, Pos::new(2, 3), Side::Dark).unwrap();
        assert_eq!(evaluate(&board), -3);

        apply_move(&mut board, Pos::new(2, 2), Side::Light).unwrap();
        assert_eq!(evaluate(&board), 0);
    }
}
