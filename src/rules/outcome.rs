//! End of game detection and scoring

use crate::board::{Board, Side};

use super::moves::has_legal_move;

/// Disc counts for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub dark: u32,
    pub light: u32,
}

impl Score {
    pub fn of(board: &Board) -> Self {
        Self {
            dark: board.count(Side::Dark),
            light: board.count(Side::Light),
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// The game is over when neither side can move
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Side::Dark) && !has_legal_move(board, Side::Light)
}

/// Decide the game by disc count, `None` while either side can still move
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if !is_game_over(board) {
        return None;
    }
    Some(leader(Score::of(board)))
}

/// Side ahead on discs, regardless of whether the game has finished
#[must_use]
pub fn leader(score: Score) -> Outcome {
    match score.dark.cmp(&score.light) {
        std::cmp::Ordering::Greater => Outcome::Winner(Side::Dark),
        std::cmp::Ordering::Less => Outcome::Winner(Side::Light),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
