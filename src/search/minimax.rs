//! Depth-limited minimax search
//!
//! Light is always the maximizer and Dark the minimizer, whichever side
//! asked for the search. Every node works on its own copy of the board, so
//! the caller's board is never touched.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Pos};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&Board::new(), 3);
//! assert_eq!(result.best_move, Some(Pos::new(2, 4)));
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::{error, trace};

use crate::board::{Board, Pos, Side};
use crate::error::OthelloError;
use crate::eval::evaluate;
use crate::rules::{apply_move, is_game_over, legal_moves};

/// What the search does when the side to move has no legal move but the
/// opponent still has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassRule {
    /// Score the node statically, as if the game had ended
    Terminal,
    /// Hand the move to the opponent one ply deeper
    #[default]
    PassTurn,
}

impl FromStr for PassRule {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "stop" => Ok(PassRule::Terminal),
            "pass" | "pass-turn" | "pass_turn" => Ok(PassRule::PassTurn),
            _ => Err(OthelloError::InvalidConfig {
                key: "pass rule".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PassRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassRule::Terminal => f.write_str("terminal"),
            PassRule::PassTurn => f.write_str("pass"),
        }
    }
}

/// Search result: score of the node and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value of the position, from Light's point of view
    pub score: i32,
    /// Best move for the side to move, `None` when it has no legal move
    /// or the node was not expanded
    pub best_move: Option<Pos>,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Minimax searcher.
///
/// Holds only the pass rule and a node counter, so independent searchers
/// can run on separate threads.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    pass_rule: PassRule,
    nodes: u64,
}

impl Searcher {
    /// Searcher using the default pass rule (`PassTurn`)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pass_rule(pass_rule: PassRule) -> Self {
        Self {
            pass_rule,
            nodes: 0,
        }
    }

    #[inline]
    pub fn pass_rule(&self) -> PassRule {
        self.pass_rule
    }

    /// Search with Light (the AI) to move.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.search_node(board, depth, true)
    }

    /// Search a node with either side to move: Light when `maximizing`, Dark otherwise.
    pub fn search_node(&mut self, board: &Board, depth: u8, maximizing: bool) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.minimax(board, depth, maximizing);
        SearchResult {
            score,
            best_move,
            nodes: self.nodes,
        }
    }

    fn minimax(&mut self, board: &Board, depth: u8, maximizing: bool) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if depth == 0 || is_game_over(board) {
            return (evaluate(board), None);
        }

        let side = if maximizing { Side::Light } else { Side::Dark };
        let moves = legal_moves(board, side);

        if moves.is_empty() {
            return match self.pass_rule {
                PassRule::Terminal => (evaluate(board), None),
                PassRule::PassTurn => {
                    trace!(%side, depth, "no legal move, passing");
                    let (score, _) = self.minimax(board, depth - 1, !maximizing);
                    (score, None)
                }
            };
        }

        let mut best: Option<(i32, Pos)> = None;
        for mv in moves {
            let mut child = *board;
            if let Err(err) = apply_move(&mut child, mv, side) {
                error!(%err, "enumerated move rejected");
                debug_assert!(false, "enumerated move rejected: {err}");
            }
            let (score, _) = self.minimax(&child, depth - 1, !maximizing);

            // Strict comparison keeps the earliest move on ties
            let improves = match best {
                None => true,
                Some((best_score, _)) if maximizing => score > best_score,
                Some((best_score, _)) => score < best_score,
            };
            if improves {
                best = Some((score, mv));
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            None => (evaluate(board), None),
        }
    }
}

/// Search with Light to move using the default pass rule.
#[must_use]
pub fn search(board: &Board, depth: u8) -> SearchResult {
    Searcher::new().search(board, depth)
}
