//! AI engine: picks Light's move with a fixed-depth minimax search
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Side};
//! use othello::rules::apply_move;
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//!
//! if let Some(pos) = engine.get_move(&board) {
//!     apply_move(&mut board, pos, Side::Light).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Pos, Side};
use crate::config::{EngineConfig, DEFAULT_DEPTH};
use crate::search::{PassRule, SearchResult, Searcher};

/// The side the AI plays. Light is the maximizer in every search.
pub const AI_SIDE: Side = Side::Light;

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the AI has to pass
    pub best_move: Option<Pos>,
    /// Minimax value of the position (Light discs minus Dark discs at the horizon)
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, depth: u8, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI engine for Othello.
pub struct AIEngine {
    searcher: Searcher,
    depth: u8,
}

impl AIEngine {
    /// Engine with the reference settings: depth 3, passing turns inside the search.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, PassRule::default())
    }

    /// Engine with custom depth and pass rule.
    ///
    /// ```
    /// use othello::AIEngine;
    /// use othello::search::PassRule;
    ///
    /// // Reproduce the reference AI exactly
    /// let engine = AIEngine::with_config(3, PassRule::Terminal);
    /// assert_eq!(engine.depth(), 3);
    /// ```
    #[must_use]
    pub fn with_config(depth: u8, pass_rule: PassRule) -> Self {
        Self {
            searcher: Searcher::with_pass_rule(pass_rule),
            depth,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_config(config.depth, config.pass_rule)
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn pass_rule(&self) -> PassRule {
        self.searcher.pass_rule()
    }

    /// Best move for Light, or `None` if Light has no legal move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Best move for Light with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        debug!(depth = self.depth, pass_rule = %self.pass_rule(), "searching\n{board}");

        let result = self.searcher.search(board, self.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(pos) => info!(
                side = %AI_SIDE,
                %pos,
                score = result.score,
                nodes = result.nodes,
                time_ms,
                "AI move selected"
            ),
            None => info!(side = %AI_SIDE, score = result.score, "AI has no valid moves"),
        }

        MoveResult::from_search(result, self.depth, time_ms)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
