//! Othello (Reversi) rule engine and minimax AI
//!
//! Plays the standard 8x8 game between a human (Dark) and the AI (Light).
//!
//! # Architecture
//!
//! - [`board`]: Board representation with one bitboard per side
//! - [`rules`]: Move legality, disc flipping, legal move lists, game over
//! - [`eval`]: Static evaluation (disc differential)
//! - [`search`]: Depth-limited minimax
//! - [`engine`]: AI engine choosing Light's move
//! - [`config`]: Search depth, pass rule and AI pacing
//! - [`ui`]: egui desktop driver
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Board, Pos, Side};
//! use othello::rules::{apply_move, is_legal_move};
//!
//! let mut board = Board::new();
//!
//! // Human plays Dark
//! let pos = Pos::new(2, 3);
//! assert!(is_legal_move(&board, pos, Side::Dark));
//! apply_move(&mut board, pos, Side::Dark).unwrap();
//!
//! // AI responds as Light
//! let mut engine = AIEngine::new();
//! if let Some(reply) = engine.get_move(&board) {
//!     apply_move(&mut board, reply, Side::Light).unwrap();
//! }
//! assert_eq!(board.disc_count(), 6);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Side, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult, AI_SIDE};
pub use error::{OthelloError, Result};
