//! Error types for the Othello engine
//!
//! Every error here is a contract violation by the caller (bad coordinates,
//! a move that is not legal, malformed input). None of them are transient.

use thiserror::Error;

use crate::board::Side;

/// Errors that can occur in the Othello engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// Coordinate outside the 8x8 grid
    #[error("Coordinate ({row}, {col}) is out of bounds (must be 0-7)")]
    OutOfBounds { row: usize, col: usize },

    /// Move does not capture anything or targets an occupied cell
    #[error("Illegal move for {side}: ({row}, {col})")]
    IllegalMove { row: u8, col: u8, side: Side },

    /// Text board could not be parsed
    #[error("Invalid board: {reason}")]
    InvalidBoard { reason: String },

    /// Configuration value could not be parsed
    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },
}

/// Result type alias for Othello engine operations
pub type Result<T> = std::result::Result<T, OthelloError>;
