//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Move legality and disc flipping
//! - Legal move enumeration
//! - End of game and winner

pub mod flips;
pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use flips::{apply_at, apply_move, flipped_positions, is_legal_at, is_legal_move, play, DIRECTIONS};
pub use moves::{has_legal_move, legal_moves};
pub use outcome::{is_game_over, leader, outcome, Outcome, Score};
