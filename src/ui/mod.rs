//! GUI module for the Othello game
//!
//! A native desktop driver using egui/eframe. It owns the real board and the
//! turn order and calls into the engine for legality, moves and AI replies.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::OthelloApp;
pub use game_state::{outcome_banner, side_label, AiState, GameState, HUMAN_SIDE};
