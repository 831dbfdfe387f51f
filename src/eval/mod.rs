//! Evaluation module for Othello positions
//!
//! Positions are scored from Light's point of view: positive favours Light
//! (the maximizer), negative favours Dark.

pub mod heuristic;

pub use heuristic::evaluate;
