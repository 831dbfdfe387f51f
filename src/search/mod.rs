//! Search module for the Othello AI
//!
//! Contains a plain depth-limited minimax over cloned boards. No pruning:
//! every node inside the horizon is expanded.

pub mod minimax;

pub use minimax::{search, PassRule, SearchResult, Searcher};
