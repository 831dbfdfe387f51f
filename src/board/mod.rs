//! Board representation for Othello

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::{OthelloError, Result};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

/// One of the two players. Dark is the human, Light is the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// Cell occupied by a disc of this side
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => f.write_str("Dark"),
            Side::Light => f.write_str("Light"),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        side.cell()
    }
}

impl Cell {
    /// Side owning this cell, `None` when empty
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Side::Dark),
            Cell::Light => Some(Side::Light),
        }
    }
}

/// Position on the board. A move is the position a disc is placed on.
///
/// Every `Pos` lies on the grid: the fields are private and both
/// constructors reject coordinates outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Position from known-good coordinates.
    ///
    /// # Panics
    /// When `row` or `col` is not below `BOARD_SIZE`. Use `try_new` for
    /// coordinates coming from outside the engine.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "position ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the engine
    pub fn try_new(row: usize, col: usize) -> Result<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(OthelloError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < TOTAL_CELLS, "cell index {idx} is off the board");
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbour one step away in direction (dr, dc), `None` past the edge
    #[inline]
    pub fn step(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row-major ordering: row first, then column
impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
