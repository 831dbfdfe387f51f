//! Board structure: two bitboards, one per side

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Pos, Side, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{OthelloError, Result};

/// Game board.
///
/// Holds nothing but the contents of the 64 cells. A cell is never set in
/// both bitboards at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Dark discs bitboard
    dark: Bitboard,
    /// Light discs bitboard
    light: Bitboard,
}

impl Board {
    /// Standard starting position: Light on (3,3) and (4,4), Dark on (3,4) and (4,3)
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(Pos::new(3, 3), Side::Light);
        board.place(Pos::new(3, 4), Side::Dark);
        board.place(Pos::new(4, 3), Side::Dark);
        board.place(Pos::new(4, 4), Side::Light);
        board
    }

    /// Board with no discs, for building positions by hand
    pub const fn empty() -> Self {
        Self {
            dark: Bitboard::new(),
            light: Bitboard::new(),
        }
    }

    /// Cell at (row, col). Fails with `OutOfBounds` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cell(Pos::try_new(row, col)?))
    }

    /// Write a disc at (row, col) with no legality check.
    /// Fails with `OutOfBounds` outside the grid.
    pub fn set(&mut self, row: usize, col: usize, side: Side) -> Result<()> {
        self.place(Pos::try_new(row, col)?, side);
        Ok(())
    }

    /// Get cell at position
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        if self.dark.get(pos) {
            Cell::Dark
        } else if self.light.get(pos) {
            Cell::Light
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.dark.get(pos) && !self.light.get(pos)
    }

    /// Put a disc of `side` on `pos`, replacing whatever was there.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, side: Side) {
        match side {
            Side::Dark => {
                self.light.clear(pos);
                self.dark.set(pos);
            }
            Side::Light => {
                self.dark.clear(pos);
                self.light.set(pos);
            }
        }
    }

    /// Get bitboard for a side
    #[inline]
    pub fn discs(&self, side: Side) -> &Bitboard {
        match side {
            Side::Dark => &self.dark,
            Side::Light => &self.light,
        }
    }

    /// Number of discs belonging to `side`
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.discs(side).count()
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.dark.count() + self.light.count()
    }

    /// Iterate over empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Check if every cell holds a disc
    #[inline]
    pub fn is_full(&self) -> bool {
        self.disc_count() as usize == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Eight lines of eight characters: `.` empty, `X` Dark, `O` Light
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match self.cell(Pos::new(row as u8, col as u8)) {
                    Cell::Empty => '.',
                    Cell::Dark => 'X',
                    Cell::Light => 'O',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = OthelloError;

    /// Parse the `Display` format. Whitespace between cells and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(OthelloError::InvalidBoard {
                reason: format!("expected {} rows, found {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(OthelloError::InvalidBoard {
                    reason: format!("row {} has {} cells", row, cells.len()),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                match ch {
                    '.' | '-' => {}
                    'X' | 'x' | 'D' => board.set(row, col, Side::Dark)?,
                    'O' | 'o' | 'L' => board.set(row, col, Side::Light)?,
                    other => {
                        return Err(OthelloError::InvalidBoard {
                            reason: format!("unexpected {:?} at ({}, {})", other, row, col),
                        })
                    }
                }
            }
        }

        Ok(board)
    }
}
