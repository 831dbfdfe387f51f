//! Bitboard implementation for one side's discs

use super::{Pos, TOTAL_CELLS};

/// One bit per cell, bit index = row * 8 + col
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }
}
