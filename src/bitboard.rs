//! Fixed-size set of grid cells packed into an unsigned integer.
//!
//! The opponent uses it to remember every cell it has fired upon. An `N×N`
//! board is stored row-major in `T`, so an 8×8 grid fits a `u64`.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

use crate::common::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitBoardError {
    /// Row or column is outside `0..N`.
    #[error("index out of bounds: row={row}, col={col}")]
    IndexOutOfBounds { row: usize, col: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    const CELLS: usize = N * N;
    const FITS: () = assert!(
        N * N <= mem::size_of::<T>() * 8,
        "board does not fit in the backing integer"
    );

    /// Empty board. Fails to compile when `N*N` exceeds the bit width of `T`.
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        (self.bits >> idx) & T::one() != T::zero()
    }

    /// Whether `(row, col)` is in the set.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Ok(self.bit(Self::index(row, col)?))
    }

    /// Like [`BitBoard::get`], but out-of-bounds cells are simply absent.
    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Adds `(row, col)`; returns `true` if it was not already present.
    pub fn set(&mut self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(row, col)?;
        let fresh = !self.bit(idx);
        self.bits = self.bits | (T::one() << idx);
        Ok(fresh)
    }

    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Number of cells not in the set.
    pub fn count_zeros(&self) -> usize {
        Self::CELLS - self.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` once every cell of the board is in the set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == Self::CELLS
    }

    /// The `n`th cell (row-major) not in the set.
    pub fn nth_clear(&self, n: usize) -> Option<Coord> {
        self.iter_clear().nth(n)
    }

    /// Cells not in the set, row-major.
    pub fn iter_clear(&self) -> ClearCells<'_, T, N> {
        ClearCells {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", N, N)?;
        for r in 0..N {
            for c in 0..N {
                let ch = if self.bit(r * N + c) { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells missing from a bitboard.
#[derive(Clone, Copy)]
pub struct ClearCells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for ClearCells<'_, T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !self.board.bit(idx) {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}
