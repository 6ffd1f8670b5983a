//! The square battle grid and its cell states.

use core::fmt;

use crate::common::{BoardError, Coord};
use crate::config::GRID_SIZE;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    /// A shot landed on a ship cell.
    Hit,
    /// A shot landed on an empty cell.
    Miss,
}

impl Cell {
    /// Whether a shot has already landed here.
    pub fn is_fired(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Fixed `GRID_SIZE`×`GRID_SIZE` matrix of cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-`Empty` grid.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub const fn size(&self) -> usize {
        GRID_SIZE
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })?;
        *slot = cell;
        Ok(())
    }

    /// Apply a shot: `Ship` becomes `Hit`, `Empty` becomes `Miss`.
    /// Returns `true` on a hit. Cells already fired upon are rejected and
    /// left untouched.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        match self.get(row, col)? {
            Cell::Ship => {
                self.cells[row][col] = Cell::Hit;
                Ok(true)
            }
            Cell::Empty => {
                self.cells[row][col] = Cell::Miss;
                Ok(false)
            }
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyFired { row, col }),
        }
    }

    /// Every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &cell)| ((r, c), cell))
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|&(_, c)| c == cell).count()
    }

    /// Orthogonal neighbors of `(row, col)` that lie on the grid, in the
    /// order up, down, left, right.
    pub fn neighbors(row: usize, col: usize) -> impl Iterator<Item = Coord> {
        let candidates = [
            row.checked_sub(1).map(|r| (r, col)),
            row.checked_add(1).map(|r| (r, col)),
            col.checked_sub(1).map(|c| (row, c)),
            col.checked_add(1).map(|c| (row, c)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&(r, c)| Grid::in_bounds(r, c))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
