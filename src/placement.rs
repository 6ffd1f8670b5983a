//! Ship placement: validity checks, marking, and random auto-placement.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{BoardError, Coord};
use crate::config::GRID_SIZE;
use crate::grid::{Cell, Grid};
use crate::ship::{Orientation, Placement};

/// Cells of the run of `length` starting at `(row, col)`, or `None` if any
/// of them falls off the grid.
fn run(row: usize, col: usize, length: usize, orientation: Orientation) -> Option<Vec<Coord>> {
    (0..length)
        .map(|i| {
            orientation
                .step((row, col), i)
                .filter(|&(r, c)| Grid::in_bounds(r, c))
        })
        .collect()
}

/// `true` iff the whole run lies on the grid and every cell is `Empty`.
pub fn is_valid_placement(
    grid: &Grid,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> bool {
    check_placement(grid, row, col, length, orientation).is_ok()
}

fn check_placement(
    grid: &Grid,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> Result<Vec<Coord>, BoardError> {
    if length == 0 {
        return Err(BoardError::ZeroLength);
    }
    let cells = run(row, col, length, orientation).ok_or(BoardError::ShipOutOfBounds)?;
    for &(r, c) in &cells {
        if grid.get(r, c)? != Cell::Empty {
            return Err(BoardError::ShipOverlaps);
        }
    }
    Ok(cells)
}

/// Mark the run as `Ship`. The placement is re-validated and the grid is
/// left untouched if it does not fit.
pub fn place_ship(
    grid: &mut Grid,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> Result<(), BoardError> {
    let cells = check_placement(grid, row, col, length, orientation)?;
    for (r, c) in cells {
        grid.set(r, c, Cell::Ship)?;
    }
    Ok(())
}

/// Every position where a ship of `length` currently fits.
pub fn valid_placements(grid: &Grid, length: usize) -> Vec<Placement> {
    let mut out = Vec::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if is_valid_placement(grid, row, col, length, orientation) {
                    out.push(Placement {
                        row,
                        col,
                        orientation,
                    });
                }
            }
        }
    }
    out
}

/// Pick a random position for a ship of `length`.
///
/// Samples a start cell and orientation up to `max_attempts` times; if none
/// fits, chooses uniformly among all valid positions instead.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    length: usize,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Placement, BoardError> {
    if length == 0 {
        return Err(BoardError::ZeroLength);
    }
    for _ in 0..max_attempts {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        if is_valid_placement(grid, row, col, length, orientation) {
            return Ok(Placement {
                row,
                col,
                orientation,
            });
        }
    }
    debug!(
        "no fit for length {} after {} attempts, scanning all positions",
        length, max_attempts
    );
    valid_placements(grid, length)
        .choose(rng)
        .copied()
        .ok_or(BoardError::UnableToPlaceShip { length })
}

/// Place ships of the given lengths in order at random positions.
/// Returns the chosen placements.
pub fn auto_place<R: Rng + ?Sized>(
    grid: &mut Grid,
    lengths: &[usize],
    rng: &mut R,
    max_attempts: usize,
) -> Result<Vec<Placement>, BoardError> {
    let mut placed = Vec::with_capacity(lengths.len());
    for &length in lengths {
        let p = random_placement(grid, length, rng, max_attempts)?;
        place_ship(grid, p.row, p.col, length, p.orientation)?;
        placed.push(p);
    }
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_rejects_overflow_without_panicking() {
        assert!(run(0, usize::MAX, 2, Orientation::Horizontal).is_none());
    }

    #[test]
    fn zero_length_is_never_valid() {
        let grid = Grid::new();
        assert!(!is_valid_placement(&grid, 0, 0, 0, Orientation::Vertical));
    }
}
