//! Common types for the game core: coordinates, shot outcomes and errors.

use thiserror::Error;

/// A `(row, col)` position on the grid.
pub type Coord = (usize, usize);

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Shot landed on a ship that is still afloat.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Shot landed on the last intact segment of a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// `true` for both plain hits and sinking hits.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by grid, placement and fleet operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    /// Ship run leaves the grid.
    #[error("ship placement is out of bounds")]
    ShipOutOfBounds,
    /// Ship run crosses a cell that is not empty.
    #[error("ship placement overlaps with another ship")]
    ShipOverlaps,
    /// Ships need at least one cell.
    #[error("ship length must be at least one")]
    ZeroLength,
    /// Cell was already fired upon.
    #[error("cell ({row}, {col}) was already fired upon")]
    AlreadyFired { row: usize, col: usize },
    /// Ship index is out of range for the fleet.
    #[error("ship index is out of range")]
    InvalidIndex,
    /// Ship at this index has already been placed.
    #[error("ship is already placed on the grid")]
    ShipAlreadyPlaced,
    /// No valid position remains for a ship of this length.
    #[error("unable to place ship of length {length}")]
    UnableToPlaceShip { length: usize },
    /// A `Ship` cell was hit but no fleet ship covers it.
    #[error("hit at ({row}, {col}) does not belong to any ship")]
    UnknownShipHit { row: usize, col: usize },
}

/// Errors returned by the targeting heuristic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AiError {
    /// Every cell of the grid has already been fired upon.
    #[error("every cell has already been fired upon")]
    BoardExhausted,
}
