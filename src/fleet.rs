//! A side's ships, with hits attributed to the exact ship that covers the
//! struck cell.

use log::debug;
use rand::Rng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::grid::{Cell, Grid};
use crate::placement::{self, random_placement};
use crate::ship::{Orientation, Placement, Ship, ShipClass};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Unplaced, unhit ships in the given order.
    pub fn new(classes: &[ShipClass]) -> Self {
        Self {
            ships: classes.iter().copied().map(Ship::new).collect(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Index of the first ship still waiting for a position.
    pub fn next_unplaced(&self) -> Option<usize> {
        self.ships.iter().position(|s| !s.is_placed())
    }

    pub fn all_placed(&self) -> bool {
        self.next_unplaced().is_none()
    }

    /// `true` once every ship is sunk. An empty fleet is never sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// Place ship `index` on `grid` and remember where it went.
    pub fn place(
        &mut self,
        grid: &mut Grid,
        index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.ships.get_mut(index).ok_or(BoardError::InvalidIndex)?;
        if ship.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        placement::place_ship(grid, row, col, ship.length(), orientation)?;
        ship.set_placement(Placement {
            row,
            col,
            orientation,
        });
        debug!(
            "placed {} at ({}, {}) {:?}",
            ship.class().name(),
            row,
            col,
            orientation
        );
        Ok(())
    }

    /// Randomly place every ship not yet on the grid.
    pub fn auto_place<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<(), BoardError> {
        while let Some(index) = self.next_unplaced() {
            let length = self.ships[index].length();
            let p = random_placement(grid, length, rng, max_attempts)?;
            self.place(grid, index, p.row, p.col, p.orientation)?;
        }
        Ok(())
    }

    /// Credit a hit at `cell` to the ship occupying it.
    pub fn register_hit(&mut self, (row, col): Coord) -> Result<ShotOutcome, BoardError> {
        let ship = self
            .ships
            .iter_mut()
            .find(|s| s.covers((row, col)))
            .ok_or(BoardError::UnknownShipHit { row, col })?;
        if ship.register_hit() {
            Ok(ShotOutcome::Sunk(ship.class().name()))
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// Fire at `cell` on `grid`, which must be the grid this fleet was
    /// placed on, updating both. On error neither the grid nor the fleet
    /// changes.
    pub fn receive_shot(
        &mut self,
        grid: &mut Grid,
        (row, col): Coord,
    ) -> Result<ShotOutcome, BoardError> {
        if grid.get(row, col)? != Cell::Ship {
            grid.fire(row, col)?;
            return Ok(ShotOutcome::Miss);
        }
        if !self.ships.iter().any(|s| s.covers((row, col))) {
            return Err(BoardError::UnknownShipHit { row, col });
        }
        grid.fire(row, col)?;
        self.register_hit((row, col))
    }
}
