//! Ship classes, orientations and per-ship hit tracking.

use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cell `offset` steps along a run starting at `(row, col)`, or `None`
    /// on overflow.
    #[inline]
    pub fn step(self, (row, col): Coord, offset: usize) -> Option<Coord> {
        match self {
            Orientation::Horizontal => col.checked_add(offset).map(|c| (row, c)),
            Orientation::Vertical => row.checked_add(offset).map(|r| (r, col)),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Where a ship sits: its first cell and the direction it extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// A fleet member: its class, where it was placed and how often it was hit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    placement: Option<Placement>,
    hits: usize,
}

impl Ship {
    pub fn new(class: ShipClass) -> Self {
        Self {
            class,
            placement: None,
            hits: 0,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    pub fn is_sunk(&self) -> bool {
        self.hits >= self.class.length()
    }

    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Count one more hit, saturating at the ship's length.
    /// Returns `true` if this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hits += 1;
        self.is_sunk()
    }

    /// Cells the ship occupies; empty until placed.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let len = if self.placement.is_some() {
            self.class.length()
        } else {
            0
        };
        (0..len).filter_map(move |i| {
            self.placement
                .and_then(|p| p.orientation.step((p.row, p.col), i))
        })
    }

    pub fn covers(&self, cell: Coord) -> bool {
        self.cells().any(|c| c == cell)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.placement {
            Some(p) => write!(
                f,
                "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
                self.class.name(),
                p.row,
                p.col,
                p.orientation,
                self.hits,
                self.class.length(),
            ),
            None => write!(
                f,
                "Ship {{ name: \"{}\", unplaced, hits: {}/{} }}",
                self.class.name(),
                self.hits,
                self.class.length(),
            ),
        }
    }
}
