//! Hunt/target opponent.
//!
//! In hunt mode the opponent fires at a uniformly random cell it has not
//! tried yet. Once a shot hits, it switches to target mode and works
//! through the orthogonal neighbors of the most recent hit until they run
//! out, then goes back to hunting. It never fires at the same cell twice.

use log::debug;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{AiError, Coord, ShotOutcome};
use crate::config::{TargetPersistence, GRID_SIZE};
use crate::grid::Grid;

/// Set of cells the opponent has fired upon.
pub type FiredCells = BitBoard<u64, GRID_SIZE>;

/// Which search the opponent is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Mode {
    Hunt,
    Target,
}

#[derive(Debug, Clone, Default)]
pub struct TargetingAi {
    last_hit: Option<Coord>,
    pending: Vec<Coord>,
    fired: FiredCells,
    persistence: TargetPersistence,
}

impl TargetingAi {
    pub fn new(persistence: TargetPersistence) -> Self {
        Self {
            persistence,
            ..Self::default()
        }
    }

    pub fn persistence(&self) -> TargetPersistence {
        self.persistence
    }

    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    /// Neighbors queued for target mode; the last entry is fired next.
    pub fn pending(&self) -> &[Coord] {
        &self.pending
    }

    pub fn fired(&self) -> &FiredCells {
        &self.fired
    }

    pub fn mode(&self) -> Mode {
        if self.last_hit.is_some() {
            Mode::Target
        } else {
            Mode::Hunt
        }
    }

    /// Forget all history, as for a fresh game.
    pub fn reset(&mut self) {
        self.last_hit = None;
        self.pending.clear();
        self.fired.clear_all();
    }

    /// Pick the next cell to fire at and mark it as fired.
    pub fn next_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, AiError> {
        if let Some(cell) = self.next_target() {
            return Ok(cell);
        }
        self.hunt(rng)
    }

    fn next_target(&mut self) -> Option<Coord> {
        let (row, col) = self.last_hit?;
        if self.pending.is_empty() {
            let fired = &self.fired;
            self.pending
                .extend(Grid::neighbors(row, col).filter(|&c| !fired.contains(c)));
        }
        while let Some(cell) = self.pending.pop() {
            if self.mark_fired(cell) {
                return Some(cell);
            }
        }
        debug!("neighbors of ({}, {}) exhausted, back to hunting", row, col);
        self.last_hit = None;
        None
    }

    fn hunt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, AiError> {
        let free = self.fired.count_zeros();
        if free == 0 {
            return Err(AiError::BoardExhausted);
        }
        let cell = self
            .fired
            .nth_clear(rng.random_range(0..free))
            .ok_or(AiError::BoardExhausted)?;
        self.mark_fired(cell);
        Ok(cell)
    }

    /// Returns `false` if the cell was already fired upon.
    fn mark_fired(&mut self, (row, col): Coord) -> bool {
        self.fired.set(row, col).unwrap_or(false)
    }

    /// Feed back whether the shot at `cell` hit. A hit makes `cell` the new
    /// focus and discards any neighbors queued around the previous one.
    pub fn record_result(&mut self, cell: Coord, was_hit: bool) {
        if was_hit {
            debug!("hit at {:?}, targeting its neighbors", cell);
            self.last_hit = Some(cell);
            self.pending.clear();
        }
    }

    /// Like [`TargetingAi::record_result`], but a sink is handled according
    /// to the configured [`TargetPersistence`].
    pub fn record_outcome(&mut self, cell: Coord, outcome: ShotOutcome) {
        match (outcome, self.persistence) {
            (ShotOutcome::Miss, _) => {}
            (ShotOutcome::Hit, _) | (ShotOutcome::Sunk(_), TargetPersistence::UntilExhausted) => {
                self.record_result(cell, true)
            }
            (ShotOutcome::Sunk(name), TargetPersistence::ClearOnSink) => {
                debug!("sank {} at {:?}, back to hunting", name, cell);
                self.last_hit = None;
                self.pending.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn corner_hit_queues_two_neighbors() {
        let mut ai = TargetingAi::default();
        let mut rng = SmallRng::seed_from_u64(1);
        ai.record_result((0, 0), true);
        let a = ai.next_move(&mut rng).unwrap();
        assert_eq!(ai.pending().len(), 1);
        let b = ai.next_move(&mut rng).unwrap();
        let mut got = [a, b];
        got.sort();
        assert_eq!(got, [(0, 1), (1, 0)]);
    }

    #[test]
    fn pending_pops_last_neighbor_first() {
        let mut ai = TargetingAi::default();
        let mut rng = SmallRng::seed_from_u64(2);
        ai.record_result((4, 4), true);
        // Seeded up, down, left, right; popped from the back.
        assert_eq!(ai.next_move(&mut rng).unwrap(), (4, 5));
        assert_eq!(ai.pending(), &[(3, 4), (5, 4), (4, 3)]);
    }
}
