use crate::ship::ShipClass;

pub const GRID_SIZE: usize = 8;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Frigate", 3),
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Corvette", 2),
    ShipClass::new("Patrol Boat", 1),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 3 + 2 + 2 + 1;

/// Random placement tries per ship before falling back to enumerating every
/// valid position.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

/// Pause between consecutive opponent shots in the terminal game.
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 1000;

/// What the opponent does with its target list once the ship it was
/// chasing sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TargetPersistence {
    /// Keep probing around the last hit until its neighbors run out, even if
    /// the ship already sank.
    #[default]
    UntilExhausted,
    /// Forget the last hit as soon as a sink is reported.
    ClearOnSink,
}

/// Runtime knobs for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameConfig {
    pub fleet: Vec<ShipClass>,
    pub placement_attempts: usize,
    pub persistence: TargetPersistence,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fleet: FLEET.to_vec(),
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            persistence: TargetPersistence::default(),
        }
    }
}

impl GameConfig {
    /// Ship lengths in placement order.
    pub fn lengths(&self) -> Vec<usize> {
        self.fleet.iter().map(|c| c.length()).collect()
    }

    /// Number of grid cells the fleet occupies.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(|c| c.length()).sum()
    }
}
