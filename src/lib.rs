//! Single-player Battleship against a hunt/target opponent.
//!
//! The core is the placement validator ([`is_valid_placement`],
//! [`place_ship`], [`auto_place`]) and the opponent's targeting heuristic
//! ([`TargetingAi`]). [`GameSession`] drives a full game on top of them.

mod ai;
mod bitboard;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod logging;
mod placement;
mod ship;
mod sim;
pub mod ui;

pub use ai::{FiredCells, Mode, TargetingAi};
pub use bitboard::{BitBoard, BitBoardError, ClearCells};
pub use common::*;
pub use config::*;
pub use fleet::Fleet;
pub use game::{GameError, GameSession, GameStatus, Phase, Turn};
pub use grid::{Cell, Grid};
pub use logging::init_logging;
pub use placement::{
    auto_place, is_valid_placement, place_ship, random_placement, valid_placements,
};
pub use ship::{Orientation, Placement, Ship, ShipClass};
pub use sim::{simulate, SimReport};
