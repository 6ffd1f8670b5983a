//! Unattended games: the opponent against a shooter that fires at random.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{AiError, Coord};
use crate::config::GameConfig;
use crate::game::{GameError, GameSession, GameStatus, Phase, Turn};

/// Outcome of a simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimReport {
    /// `"player"` or `"opponent"`; `None` if the game did not finish.
    pub winner: Option<&'static str>,
    pub status: GameStatus,
    pub player_shots: usize,
    pub opponent_shots: usize,
}

fn random_unfired<R: Rng + ?Sized>(session: &GameSession, rng: &mut R) -> Option<Coord> {
    let free: Vec<Coord> = session
        .opponent_grid()
        .iter()
        .filter(|(_, cell)| !cell.is_fired())
        .map(|(coord, _)| coord)
        .collect();
    free.choose(rng).copied()
}

/// Auto-place the player's fleet and play until one side is sunk.
pub fn simulate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<SimReport, GameError> {
    let mut session = GameSession::new(config, rng)?;
    session.auto_place_player(rng)?;
    while session.phase() == Phase::Battle {
        match session.turn() {
            Turn::Player => {
                let (row, col) = random_unfired(&session, rng).ok_or(AiError::BoardExhausted)?;
                session.player_fire(row, col)?;
            }
            Turn::Opponent => {
                session.opponent_step(rng)?;
            }
        }
    }
    let status = session.status();
    Ok(SimReport {
        winner: match status {
            GameStatus::Won => Some("player"),
            GameStatus::Lost => Some("opponent"),
            GameStatus::InProgress => None,
        },
        status,
        player_shots: session.player_shots(),
        opponent_shots: session.opponent_shots(),
    })
}
