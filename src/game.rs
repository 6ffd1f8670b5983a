use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::{
    ai::TargetingAi,
    common::{AiError, BoardError, Coord, ShotOutcome},
    config::GameConfig,
    fleet::Fleet,
    grid::Grid,
    placement,
    ship::Orientation,
};

/// Errors returned by session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Ai(#[from] AiError),
    /// Placement requested after every ship is already on the grid.
    #[error("ship placement is already finished")]
    NotPlacing,
    /// Shots requested while ships are still being placed.
    #[error("ships are still being placed")]
    StillPlacing,
    #[error("it is not the player's turn")]
    NotPlayerTurn,
    #[error("it is not the opponent's turn")]
    NotOpponentTurn,
    #[error("the game is already over")]
    GameOver,
}

/// Current status of a game, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// The player is positioning ships.
    Placing,
    Battle,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Turn {
    Player,
    Opponent,
}

/// One game: the player's and the opponent's grids and fleets plus the
/// opponent's targeting state.
///
/// A hit keeps the turn with the shooter, a miss hands it over. The
/// opponent moves only when [`GameSession::opponent_step`] is called, so any
/// pacing between its shots belongs to the caller.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    player_grid: Grid,
    player_fleet: Fleet,
    opponent_grid: Grid,
    opponent_fleet: Fleet,
    ai: TargetingAi,
    orientation: Orientation,
    phase: Phase,
    turn: Turn,
    player_shots: usize,
    opponent_shots: usize,
}

impl GameSession {
    /// Start a session with the opponent's fleet already placed at random.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let mut session = Self {
            player_grid: Grid::new(),
            player_fleet: Fleet::new(&config.fleet),
            opponent_grid: Grid::new(),
            opponent_fleet: Fleet::new(&config.fleet),
            ai: TargetingAi::new(config.persistence),
            orientation: Orientation::Horizontal,
            phase: Phase::Placing,
            turn: Turn::Player,
            player_shots: 0,
            opponent_shots: 0,
            config,
        };
        session.restart(rng)?;
        Ok(session)
    }

    /// Discard the current game and deal a new one with the same config:
    /// a fresh opponent layout, an empty player grid and no shot history.
    /// If the opponent cannot be placed the session is left as it was.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let mut opponent_grid = Grid::new();
        let mut opponent_fleet = Fleet::new(&self.config.fleet);
        opponent_fleet.auto_place(&mut opponent_grid, rng, self.config.placement_attempts)?;

        self.opponent_grid = opponent_grid;
        self.opponent_fleet = opponent_fleet;
        self.player_grid = Grid::new();
        self.player_fleet = Fleet::new(&self.config.fleet);
        self.ai.reset();
        self.orientation = Orientation::Horizontal;
        self.phase = if self.config.fleet.is_empty() {
            Phase::Battle
        } else {
            Phase::Placing
        };
        self.turn = Turn::Player;
        self.player_shots = 0;
        self.opponent_shots = 0;
        debug!("new game dealt");
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    pub fn player_fleet(&self) -> &Fleet {
        &self.player_fleet
    }

    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent_grid
    }

    pub fn opponent_fleet(&self) -> &Fleet {
        &self.opponent_fleet
    }

    pub fn ai(&self) -> &TargetingAi {
        &self.ai
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn player_shots(&self) -> usize {
        self.player_shots
    }

    pub fn opponent_shots(&self) -> usize {
        self.opponent_shots
    }

    /// Index of the player ship to be placed next.
    pub fn current_ship(&self) -> Option<usize> {
        self.player_fleet.next_unplaced()
    }

    /// Toggle the orientation used for the next placement.
    pub fn rotate(&mut self) -> Result<Orientation, GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::NotPlacing);
        }
        self.orientation = self.orientation.rotated();
        Ok(self.orientation)
    }

    /// Place the current player ship at `(row, col)`. An invalid spot is
    /// not an error: it returns `Ok(false)` and nothing changes.
    pub fn place_next(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        let index = match (self.phase, self.current_ship()) {
            (Phase::Placing, Some(index)) => index,
            _ => return Err(GameError::NotPlacing),
        };
        let length = self.player_fleet.ships()[index].length();
        if !placement::is_valid_placement(&self.player_grid, row, col, length, self.orientation) {
            return Ok(false);
        }
        self.player_fleet
            .place(&mut self.player_grid, index, row, col, self.orientation)?;
        self.finish_placing_if_done();
        Ok(true)
    }

    /// Place every remaining player ship at random.
    pub fn auto_place_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::NotPlacing);
        }
        self.player_fleet
            .auto_place(&mut self.player_grid, rng, self.config.placement_attempts)?;
        self.finish_placing_if_done();
        Ok(())
    }

    fn finish_placing_if_done(&mut self) {
        if self.player_fleet.all_placed() {
            self.phase = Phase::Battle;
            self.turn = Turn::Player;
        }
    }

    fn ensure_battle(&self, turn: Turn) -> Result<(), GameError> {
        match self.phase {
            Phase::Placing => Err(GameError::StillPlacing),
            Phase::Over => Err(GameError::GameOver),
            Phase::Battle if self.turn != turn => Err(match turn {
                Turn::Player => GameError::NotPlayerTurn,
                Turn::Opponent => GameError::NotOpponentTurn,
            }),
            Phase::Battle => Ok(()),
        }
    }

    /// The player fires at `(row, col)` on the opponent's grid.
    pub fn player_fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        self.ensure_battle(Turn::Player)?;
        let outcome = self
            .opponent_fleet
            .receive_shot(&mut self.opponent_grid, (row, col))?;
        self.player_shots += 1;
        self.after_shot(outcome, Turn::Opponent);
        Ok(outcome)
    }

    /// Let the opponent take one shot at the player's grid.
    pub fn opponent_step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coord, ShotOutcome), GameError> {
        self.ensure_battle(Turn::Opponent)?;
        let cell = self.ai.next_move(rng)?;
        let outcome = self.player_fleet.receive_shot(&mut self.player_grid, cell)?;
        self.opponent_shots += 1;
        self.ai.record_outcome(cell, outcome);
        self.after_shot(outcome, Turn::Player);
        Ok((cell, outcome))
    }

    fn after_shot(&mut self, outcome: ShotOutcome, on_miss: Turn) {
        match self.status() {
            GameStatus::InProgress => {
                if !outcome.is_hit() {
                    self.turn = on_miss;
                }
            }
            status => {
                info!(
                    "game over: {:?} after {} player and {} opponent shots",
                    status, self.player_shots, self.opponent_shots
                );
                self.phase = Phase::Over;
            }
        }
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.player_fleet.all_sunk() {
            GameStatus::Lost
        } else if self.opponent_fleet.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
