use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    BoardError, Cell, GameConfig, GameError, GameSession, GameStatus, Grid, Mode, Orientation,
    Phase, ShotOutcome, TargetPersistence, Turn, FLEET, TOTAL_SHIP_CELLS,
};

fn ready_session(seed: u64) -> (GameSession, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new(GameConfig::default(), &mut rng).unwrap();
    session.auto_place_player(&mut rng).unwrap();
    (session, rng)
}

fn cells_of(session: &GameSession, player_side: bool, wanted: Cell) -> Vec<(usize, usize)> {
    let grid = if player_side {
        session.player_grid()
    } else {
        session.opponent_grid()
    };
    grid.iter()
        .filter(|&(_, c)| c == wanted)
        .map(|(coord, _)| coord)
        .collect()
}

#[test]
fn test_new_session_places_opponent_only() {
    let mut rng = SmallRng::seed_from_u64(1);
    let session = GameSession::new(GameConfig::default(), &mut rng).unwrap();
    assert_eq!(session.phase(), Phase::Placing);
    assert_eq!(session.opponent_grid().count(Cell::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(session.player_grid().count(Cell::Ship), 0);
    assert!(session.opponent_fleet().all_placed());
    assert_eq!(session.current_ship(), Some(0));
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_manual_placement_flow() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut session = GameSession::new(GameConfig::default(), &mut rng).unwrap();

    assert_eq!(session.player_fire(0, 0), Err(GameError::StillPlacing));
    // Length 3 does not fit horizontally from column 6.
    assert_eq!(session.place_next(0, 6), Ok(false));
    assert_eq!(session.current_ship(), Some(0));
    assert_eq!(session.place_next(0, 5), Ok(true));

    assert_eq!(session.rotate(), Ok(Orientation::Vertical));
    assert_eq!(session.place_next(0, 5), Ok(false), "overlaps the first ship");
    for (i, col) in [0usize, 1, 2, 3].iter().enumerate() {
        assert_eq!(session.current_ship(), Some(i + 1));
        assert_eq!(session.place_next(2, *col), Ok(true));
    }

    assert_eq!(session.phase(), Phase::Battle);
    assert_eq!(session.turn(), Turn::Player);
    assert_eq!(session.player_grid().count(Cell::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(session.place_next(7, 7), Err(GameError::NotPlacing));
    assert_eq!(session.rotate(), Err(GameError::NotPlacing));
}

#[test]
fn test_player_hit_keeps_turn_and_miss_passes_it() {
    let (mut session, _) = ready_session(3);
    let ship = cells_of(&session, false, Cell::Ship)[0];
    let water = cells_of(&session, false, Cell::Empty)[0];

    assert!(session.player_fire(ship.0, ship.1).unwrap().is_hit());
    assert_eq!(session.turn(), Turn::Player);
    assert_eq!(
        session.player_fire(ship.0, ship.1),
        Err(GameError::Board(BoardError::AlreadyFired {
            row: ship.0,
            col: ship.1
        }))
    );
    assert_eq!(session.player_shots(), 1);

    assert_eq!(session.player_fire(water.0, water.1), Ok(ShotOutcome::Miss));
    assert_eq!(session.turn(), Turn::Opponent);
    assert_eq!(session.player_fire(0, 0), Err(GameError::NotPlayerTurn));
}

#[test]
fn test_opponent_step_requires_its_turn() {
    let (mut session, mut rng) = ready_session(4);
    assert_eq!(
        session.opponent_step(&mut rng).unwrap_err(),
        GameError::NotOpponentTurn
    );
}

#[test]
fn test_opponent_turn_runs_until_a_miss() {
    let (mut session, mut rng) = ready_session(5);
    let water = cells_of(&session, false, Cell::Empty)[0];
    session.player_fire(water.0, water.1).unwrap();

    let mut fired = Vec::new();
    while session.turn() == Turn::Opponent && session.phase() == Phase::Battle {
        let (cell, outcome) = session.opponent_step(&mut rng).unwrap();
        assert!(!fired.contains(&cell));
        fired.push(cell);
        let expected = if outcome.is_hit() { Cell::Hit } else { Cell::Miss };
        assert_eq!(session.player_grid().get(cell.0, cell.1).unwrap(), expected);
        if !outcome.is_hit() {
            assert_eq!(session.turn(), Turn::Player);
        }
    }
    assert_eq!(session.opponent_shots(), fired.len());
}

#[test]
fn test_win_triggers_exactly_on_last_sink() {
    let (mut session, _) = ready_session(6);
    let targets = cells_of(&session, false, Cell::Ship);
    let last = targets.len() - 1;
    for (i, (r, c)) in targets.into_iter().enumerate() {
        assert_eq!(session.status(), GameStatus::InProgress);
        let outcome = session.player_fire(r, c).unwrap();
        assert!(outcome.is_hit());
        if i == last {
            assert!(matches!(outcome, ShotOutcome::Sunk(_)));
        }
    }
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.phase(), Phase::Over);
    assert_eq!(session.opponent_fleet().sunk_count(), FLEET.len());
    assert_eq!(session.player_fire(0, 0), Err(GameError::GameOver));
}

fn play_out(seed: u64, persistence: TargetPersistence) -> GameSession {
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig {
        persistence,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config, &mut rng).unwrap();
    session.auto_place_player(&mut rng).unwrap();
    // The player works through open water first, so the opponent gets as
    // many turns as possible.
    let mut targets = cells_of(&session, false, Cell::Empty);
    targets.extend(cells_of(&session, false, Cell::Ship));
    let mut targets = targets.into_iter();
    while session.phase() == Phase::Battle {
        match session.turn() {
            Turn::Player => {
                let (r, c) = targets.next().expect("player ran out of cells");
                session.player_fire(r, c).unwrap();
            }
            Turn::Opponent => {
                session.opponent_step(&mut rng).unwrap();
            }
        }
    }
    session
}

#[test]
fn test_full_games_end_consistently() {
    for persistence in [TargetPersistence::UntilExhausted, TargetPersistence::ClearOnSink] {
        for seed in 0..10 {
            let session = play_out(seed, persistence);
            assert_eq!(session.phase(), Phase::Over);
            assert!(session.opponent_shots() <= 64);
            assert_eq!(
                session.opponent_shots(),
                session.player_grid().count(Cell::Hit) + session.player_grid().count(Cell::Miss)
            );
            match session.status() {
                GameStatus::Lost => {
                    assert!(session.player_fleet().all_sunk());
                    assert!(cells_of(&session, true, Cell::Ship).is_empty());
                }
                GameStatus::Won => assert!(session.opponent_fleet().all_sunk()),
                GameStatus::InProgress => panic!("game ended without a result"),
            }
        }
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let a = play_out(77, TargetPersistence::UntilExhausted);
    let b = play_out(77, TargetPersistence::UntilExhausted);
    assert_eq!(a.player_grid(), b.player_grid());
    assert_eq!(a.opponent_shots(), b.opponent_shots());
}

#[test]
fn test_restart_after_game_over_deals_a_fresh_game() {
    let mut session = play_out(21, TargetPersistence::UntilExhausted);
    assert_eq!(session.phase(), Phase::Over);
    assert!(!session.ai().fired().is_empty());

    let mut rng = SmallRng::seed_from_u64(22);
    session.restart(&mut rng).unwrap();
    assert_eq!(session.phase(), Phase::Placing);
    assert_eq!(session.turn(), Turn::Player);
    assert_eq!(session.orientation(), Orientation::Horizontal);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.current_ship(), Some(0));
    assert_eq!((session.player_shots(), session.opponent_shots()), (0, 0));
    assert!(session.ai().fired().is_empty());
    assert_eq!(session.ai().mode(), Mode::Hunt);
    assert_eq!(session.player_grid(), &Grid::new());
    assert_eq!(session.opponent_grid().count(Cell::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(session.opponent_grid().count(Cell::Hit), 0);
    assert_eq!(session.opponent_grid().count(Cell::Miss), 0);
    assert_eq!(session.opponent_fleet().sunk_count(), 0);

    // The new game plays like any other.
    session.auto_place_player(&mut rng).unwrap();
    assert_eq!(session.phase(), Phase::Battle);
    let water = cells_of(&session, false, Cell::Empty)[0];
    assert_eq!(session.player_fire(water.0, water.1), Ok(ShotOutcome::Miss));
    session.opponent_step(&mut rng).unwrap();
    assert_eq!(session.ai().fired().count_ones(), 1);
}

#[test]
fn test_restart_mid_placement_clears_player_ships() {
    let mut rng = SmallRng::seed_from_u64(23);
    let mut session = GameSession::new(GameConfig::default(), &mut rng).unwrap();
    session.rotate().unwrap();
    assert_eq!(session.place_next(0, 0), Ok(true));
    session.restart(&mut rng).unwrap();
    assert_eq!(session.player_grid().count(Cell::Ship), 0);
    assert_eq!(session.current_ship(), Some(0));
    assert_eq!(session.orientation(), Orientation::Horizontal);
}
