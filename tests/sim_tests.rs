use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{simulate, GameConfig, GameStatus, TargetPersistence};

#[test]
fn test_simulated_games_finish_with_a_winner() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = simulate(GameConfig::default(), &mut rng).unwrap();
        assert_ne!(report.status, GameStatus::InProgress);
        assert!(report.winner.is_some());
        assert!(report.player_shots <= 64);
        assert!(report.opponent_shots <= 64);
    }
}

#[test]
fn test_simulation_is_deterministic_per_seed() {
    let config = GameConfig {
        persistence: TargetPersistence::ClearOnSink,
        ..GameConfig::default()
    };
    let a = simulate(config.clone(), &mut SmallRng::seed_from_u64(5)).unwrap();
    let b = simulate(config, &mut SmallRng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);
}
