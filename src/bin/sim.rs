use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{simulate, GameConfig, TargetPersistence};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 3 {
        eprintln!("Usage: {} <seed> [clear-on-sink]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let persistence = match args.get(2).map(String::as_str) {
        None => TargetPersistence::UntilExhausted,
        Some("clear-on-sink") => TargetPersistence::ClearOnSink,
        Some(other) => anyhow::bail!("unknown persistence policy: {}", other),
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig {
        persistence,
        ..GameConfig::default()
    };
    let report = simulate(config.clone(), &mut rng)?;

    let result = json!({
        "seed": seed,
        "config": &config,
        "report": &report,
        "winner": report.winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
