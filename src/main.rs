use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::{sleep, Duration};

use seabattle::{
    init_logging, simulate,
    ui::{coord_to_string, parse_coord, render_grid},
    GameConfig, GameError, GameSession, GameStatus, Phase, ShotOutcome, TargetPersistence, Turn,
    DEFAULT_OPPONENT_DELAY_MS, DEFAULT_PLACEMENT_ATTEMPTS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
struct CommonArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Stop chasing a ship's neighbors as soon as it sinks.
    #[arg(long)]
    clear_on_sink: bool,
    /// Random tries per ship before scanning every position.
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_ATTEMPTS)]
    placement_attempts: usize,
}

impl CommonArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            placement_attempts: self.placement_attempts,
            persistence: if self.clear_on_sink {
                TargetPersistence::ClearOnSink
            } else {
                TargetPersistence::UntilExhausted
            },
            ..GameConfig::default()
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[command(flatten)]
        common: CommonArgs,
        /// Pause between the computer's shots, in milliseconds.
        #[arg(long, default_value_t = DEFAULT_OPPONENT_DELAY_MS)]
        delay_ms: u64,
        /// Place your fleet at random instead of by hand.
        #[arg(long)]
        auto_place: bool,
    },
    /// Let the computer play a random shooter and print a JSON summary.
    Sim {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            common,
            delay_ms,
            auto_place,
        } => {
            if let Some(s) = common.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = common.rng();
            let delay = Duration::from_millis(delay_ms);
            let mut session = GameSession::new(common.config(), &mut rng)?;
            loop {
                if auto_place {
                    session.auto_place_player(&mut rng)?;
                }
                if !play(&mut session, &mut rng, delay).await? {
                    break;
                }
                match prompt("Play again? (y/n): ")? {
                    Some(answer) if answer.eq_ignore_ascii_case("y") => {
                        session.restart(&mut rng)?;
                    }
                    _ => break,
                }
            }
        }
        Commands::Sim { common } => {
            let mut rng = common.rng();
            let report = simulate(common.config(), &mut rng)?;
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}

/// Read one trimmed line; `None` on end of input.
fn prompt(msg: &str) -> anyhow::Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn describe(outcome: ShotOutcome) -> String {
    match outcome {
        ShotOutcome::Hit => "hit".to_string(),
        ShotOutcome::Miss => "miss".to_string(),
        ShotOutcome::Sunk(name) => format!("hit and sank the {}", name),
    }
}

/// Run one game to its end. Returns `false` if the player quit first.
async fn play(
    session: &mut GameSession,
    rng: &mut SmallRng,
    delay: Duration,
) -> anyhow::Result<bool> {
    while session.phase() == Phase::Placing {
        let Some(index) = session.current_ship() else {
            break;
        };
        let class = session.player_fleet().ships()[index].class();
        println!("\n{}", render_grid(session.player_grid(), true));
        let msg = format!(
            "Place your {} (length {}, {:?}). Cell, 'r' to rotate, 'a' for auto, 'q' to quit: ",
            class.name(),
            class.length(),
            session.orientation()
        );
        let Some(line) = prompt(&msg)? else {
            return Ok(false);
        };
        match line.to_ascii_lowercase().as_str() {
            "q" => return Ok(false),
            "r" => {
                session.rotate()?;
            }
            "a" => session.auto_place_player(rng)?,
            input => match parse_coord(input) {
                Some((r, c)) => {
                    if !session.place_next(r, c)? {
                        println!("That ship does not fit there.");
                    }
                }
                None => println!("Enter a cell like A1."),
            },
        }
    }

    while session.phase() == Phase::Battle {
        match session.turn() {
            Turn::Player => {
                println!("\nEnemy waters:\n{}", render_grid(session.opponent_grid(), false));
                let Some(line) = prompt("Fire at (e.g. C4, 'q' to quit): ")? else {
                    return Ok(false);
                };
                if line.eq_ignore_ascii_case("q") {
                    return Ok(false);
                }
                let Some((r, c)) = parse_coord(&line) else {
                    println!("Enter a cell like A1.");
                    continue;
                };
                match session.player_fire(r, c) {
                    Ok(outcome) => println!("{}: {}", coord_to_string((r, c)), describe(outcome)),
                    Err(GameError::Board(e)) => println!("{}", e),
                    Err(e) => return Err(e.into()),
                }
            }
            Turn::Opponent => {
                sleep(delay).await;
                let (cell, outcome) = session.opponent_step(rng)?;
                println!("Computer fires at {}: {}", coord_to_string(cell), describe(outcome));
                if session.turn() == Turn::Player {
                    println!("\nYour fleet:\n{}", render_grid(session.player_grid(), true));
                }
            }
        }
    }

    match session.status() {
        GameStatus::Won => println!("Congratulations, you win!"),
        GameStatus::Lost => println!("Game over, the computer wins."),
        GameStatus::InProgress => return Ok(false),
    }
    Ok(true)
}
