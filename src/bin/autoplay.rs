//! Plays random games and prints how they ended.
//!
//! ```text
//! autoplay --players 3 --games 10 --seed 7
//! RUST_LOG=fiery_dragons=debug autoplay --games 1
//! ```

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fiery_dragons::{play_out, ConfigError, Game, GameConfig, GameRng, PenaltyRule};

/// Random self-play for Fiery Dragons
#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play random Fiery Dragons games", long_about = None)]
#[command(version)]
struct Args {
    /// Seed for the first game; later games use seed + n
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of players
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Dragons per player
    #[arg(short, long, default_value_t = 1)]
    dragons: usize,

    /// Volcano tiles on the track
    #[arg(long, default_value_t = 24)]
    track_size: usize,

    /// Rule applied by dragon pirate cards
    #[arg(long, value_enum, default_value_t = Penalty::Sliding)]
    penalty: Penalty,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u64,

    /// Give up on a game after this many card reveals
    #[arg(long, default_value_t = 10_000)]
    max_reveals: usize,

    /// Print each game's final state as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Penalty {
    /// Blocked landings end the turn
    Plain,
    /// Blocked landings slide further back
    Sliding,
}

impl From<Penalty> for PenaltyRule {
    fn from(p: Penalty) -> Self {
        match p {
            Penalty::Plain => PenaltyRule::Backward,
            Penalty::Sliding => PenaltyRule::SpecialBackward,
        }
    }
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    info!(?args, "starting autoplay");

    let mut finished = 0;
    for n in 0..args.games {
        let seed = args.seed.wrapping_add(n);
        let config = GameConfig::new(args.players)
            .with_seed(seed)
            .with_track_size(args.track_size)
            .with_dragons_per_player(args.dragons)
            .with_penalty_rule(args.penalty.into());

        let mut game = Game::new(config)?;
        let mut rng = GameRng::new(seed).for_context("selfplay");
        let report = play_out(&mut game, &mut rng, args.max_reveals);

        match (report.winner, report.winning_player) {
            (Some(dragon), Some(player)) => {
                finished += 1;
                println!(
                    "game {n} (seed {seed}): {player} wins with {dragon} after {} reveals, {} turns",
                    report.reveals, report.turns
                );
            }
            _ => println!(
                "game {n} (seed {seed}): no winner after {} reveals",
                report.reveals
            ),
        }

        if args.json {
            match game.snapshot().to_json() {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("could not encode game {n}: {err}"),
            }
        }
    }

    println!("{finished}/{} games finished", args.games);
    Ok(())
}
