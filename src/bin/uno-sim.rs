//! uno-sim - play UNO games between greedy agents, optionally with a human seat.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uno_engine::agents::{Agent, GreedyAgent, HumanAgent};
use uno_engine::core::{GameConfig, PlayerResult};
use uno_engine::events::{EventSink, NullSink, TracingSink};
use uno_engine::rules::{Engine, GameStatus};

/// Simulate UNO games
#[derive(Parser, Debug)]
#[command(name = "uno-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (2-10)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Cards dealt to each player
    #[arg(long, default_value = "7")]
    hand_size: usize,

    /// Cards drawn by a player caught holding one card
    #[arg(long, default_value = "7")]
    penalty: usize,

    /// Seed for the first game (increments per game)
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Give up on a game after this many rounds
    #[arg(long, default_value = "5000")]
    max_rounds: u32,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Let greedy agents call out opponents holding one card
    #[arg(long)]
    vigilant: bool,

    /// Seat 1 is played from this terminal
    #[arg(long)]
    human: bool,

    /// Load the game configuration from a JSON file (overrides the flags above)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every game event
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn base_config(args: &Args) -> Result<GameConfig, Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::new(args.players)
            .with_hand_size(args.hand_size)
            .with_uno_penalty(args.penalty)
            .with_seed(args.seed),
    };
    config.validate()?;
    Ok(config)
}

fn agents(args: &Args, seats: usize) -> Vec<Box<dyn Agent>> {
    let greedy = if args.vigilant {
        GreedyAgent::new()
    } else {
        GreedyAgent::relaxed()
    };

    (0..seats)
        .map(|seat| -> Box<dyn Agent> {
            if seat == 0 && args.human {
                Box::new(HumanAgent::new(io::stdin().lock(), io::stdout()))
            } else {
                Box::new(greedy)
            }
        })
        .collect()
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let base = base_config(args)?;
    let mut wins = vec![0u32; base.player_count];
    let mut stalled = 0u32;

    for game in 0..args.games {
        let config = base.clone().with_seed(base.seed.wrapping_add(u64::from(game)));
        let sink: Box<dyn EventSink> = if args.verbose || args.human {
            Box::new(TracingSink)
        } else {
            Box::new(NullSink)
        };

        let mut engine = Engine::with_sink(config, sink)?;
        let mut seats = agents(args, base.player_count);
        let summary = engine.play_game(&mut seats, args.max_rounds)?;

        match summary.status {
            GameStatus::Finished { winner } => {
                println!("game {game}: {winner} won after {} rounds", summary.rounds);
                if let Some(seat) = winner.seat() {
                    wins[seat] += 1;
                }
            }
            GameStatus::Stalled => {
                println!("game {game}: stalled after {} rounds", summary.rounds);
                stalled += 1;
            }
        }

        if args.human {
            for (id, result) in &summary.results {
                let label = match result {
                    PlayerResult::Winner => "Winner",
                    PlayerResult::Loser => "Loser",
                    PlayerResult::Unset => "-",
                };
                println!("  {id}: {label}");
            }
        }
    }

    if args.games > 1 {
        println!("--- {} games ---", args.games);
        for (seat, count) in wins.iter().enumerate() {
            println!("Player {}: {count} wins", seat + 1);
        }
        if stalled > 0 {
            println!("stalled: {stalled}");
        }
    }
    Ok(())
}
