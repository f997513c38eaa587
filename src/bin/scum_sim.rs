//! Scum session simulator - plays a session and narrates every turn.
//!
//! Usage:
//!   cargo run --release --bin scum-sim -- --players 5 --games 3 --seed 7
//!   cargo run --release --bin scum-sim -- --config session.yaml --log-level debug

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_scum::{
    FinishOrder, GameReport, Hand, Participant, PlayerId, PlayerMap, Session, SessionConfig,
    TurnAction, TurnEvent,
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a session of scum and narrate it")]
struct Args {
    /// YAML file with session settings; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of seats (3-7)
    #[arg(short, long)]
    players: Option<usize>,

    /// Games to play
    #[arg(short, long)]
    games: Option<u32>,

    /// Shuffle seed
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value = "warn")]
    log_level: Level,
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => SessionConfig::default(),
        };
        if let Some(players) = self.players {
            config.participant_count = players;
        }
        if let Some(games) = self.games {
            config.games_per_session = games;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = args.session_config()?;
    let mut session = Session::new(config).context("Invalid session configuration")?;

    while session.games_played() < session.config().games_per_session {
        let report = session.play_game()?;
        narrate(&report, session.participants());
    }

    println!(
        "\nSession over after {} games. Total Schweppes: {}",
        session.games_played(),
        session.total_skips()
    );
    Ok(())
}

fn narrate(report: &GameReport, participants: &PlayerMap<Participant>) {
    let name = |seat: PlayerId| participants[seat].name.as_str();

    println!("\n=== Game {} ===", report.number);
    if !report.exchanges.is_empty() {
        for swap in &report.exchanges {
            println!(
                "{} gives {} to {} and gets back {}",
                name(swap.giver),
                Hand::from_cards(swap.given.iter().copied()),
                name(swap.receiver),
                Hand::from_cards(swap.returned.iter().copied())
            );
        }
        println!("Hands after the exchange:");
    }
    for (seat, hand) in report.opening.iter() {
        println!("  {}: {}", name(seat), hand);
    }
    println!();

    for event in &report.record.events {
        narrate_turn(event, &report.record.finish_order, &name);
    }

    println!(
        "\nSchweppes this game: {}. Final rankings:",
        report.record.skips
    );
    for (i, &seat) in report.record.finish_order.seats().iter().enumerate() {
        println!("  {}. {}", i + 1, name(seat));
    }
}

fn narrate_turn<'a>(
    event: &TurnEvent,
    finish_order: &FinishOrder,
    name: &impl Fn(PlayerId) -> &'a str,
) {
    match event.action {
        TurnAction::Played(group) => println!("{} plays {}", name(event.seat), group),
        TurnAction::Passed => println!("{} passes", name(event.seat)),
    }
    if let Some(skipped) = event.skipped {
        println!("Schweppes! {} is skipped", name(skipped));
    }
    if let Some(end) = event.round_end {
        match end.winner {
            Some(winner) => println!("Round ends. {} wins the round", name(winner)),
            None => println!("Round ends with no play. 2s and Jokers may open"),
        }
    }
    for &seat in &event.finished {
        if let Some(rank) = finish_order.rank_of(seat) {
            println!("{} finishes in rank {}", name(seat), rank);
        }
    }
}
