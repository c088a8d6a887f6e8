//! Battle Example
//!
//! Runs one full battle: the stored team against random PokeAPI opponents,
//! printing every exchange and saving the log to the store.
//!
//! Usage: cargo run --example battle [-- --clear-history]

use std::env;
use std::process;

use anyhow::Result;
use pokeduel_battle::{BattleError, Side};
use pokeduel_client::{ArenaConfig, ClientConfig, connect_arena};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let clear_history = env::args().any(|arg| arg == "--clear-history");

    let config = ClientConfig::from_env();
    let mut arena = connect_arena(&config, ArenaConfig::default())?;

    if clear_history {
        arena.clear_history().await?;
        println!("Battle history cleared.");
    }

    if let Err(e) = arena.load_history().await {
        eprintln!("Could not load battle history: {}", e);
    }

    match arena.start().await {
        Ok(()) => {}
        Err(e @ BattleError::InsufficientRoster { .. }) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(team) = arena.team() {
        let names: Vec<&str> = team.iter().map(|c| c.name()).collect();
        println!("Your team: {}\n", names.join(", "));
    }

    loop {
        let challenger = arena.current_challenger().map(|c| c.name().to_string());

        match arena.next_exchange().await {
            Ok(Some(outcome)) => {
                println!(
                    "{} vs {} - {}",
                    outcome.entry.challenger, outcome.entry.opponent, outcome.entry.winner
                );
                println!("  {}", outcome.entry.explanation);
                println!(
                    "  You: {} | Enemy: {}\n",
                    outcome.score.challenger, outcome.score.opponent
                );
                if outcome.finished.is_some() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e @ BattleError::Persistence { .. }) => {
                eprintln!("Battle finished but {}", e);
                break;
            }
            Err(e) => {
                eprintln!(
                    "Exchange for {} failed: {}",
                    challenger.as_deref().unwrap_or("?"),
                    e
                );
                process::exit(1);
            }
        }
    }

    let winner = match arena.session().winner() {
        Some(Side::Challenger) => "You",
        Some(Side::Opponent) => "AI",
        None => "nobody",
    };
    println!("Battle Ended - Winner: {}", winner);
    println!(
        "Remaining Pokemon: {}/{}",
        arena.session().remaining_fighters(),
        pokeduel_battle::TEAM_SIZE
    );

    println!("\nRecent battles:");
    for record in arena.history().iter().take(10) {
        println!(
            "  {} vs {} - {} ({})",
            record.player1,
            record.player2,
            record.winner,
            record.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
