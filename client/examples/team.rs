//! Team Builder Example
//!
//! Browse PokeAPI and manage the stored team.
//!
//! Usage:
//!   cargo run --example team -- list
//!   cargo run --example team -- browse [OFFSET]
//!   cargo run --example team -- add NAME
//!   cargo run --example team -- remove ID

use std::env;
use std::process;

use anyhow::{Result, bail};
use pokeduel_client::{
    ClientConfig, PokeApiClient, RecordId, StoreClient, http_client, team_member_from_details,
};
use tracing_subscriber::EnvFilter;

const PAGE_SIZE: u32 = 20;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = ClientConfig::from_env();
    let http = http_client(&config)?;
    let pokeapi = PokeApiClient::new(http.clone(), &config);
    let store = StoreClient::new(http, &config);

    match args.first().map(String::as_str) {
        Some("list") | None => {
            let roster = store.team().await?;
            println!("My Team ({}/6)", roster.len());
            for member in roster.members() {
                let id = member
                    .id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("  [{}] {}", id, member.name);
            }
            if !roster.is_ready() {
                println!("{} slot(s) left before you can battle.", roster.remaining_slots());
            }
        }
        Some("browse") => {
            let offset = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(0);
            let roster = store.team().await?;
            for details in pokeapi.list_pokemon_details(PAGE_SIZE, offset).await? {
                let stat = |name: &str| {
                    details
                        .base_stat(name)
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "?".to_string())
                };
                let marker = if roster.contains(&details.name) {
                    " (In Team)"
                } else {
                    ""
                };
                println!(
                    "#{:<4} {:<12} HP: {:<4} Attack: {:<4} Defense: {:<4} Speed: {}{}",
                    details.id,
                    details.name,
                    stat("hp"),
                    stat("attack"),
                    stat("defense"),
                    stat("speed"),
                    marker
                );
            }
        }
        Some("add") => {
            let Some(name) = args.get(1) else {
                bail!("Usage: team add NAME");
            };
            let details = pokeapi.pokemon_details(name).await?;
            match store.add_team_member(&team_member_from_details(&details)).await {
                Ok(member) => println!("{} joined your team.", member.name),
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        Some("remove") => {
            let Some(raw) = args.get(1) else {
                bail!("Usage: team remove ID");
            };
            let id = match raw.parse::<u64>() {
                Ok(n) => RecordId::Number(n),
                Err(_) => RecordId::Text(raw.clone()),
            };
            store.remove_team_member(&id).await?;
            println!("Removed {}.", id);
        }
        Some(other) => bail!("Unknown command: {}", other),
    }

    Ok(())
}
