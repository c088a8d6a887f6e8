//! HTTP collaborators for the pokeduel arena.
//!
//! [`PokeApiClient`] talks to PokeAPI (browsing and random opponents),
//! [`StoreClient`] to the json-server store (team and battle history).
//! [`connect_arena`] wires both into a ready-to-start [`Arena`].

mod config;
mod pokeapi;
mod roster;
mod store;

use std::sync::Arc;

use anyhow::{Context, Result};

pub use config::{ClientConfig, POKEAPI_URL, STORE_URL};
pub use pokeapi::PokeApiClient;
pub use roster::StoredRoster;
pub use store::StoreClient;

pub use pokeduel_battle::{Arena, ArenaConfig, BattleError};
pub use pokeduel_protocol::{BattleRecord, PokemonDetails, RecordId, TeamMember};
pub use pokeduel_team::{Roster, TeamError};

/// Build a shared HTTP client with the configured timeout
pub fn http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// Create an arena backed by PokeAPI and the json-server store
pub fn connect_arena(config: &ClientConfig, arena_config: ArenaConfig) -> Result<Arena> {
    let http = http_client(config)?;
    let pokeapi = PokeApiClient::new(http.clone(), config);
    let store = StoreClient::new(http, config);
    let roster = StoredRoster::new(store.clone(), pokeapi.clone());

    Ok(Arena::new(
        Arc::new(roster),
        Arc::new(pokeapi),
        Arc::new(store),
        arena_config,
    ))
}

/// Turn a PokeAPI entry into a team member ready to be stored
pub fn team_member_from_details(details: &PokemonDetails) -> TeamMember {
    TeamMember::new(
        details.name.clone(),
        details.sprites.front_default.clone(),
        details.stats.clone(),
    )
}
