use thiserror::Error;

pub mod pokeapi;
pub mod store;

pub use pokeapi::{
    NamedResource, PokemonDetails, PokemonPage, Sprites, StatEntry, parse_pokemon_details,
    parse_pokemon_page,
};
pub use store::{BattleRecord, RecordId, TeamMember, parse_battle_records, parse_team};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON payload: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty payload")]
    EmptyPayload,
}
