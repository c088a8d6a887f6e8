//! Response types for the public PokeAPI v2 endpoints
//!
//! Only the fields the game reads are modelled. Everything else in the
//! (very large) PokeAPI payloads is ignored during decoding.

mod tests;

use crate::ParseError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference, used all over PokeAPI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One entry of the `stats` array
///
/// PokeAPI returns these in a fixed order (hp, attack, defense,
/// special-attack, special-defense, speed) but callers should look
/// stats up by `stat.name` rather than by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

impl StatEntry {
    pub fn new(name: impl Into<String>, base_stat: u32) -> Self {
        Self {
            base_stat,
            effort: 0,
            stat: NamedResource {
                name: name.into(),
                url: String::new(),
            },
        }
    }

    /// Stat name, e.g. `"special-attack"`
    pub fn name(&self) -> &str {
        &self.stat.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// `GET /pokemon/{name-or-id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl PokemonDetails {
    /// Look up a base stat by name
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.base_stat)
    }

    pub fn sprite(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }
}

/// `GET /pokemon?limit=L&offset=O`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Parse a `/pokemon/{id}` response body
pub fn parse_pokemon_details(body: &str) -> Result<PokemonDetails> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyPayload.into());
    }

    let details: PokemonDetails =
        serde_json::from_str(body).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    if details.name.is_empty() {
        return Err(ParseError::MissingField("name".to_string()).into());
    }

    Ok(details)
}

/// Parse a `/pokemon?limit=..` listing page
pub fn parse_pokemon_page(body: &str) -> Result<PokemonPage> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyPayload.into());
    }

    serde_json::from_str(body).map_err(|e| ParseError::InvalidFormat(e.to_string()).into())
}
