//! Runtime configuration for the HTTP collaborators

use std::env;
use std::time::Duration;

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";
pub const STORE_URL: &str = "http://localhost:3001";

/// Where the services live and how patient to be with them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub pokeapi_url: String,
    /// json-server base URL
    pub store_url: String,
    pub request_timeout: Duration,
    /// Opponents are drawn from dex numbers `1..=species_pool`
    pub species_pool: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pokeapi_url: POKEAPI_URL.to_string(),
            store_url: STORE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            species_pool: 151,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `POKEDUEL_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for the
    /// `POKEDUEL_*` keys. Unparsable numbers keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("POKEDUEL_POKEAPI_URL") {
            config.pokeapi_url = url;
        }

        if let Some(url) = lookup("POKEDUEL_STORE_URL") {
            config.store_url = url;
        }

        if let Some(secs) = read_var::<u64>(&lookup, "POKEDUEL_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        if let Some(pool) = read_var::<u32>(&lookup, "POKEDUEL_SPECIES_POOL") {
            config.species_pool = pool.max(1);
        }

        config
    }
}

fn read_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
