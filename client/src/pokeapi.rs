use anyhow::{Context, Result};
use async_trait::async_trait;
use pokeduel_battle::{Combatant, OpponentGenerator};
use pokeduel_protocol::{PokemonDetails, PokemonPage, parse_pokemon_details, parse_pokemon_page};
use rand::Rng;

use crate::config::ClientConfig;

/// PokeAPI v2 client
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    species_pool: u32,
}

impl PokeApiClient {
    pub fn new(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.pokeapi_url.trim_end_matches('/').to_string(),
            species_pool: config.species_pool.max(1),
        }
    }

    /// One page of the species listing
    pub async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<PokemonPage> {
        let url = format!("{}?limit={}&offset={}", self.url("pokemon"), limit, offset);
        let body = self.get(&url).await?;
        parse_pokemon_page(&body).context("Failed to parse pokemon listing")
    }

    /// Details by name or dex number
    pub async fn pokemon_details(&self, name_or_id: &str) -> Result<PokemonDetails> {
        let url = self.url(&format!("pokemon/{}", name_or_id.to_lowercase()));
        let body = self.get(&url).await?;
        parse_pokemon_details(&body)
            .with_context(|| format!("Failed to parse details for {}", name_or_id))
    }

    /// Details for every entry on a listing page
    pub async fn list_pokemon_details(&self, limit: u32, offset: u32) -> Result<Vec<PokemonDetails>> {
        let page = self.list_pokemon(limit, offset).await?;
        let mut details = Vec::with_capacity(page.results.len());
        for entry in &page.results {
            details.push(self.pokemon_details(&entry.name).await?);
        }
        Ok(details)
    }

    pub fn species_pool(&self) -> u32 {
        self.species_pool
    }

    fn random_species_id(&self) -> u32 {
        rand::thread_rng().gen_range(1..=self.species_pool)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?
            .error_for_status()
            .with_context(|| format!("PokeAPI rejected {}", url))?;

        response.text().await.context("Failed to read PokeAPI response")
    }
}

#[async_trait]
impl OpponentGenerator for PokeApiClient {
    async fn random_opponent(&self) -> Result<Combatant> {
        let id = self.random_species_id();
        tracing::debug!(id, "Drawing random opponent");

        let details = self.pokemon_details(&id.to_string()).await?;
        Ok(Combatant::from_details(&details)?)
    }
}
