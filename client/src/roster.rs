use anyhow::{Context, Result};
use async_trait::async_trait;
use pokeduel_battle::{Combatant, RosterSource};
use pokeduel_protocol::TeamMember;

use crate::pokeapi::PokeApiClient;
use crate::store::StoreClient;

/// The stored team, with stats filled in from PokeAPI where the stored
/// ones cannot be scored
#[derive(Debug, Clone)]
pub struct StoredRoster {
    store: StoreClient,
    pokeapi: PokeApiClient,
}

impl StoredRoster {
    pub fn new(store: StoreClient, pokeapi: PokeApiClient) -> Self {
        Self { store, pokeapi }
    }
}

#[async_trait]
impl RosterSource for StoredRoster {
    async fn challenger_team(&self) -> Result<Vec<Combatant>> {
        let roster = self.store.team().await?;
        let mut team = Vec::with_capacity(roster.len());

        for member in roster.members() {
            let combatant = match stored_combatant(member)? {
                Some(combatant) => combatant,
                None => {
                    tracing::debug!(name = %member.name, "Resolving stats from PokeAPI");
                    let details = self
                        .pokeapi
                        .pokemon_details(&member.name)
                        .await
                        .with_context(|| format!("Failed to resolve stats for {}", member.name))?;
                    let combatant = Combatant::from_details(&details)?;
                    match &member.sprite {
                        Some(sprite) => combatant.with_sprite(sprite.clone()),
                        None => combatant,
                    }
                }
            };
            team.push(combatant);
        }

        Ok(team)
    }
}

/// The member as stored, or `None` when its stats have to be looked up
fn stored_combatant(member: &TeamMember) -> Result<Option<Combatant>> {
    let combatant = Combatant::from_team_member(member)?;
    Ok(combatant.is_scorable().then_some(combatant))
}
