//! Combatant - one Pokemon entering a battle

use pokeduel_protocol::{PokemonDetails, StatEntry, TeamMember};

use super::stats::{BaseStats, StatName};
use crate::error::BattleError;

/// A Pokemon with an identity and an immutable base stat block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    /// National dex number, when known
    id: Option<u32>,
    name: String,
    sprite: Option<String>,
    stats: BaseStats,
}

impl Combatant {
    pub fn new(name: impl Into<String>, stats: BaseStats) -> Self {
        Self {
            id: None,
            name: name.into(),
            sprite: None,
            stats,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = Some(sprite.into());
        self
    }

    /// Create from a PokeAPI `/pokemon/{id}` response
    pub fn from_details(details: &PokemonDetails) -> Result<Self, BattleError> {
        let stats = stats_from_entries(&details.stats)?;
        Ok(Self {
            id: Some(details.id),
            name: details.name.clone(),
            sprite: details.sprites.front_default.clone(),
            stats,
        })
    }

    /// Create from a stored team member
    pub fn from_team_member(member: &TeamMember) -> Result<Self, BattleError> {
        let stats = stats_from_entries(&member.stats)?;
        Ok(Self {
            id: None,
            name: member.name.clone(),
            sprite: member.sprite.clone(),
            stats,
        })
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sprite(&self) -> Option<&str> {
        self.sprite.as_deref()
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn stat(&self, stat: StatName) -> Option<u32> {
        self.stats.get(stat)
    }

    /// Get a stat the caller cannot do without
    pub fn require(&self, stat: StatName) -> Result<u32, BattleError> {
        self.stats.get(stat).ok_or_else(|| BattleError::MissingStat {
            combatant: self.name.clone(),
            stat,
        })
    }

    /// Check that every stat an exchange is scored on is present
    pub fn check_decisive(&self) -> Result<(), BattleError> {
        for stat in StatName::DECISIVE {
            self.require(stat)?;
        }
        Ok(())
    }

    /// Whether this combatant can be scored in an exchange
    pub fn is_scorable(&self) -> bool {
        self.check_decisive().is_ok()
    }
}

/// Unknown stat names are skipped
fn stats_from_entries(entries: &[StatEntry]) -> Result<BaseStats, BattleError> {
    BaseStats::from_pairs(
        entries
            .iter()
            .filter_map(|e| StatName::parse(e.name()).map(|stat| (stat, e.base_stat))),
    )
}
