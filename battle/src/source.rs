//! External collaborators the arena depends on
//!
//! The arena never talks to a transport directly. Implement these traits
//! over HTTP for the real game (see `pokeduel-client`) or in memory for
//! tests.

use anyhow::Result;
use async_trait::async_trait;
use pokeduel_protocol::BattleRecord;

use crate::types::Combatant;

/// Supplies the player's stored team, in fighting order
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn challenger_team(&self) -> Result<Vec<Combatant>>;
}

/// Draws a random opponent from a large species pool
#[async_trait]
pub trait OpponentGenerator: Send + Sync {
    async fn random_opponent(&self) -> Result<Combatant>;
}

/// Persistent battle history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Store one record, returning it as stored (with its id)
    async fn append_battle_record(&self, record: &BattleRecord) -> Result<BattleRecord>;

    /// All stored records, oldest first
    async fn list_battle_records(&self) -> Result<Vec<BattleRecord>>;

    async fn delete_all_battle_records(&self) -> Result<()>;
}
