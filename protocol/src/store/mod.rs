//! Record types for the json-server backing store
//!
//! The store exposes two collections: `/team` holds the player's roster and
//! `/battles` holds one record per finished exchange.

mod tests;

use std::fmt;

use crate::ParseError;
use crate::pokeapi::StatEntry;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record identifier assigned by the store
///
/// json-server 0.x hands out numbers, 1.x hands out short strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// A Pokemon stored in `/team`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

impl TeamMember {
    /// A member that has not been written to the store yet
    pub fn new(name: impl Into<String>, sprite: Option<String>, stats: Vec<StatEntry>) -> Self {
        Self {
            id: None,
            name: name.into(),
            sprite,
            stats,
        }
    }
}

/// One exchange result stored in `/battles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub timestamp: DateTime<Utc>,
    /// Challenger's fighter
    pub player1: String,
    /// Opponent's fighter
    pub player2: String,
    pub winner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Parse the body of `GET /team`
pub fn parse_team(body: &str) -> Result<Vec<TeamMember>> {
    parse_collection(body)
}

/// Parse the body of `GET /battles`
pub fn parse_battle_records(body: &str) -> Result<Vec<BattleRecord>> {
    parse_collection(body)
}

fn parse_collection<T: for<'de> Deserialize<'de>>(body: &str) -> Result<Vec<T>> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyPayload.into());
    }

    serde_json::from_str(body).map_err(|e| ParseError::InvalidFormat(e.to_string()).into())
}
