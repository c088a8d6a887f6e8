//! Battle resolution for pokeduel.
//!
//! A battle pits the player's six-Pokemon team against an endless stream of
//! randomly generated opponents, one exchange at a time.
//!
//! # Overview
//!
//! ```text
//! pokeduel-protocol (PokeAPI + store wire types)
//!        │
//!        ▼
//! pokeduel-battle (comparator + arena) ← THIS CRATE
//!        │
//!        └─> pokeduel-client (HTTP collaborators, demos)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`StatName`], [`BaseStats`] - Base stats keyed by name
//! - [`Combatant`] - One Pokemon with an immutable stat block
//! - [`Team`] - Exactly six combatants in fighting order
//!
//! ## Comparison
//! - [`compare`] - Decide an exchange on hp, attack and speed
//!
//! ## Orchestration
//! - [`Arena`] - Runs a session from first exchange to result and writes
//!   the battle log to the history store
//! - [`RosterSource`], [`OpponentGenerator`], [`HistoryStore`] - The
//!   collaborators the arena is built from
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokeduel_battle::{Arena, ArenaConfig};
//!
//! let mut arena = Arena::new(roster, opponents, store, ArenaConfig::default());
//! arena.start().await?;
//!
//! while let Some(outcome) = arena.next_exchange().await? {
//!     println!("{}", outcome.entry.explanation);
//!     if outcome.finished.is_some() {
//!         break;
//!     }
//! }
//! ```

pub mod compare;
pub mod error;
pub mod session;
pub mod source;
pub mod types;

pub use compare::{ExchangeResult, Position, TieBreak, compare, compare_with};
pub use error::{BattleError, ExternalCall, FailedWrite};
pub use session::{
    Arena, ArenaConfig, BattleLogEntry, BattleSession, ExchangeOutcome, Phase, Score, Side,
    WINS_TO_FINISH,
};
pub use source::{HistoryStore, OpponentGenerator, RosterSource};
pub use types::{BaseStats, Combatant, StatName, TEAM_SIZE, Team};

// Re-export the store record the history view is made of
pub use pokeduel_protocol::BattleRecord;
