//! Domain types for battles

mod combatant;
mod stats;
mod team;

pub use combatant::Combatant;
pub use stats::{BaseStats, StatName};
pub use team::{TEAM_SIZE, Team};
