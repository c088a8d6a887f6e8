//! Battle sessions and the arena that runs them

mod arena;
mod state;

pub use arena::{Arena, ArenaConfig, ExchangeOutcome};
pub use state::{BattleLogEntry, BattleSession, Phase, Score, Side, WINS_TO_FINISH};
