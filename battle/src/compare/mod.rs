//! Stat comparison between two combatants
//!
//! An exchange is decided on three stats (hp, attack, speed): each stat
//! gives one point to the strictly greater side, ties give nothing, and
//! two points win. Defense is printed in the explanation but not scored.

mod exchange;

pub use exchange::{ExchangeResult, Position, TieBreak, compare, compare_with};
