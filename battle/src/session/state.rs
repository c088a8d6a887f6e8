//! Battle session state
//!
//! Only the arena mutates a session; everything public here is read-only.

use chrono::{DateTime, Utc};
use pokeduel_protocol::BattleRecord;

use crate::types::TEAM_SIZE;

/// Wins a side needs to take the battle
pub const WINS_TO_FINISH: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player's team
    Challenger,
    /// Randomly generated opponents
    Opponent,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Challenger => "challenger",
            Side::Opponent => "opponent",
        }
    }
}

/// Exchanges won by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub challenger: u32,
    pub opponent: u32,
}

impl Score {
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Challenger => self.challenger,
            Side::Opponent => self.opponent,
        }
    }

    /// Number of completed exchanges
    pub fn total(&self) -> u32 {
        self.challenger + self.opponent
    }
}

/// One exchange, as shown in the battle log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleLogEntry {
    pub challenger: String,
    pub opponent: String,
    pub winner: String,
    pub winner_side: Side,
    pub explanation: String,
    pub timestamp: DateTime<Utc>,
}

impl BattleLogEntry {
    /// Store form, stamped with the time the battle was captured
    pub fn to_record(&self, captured_at: DateTime<Utc>) -> BattleRecord {
        BattleRecord {
            id: None,
            timestamp: captured_at,
            player1: self.challenger.clone(),
            player2: self.opponent.clone(),
            winner: self.winner.clone(),
            explanation: Some(self.explanation.clone()),
        }
    }
}

/// State of one battle from first exchange to result
#[derive(Debug, Clone)]
pub struct BattleSession {
    phase: Phase,
    challenger_index: usize,
    score: Score,
    winner: Option<Side>,
    log: Vec<BattleLogEntry>,
}

impl BattleSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            challenger_index: 0,
            score: Score::default(),
            winner: None,
            log: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the challenger's active fighter (0-based)
    pub fn challenger_index(&self) -> usize {
        self.challenger_index
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Winning side, once ended
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Exchanges so far, oldest first
    pub fn log(&self) -> &[BattleLogEntry] {
        &self.log
    }

    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Fighters the challenger has left, counting the active one
    pub fn remaining_fighters(&self) -> usize {
        TEAM_SIZE - self.challenger_index
    }

    /// Whether another exchange may run
    pub fn can_exchange(&self) -> bool {
        self.phase == Phase::InProgress && self.challenger_index < TEAM_SIZE
    }

    /// Start over with a fresh in-progress session
    pub(crate) fn begin(&mut self) {
        *self = Self::new();
        self.phase = Phase::InProgress;
    }

    /// Record a finished exchange and return the winner if the battle is over
    ///
    /// A winning challenger fighter stays in; a losing one is retired.
    pub(crate) fn apply(&mut self, entry: BattleLogEntry) -> Option<Side> {
        debug_assert!(self.can_exchange());

        match entry.winner_side {
            Side::Challenger => self.score.challenger += 1,
            Side::Opponent => {
                self.score.opponent += 1;
                self.challenger_index += 1;
            }
        }
        self.log.push(entry);

        let winner = if self.score.challenger >= WINS_TO_FINISH {
            Some(Side::Challenger)
        } else if self.score.opponent >= WINS_TO_FINISH || self.challenger_index >= TEAM_SIZE {
            Some(Side::Opponent)
        } else {
            None
        };

        if let Some(side) = winner {
            self.phase = Phase::Ended;
            self.winner = Some(side);
        }

        winner
    }
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn entry(side: Side) -> BattleLogEntry {
        BattleLogEntry {
            challenger: "pikachu".to_string(),
            opponent: "onix".to_string(),
            winner: match side {
                Side::Challenger => "pikachu".to_string(),
                Side::Opponent => "onix".to_string(),
            },
            winner_side: side,
            explanation: String::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_new_session() {
        let session = BattleSession::new();

        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.challenger_index(), 0);
        assert_eq!(session.score(), Score::default());
        assert!(!session.can_exchange());
    }

    #[test]
    fn test_challenger_win_keeps_fighter() {
        let mut session = BattleSession::new();
        session.begin();

        assert_eq!(session.apply(entry(Side::Challenger)), None);
        assert_eq!(session.challenger_index(), 0);
        assert_eq!(session.score().challenger, 1);
    }

    #[test]
    fn test_opponent_win_retires_fighter() {
        let mut session = BattleSession::new();
        session.begin();

        assert_eq!(session.apply(entry(Side::Opponent)), None);
        assert_eq!(session.challenger_index(), 1);
        assert_eq!(session.remaining_fighters(), 5);
        assert_eq!(session.score().opponent, 1);
    }

    #[test]
    fn test_six_challenger_wins_end() {
        let mut session = BattleSession::new();
        session.begin();

        for _ in 0..5 {
            assert_eq!(session.apply(entry(Side::Challenger)), None);
        }
        assert_eq!(session.apply(entry(Side::Challenger)), Some(Side::Challenger));
        assert!(session.is_ended());
        assert!(!session.can_exchange());
        assert_eq!(session.log().len(), 6);
    }

    #[test]
    fn test_roster_exhausted_ends() {
        let mut session = BattleSession::new();
        session.begin();

        for _ in 0..5 {
            session.apply(entry(Side::Challenger));
        }
        for _ in 0..5 {
            assert_eq!(session.apply(entry(Side::Opponent)), None);
        }
        assert_eq!(session.apply(entry(Side::Opponent)), Some(Side::Opponent));
        assert_eq!(session.challenger_index(), TEAM_SIZE);
        assert_eq!(session.score().total(), 11);
        assert_eq!(session.winner(), Some(Side::Opponent));
    }

    #[test]
    fn test_begin_clears_previous_session() {
        let mut session = BattleSession::new();
        session.begin();
        session.apply(entry(Side::Opponent));
        session.begin();

        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.challenger_index(), 0);
        assert!(session.log().is_empty());
        assert!(session.winner().is_none());
    }

    #[test]
    fn test_entry_to_record() {
        let captured_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let record = entry(Side::Opponent).to_record(captured_at);

        assert_eq!(record.player1, "pikachu");
        assert_eq!(record.player2, "onix");
        assert_eq!(record.winner, "onix");
        assert_eq!(record.timestamp, captured_at);
        assert!(record.id.is_none());
    }
}
