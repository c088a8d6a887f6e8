//! Errors raised by the battle engine

use std::fmt;

use pokeduel_protocol::BattleRecord;
use thiserror::Error;

use crate::types::StatName;

/// Which collaborator call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalCall {
    ChallengerTeam,
    RandomOpponent,
    ListHistory,
    SaveRecord,
    ClearHistory,
}

impl fmt::Display for ExternalCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExternalCall::ChallengerTeam => "fetch the challenger team",
            ExternalCall::RandomOpponent => "generate an opponent",
            ExternalCall::ListHistory => "list battle history",
            ExternalCall::SaveRecord => "save a battle record",
            ExternalCall::ClearHistory => "clear battle history",
        };
        f.write_str(s)
    }
}

/// A battle record that could not be written at the end of a battle
#[derive(Debug)]
pub struct FailedWrite {
    pub record: BattleRecord,
    pub error: anyhow::Error,
}

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("You must have {required} Pokemon in your team to battle (found {found})")]
    InsufficientRoster { found: usize, required: usize },

    #[error("Team has {found} Pokemon, only {allowed} can battle")]
    RosterTooLarge { found: usize, allowed: usize },

    #[error("{combatant} has no {stat} stat")]
    MissingStat { combatant: String, stat: StatName },

    #[error("Stat {0} given more than once")]
    DuplicateStat(StatName),

    #[error("Failed to {call}: {source:#}")]
    ExternalFetch {
        call: ExternalCall,
        #[source]
        source: anyhow::Error,
    },

    #[error("{} of {attempted} battle records failed to save", .failed.len())]
    Persistence {
        attempted: usize,
        failed: Vec<FailedWrite>,
    },
}

impl BattleError {
    pub(crate) fn external(call: ExternalCall, source: anyhow::Error) -> Self {
        BattleError::ExternalFetch { call, source }
    }
}
