//! Arena - drives one battle session against generated opponents

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use chrono::Utc;
use futures_util::future::join_all;
use pokeduel_protocol::BattleRecord;

use super::state::{BattleLogEntry, BattleSession, Phase, Score, Side};
use crate::compare::{ExchangeResult, Position, TieBreak, compare_with};
use crate::error::{BattleError, ExternalCall, FailedWrite};
use crate::source::{HistoryStore, OpponentGenerator, RosterSource};
use crate::types::{Combatant, Team};

#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Upper bound on any single collaborator call
    pub call_timeout: Duration,
    pub tie_break: TieBreak,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            call_timeout: Duration::from_secs(10),
            tie_break: TieBreak::default(),
        }
    }
}

/// What happened in one exchange
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    pub entry: BattleLogEntry,
    pub result: ExchangeResult,
    /// Score after this exchange
    pub score: Score,
    /// Set when this exchange ended the battle
    pub finished: Option<Side>,
}

/// Battle orchestrator
///
/// Owns the session, the challenger team, the staged opponent and the
/// local history view. Every operation takes `&mut self`, so exchanges
/// cannot overlap.
pub struct Arena {
    roster: Arc<dyn RosterSource>,
    opponents: Arc<dyn OpponentGenerator>,
    store: Arc<dyn HistoryStore>,
    config: ArenaConfig,

    team: Option<Team>,
    /// Opponent for the next exchange
    opponent: Option<Combatant>,
    session: BattleSession,
    /// Stored battle records, most recent first
    history: Vec<BattleRecord>,
}

impl Arena {
    pub fn new(
        roster: Arc<dyn RosterSource>,
        opponents: Arc<dyn OpponentGenerator>,
        store: Arc<dyn HistoryStore>,
        config: ArenaConfig,
    ) -> Self {
        Self {
            roster,
            opponents,
            store,
            config,
            team: None,
            opponent: None,
            session: BattleSession::new(),
            history: Vec::new(),
        }
    }

    /// Fetch the team and a first opponent, then begin a fresh session
    ///
    /// Nothing changes if either fetch fails, the team is not exactly six
    /// strong, or a member lacks one of the decisive stats.
    pub async fn start(&mut self) -> Result<(), BattleError> {
        let members = self
            .call(ExternalCall::ChallengerTeam, self.roster.challenger_team())
            .await?;
        let team = Team::new(members)?;
        let opponent = self
            .call(ExternalCall::RandomOpponent, self.opponents.random_opponent())
            .await?;

        tracing::info!(
            team = ?team.iter().map(Combatant::name).collect::<Vec<_>>(),
            opponent = opponent.name(),
            "Battle started"
        );

        self.team = Some(team);
        self.opponent = Some(opponent);
        self.session.begin();
        Ok(())
    }

    /// Run one exchange between the active challenger fighter and the
    /// staged opponent
    ///
    /// Returns `Ok(None)` without doing anything when no exchange can run
    /// (not started, or already ended). A failed opponent fetch or a
    /// missing stat leaves the score untouched.
    ///
    /// If the exchange ends the battle, the whole log is written to the
    /// history store. Failed writes come back as
    /// [`BattleError::Persistence`]; the session itself has still ended.
    pub async fn next_exchange(&mut self) -> Result<Option<ExchangeOutcome>, BattleError> {
        if !self.session.can_exchange() {
            tracing::debug!(phase = ?self.session.phase(), "No exchange to run");
            return Ok(None);
        }

        let index = self.session.challenger_index();
        let Some(challenger) = self.team.as_ref().and_then(|t| t.get(index)).cloned() else {
            return Ok(None);
        };

        let opponent = match self.opponent.take() {
            Some(opponent) => opponent,
            None => {
                self.call(ExternalCall::RandomOpponent, self.opponents.random_opponent())
                    .await?
            }
        };

        let result = match compare_with(&challenger, &opponent, self.config.tie_break) {
            Ok(result) => result,
            Err(err) => {
                // An opponent that cannot be scored is dropped so the next
                // exchange draws another
                if opponent.is_scorable() {
                    self.opponent = Some(opponent);
                }
                return Err(err);
            }
        };

        let winner_side = match result.winner {
            Position::First => Side::Challenger,
            Position::Second => Side::Opponent,
        };
        let entry = BattleLogEntry {
            challenger: challenger.name().to_string(),
            opponent: opponent.name().to_string(),
            winner: result.winner_name.clone(),
            winner_side,
            explanation: result.explanation.clone(),
            timestamp: Utc::now(),
        };

        tracing::debug!(
            challenger = %entry.challenger,
            opponent = %entry.opponent,
            winner = %entry.winner,
            tie_broken = result.tie_broken,
            "Exchange resolved"
        );

        let finished = self.session.apply(entry.clone());
        let outcome = ExchangeOutcome {
            entry,
            result,
            score: self.session.score(),
            finished,
        };

        match finished {
            Some(side) => {
                tracing::info!(
                    winner = side.as_str(),
                    challenger_wins = outcome.score.challenger,
                    opponent_wins = outcome.score.opponent,
                    "Battle ended"
                );
                self.persist_log().await?;
            }
            None => self.stage_opponent().await,
        }

        Ok(Some(outcome))
    }

    /// Throw away the current session and start a new one
    ///
    /// On failure the arena is left not started, with no team or opponent.
    pub async fn reset(&mut self) -> Result<(), BattleError> {
        self.session = BattleSession::new();
        self.team = None;
        self.opponent = None;
        self.start().await
    }

    /// Replace the local history view with the store's contents
    pub async fn load_history(&mut self) -> Result<&[BattleRecord], BattleError> {
        let mut records = self
            .call(ExternalCall::ListHistory, self.store.list_battle_records())
            .await?;
        records.reverse();
        self.history = records;
        Ok(self.history.as_slice())
    }

    /// Delete every stored battle record and empty the local view
    ///
    /// Does not touch the running session. On failure the local view is
    /// left as it was, even though the store may be partly cleared;
    /// [`Arena::load_history`] brings it back in line.
    pub async fn clear_history(&mut self) -> Result<(), BattleError> {
        self.call(ExternalCall::ClearHistory, self.store.delete_all_battle_records())
            .await?;
        self.history.clear();
        tracing::info!("Battle history cleared");
        Ok(())
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn score(&self) -> Score {
        self.session.score()
    }

    pub fn log(&self) -> &[BattleLogEntry] {
        self.session.log()
    }

    /// Stored records, most recent first
    pub fn history(&self) -> &[BattleRecord] {
        &self.history
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    /// The challenger's active fighter
    pub fn current_challenger(&self) -> Option<&Combatant> {
        if !self.session.can_exchange() {
            return None;
        }
        self.team.as_ref()?.get(self.session.challenger_index())
    }

    /// The opponent waiting for the next exchange
    pub fn staged_opponent(&self) -> Option<&Combatant> {
        self.opponent.as_ref()
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Draw the opponent for the next exchange. A failure is only logged:
    /// the next exchange fetches one itself.
    async fn stage_opponent(&mut self) {
        let staged = self
            .call(ExternalCall::RandomOpponent, self.opponents.random_opponent())
            .await;
        match staged {
            Ok(opponent) => self.opponent = Some(opponent),
            Err(e) => tracing::warn!(error = %e, "Could not stage next opponent"),
        }
    }

    /// Write every log entry to the store, concurrently
    async fn persist_log(&mut self) -> Result<(), BattleError> {
        let captured_at = Utc::now();
        let records: Vec<BattleRecord> = self
            .session
            .log()
            .iter()
            .map(|entry| entry.to_record(captured_at))
            .collect();
        let attempted = records.len();

        let limit = self.config.call_timeout;
        let results = join_all(
            records
                .iter()
                .map(|record| timed(limit, self.store.append_battle_record(record))),
        )
        .await;

        let mut saved = Vec::with_capacity(attempted);
        let mut failed = Vec::new();
        for (record, result) in records.into_iter().zip(results) {
            match result {
                Ok(stored) => saved.push(stored),
                Err(error) => {
                    tracing::warn!(
                        player1 = %record.player1,
                        player2 = %record.player2,
                        error = %error,
                        "Failed to save battle record"
                    );
                    failed.push(FailedWrite { record, error });
                }
            }
        }

        // Newest exchange ends up first
        saved.reverse();
        self.history.splice(0..0, saved);

        if failed.is_empty() {
            tracing::debug!(records = attempted, "Battle log saved");
            Ok(())
        } else {
            Err(BattleError::Persistence { attempted, failed })
        }
    }

    async fn call<T>(
        &self,
        call: ExternalCall,
        fut: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T, BattleError> {
        timed(self.config.call_timeout, fut)
            .await
            .map_err(|source| BattleError::external(call, source))
    }
}

async fn timed<T>(
    limit: Duration,
    fut: impl Future<Output = anyhow::Result<T>>,
) -> anyhow::Result<T> {
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| anyhow!("timed out after {:?}", limit))?
}
