//! Team-building rules for pokeduel.
//!
//! The player picks up to six Pokemon, each at most once. A team can battle
//! only when it is full.

use pokeduel_protocol::{RecordId, TeamMember};
use thiserror::Error;

/// Largest team the store will accept
pub const MAX_TEAM_SIZE: usize = 6;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TeamError {
    #[error("Team is full (max {} Pokemon)", MAX_TEAM_SIZE)]
    Full,

    #[error("{0} is already in your team")]
    AlreadyInTeam(String),

    #[error("No team member with id {0}")]
    NotFound(RecordId),
}

/// The player's stored team, in the order members were added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<TeamMember>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap members as loaded from the store
    ///
    /// No checks are made here: a store edited by hand may hold more than
    /// six members or duplicates, and the player still needs to see (and
    /// remove) them.
    pub fn from_members(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    /// Check whether a Pokemon may join
    pub fn check_add(&self, name: &str) -> Result<(), TeamError> {
        if self.is_full() {
            return Err(TeamError::Full);
        }
        if self.contains(name) {
            return Err(TeamError::AlreadyInTeam(name.to_string()));
        }
        Ok(())
    }

    /// Add a member after [`Roster::check_add`]
    pub fn push(&mut self, member: TeamMember) -> Result<(), TeamError> {
        self.check_add(&member.name)?;
        self.members.push(member);
        Ok(())
    }

    /// Remove the member with a given store id
    pub fn remove(&mut self, id: &RecordId) -> Result<TeamMember, TeamError> {
        let index = self
            .members
            .iter()
            .position(|m| m.id.as_ref() == Some(id))
            .ok_or_else(|| TeamError::NotFound(id.clone()))?;
        Ok(self.members.remove(index))
    }

    /// Whether a Pokemon of this name is on the team (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.members
            .iter()
            .any(|m| m.name.eq_ignore_ascii_case(name))
    }

    pub fn get(&self, name: &str) -> Option<&TeamMember> {
        self.members
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn into_members(self) -> Vec<TeamMember> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }

    /// Ready to battle: exactly six members
    pub fn is_ready(&self) -> bool {
        self.members.len() == MAX_TEAM_SIZE
    }

    pub fn remaining_slots(&self) -> usize {
        MAX_TEAM_SIZE.saturating_sub(self.members.len())
    }
}
