//! The challenger's battle team

use super::combatant::Combatant;
use crate::error::BattleError;

/// Number of Pokemon a team fights with
pub const TEAM_SIZE: usize = 6;

/// Exactly [`TEAM_SIZE`] combatants, in fighting order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    members: Vec<Combatant>,
}

impl Team {
    /// Every member must carry hp, attack and speed, otherwise no exchange
    /// involving it could ever be scored
    pub fn new(members: Vec<Combatant>) -> Result<Self, BattleError> {
        if members.len() < TEAM_SIZE {
            return Err(BattleError::InsufficientRoster {
                found: members.len(),
                required: TEAM_SIZE,
            });
        }
        if members.len() > TEAM_SIZE {
            return Err(BattleError::RosterTooLarge {
                found: members.len(),
                allowed: TEAM_SIZE,
            });
        }
        for member in &members {
            member.check_decisive()?;
        }
        Ok(Self { members })
    }

    /// Get the fighter at a position (0-indexed)
    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
