//! Stat names and base stat blocks

use std::collections::BTreeMap;
use std::fmt;

use crate::error::BattleError;

/// A base stat, named the way PokeAPI names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatName {
    /// PokeAPI's response order
    pub const ALL: [StatName; 6] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    /// Stats that decide an exchange. Defense is shown but never scored.
    pub const DECISIVE: [StatName; 3] = [StatName::Hp, StatName::Attack, StatName::Speed];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(StatName::Hp),
            "attack" => Some(StatName::Attack),
            "defense" => Some(StatName::Defense),
            "special-attack" => Some(StatName::SpecialAttack),
            "special-defense" => Some(StatName::SpecialDefense),
            "speed" => Some(StatName::Speed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
        }
    }

    /// Short label used in battle explanations
    pub fn label(&self) -> &'static str {
        match self {
            StatName::Hp => "HP",
            StatName::Attack => "ATK",
            StatName::Defense => "DEF",
            StatName::SpecialAttack => "SPA",
            StatName::SpecialDefense => "SPD",
            StatName::Speed => "SPE",
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base stats keyed by name
///
/// Stats are never looked up by position, so a reordered source payload
/// cannot swap e.g. defense and speed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseStats {
    values: BTreeMap<StatName, u32>,
}

impl BaseStats {
    /// Build from `(name, value)` pairs, rejecting a stat given twice
    pub fn from_pairs<I>(pairs: I) -> Result<Self, BattleError>
    where
        I: IntoIterator<Item = (StatName, u32)>,
    {
        let mut values = BTreeMap::new();
        for (stat, value) in pairs {
            if values.insert(stat, value).is_some() {
                return Err(BattleError::DuplicateStat(stat));
            }
        }
        Ok(Self { values })
    }

    /// Build from values in PokeAPI order (hp, attack, defense,
    /// special-attack, special-defense, speed)
    ///
    /// Short slices leave the trailing stats unset; extra values are ignored.
    pub fn from_positional(values: &[u32]) -> Self {
        Self {
            values: StatName::ALL.iter().copied().zip(values.iter().copied()).collect(),
        }
    }

    pub fn get(&self, stat: StatName) -> Option<u32> {
        self.values.get(&stat).copied()
    }

    pub fn contains(&self, stat: StatName) -> bool {
        self.values.contains_key(&stat)
    }

    /// Total of all known base stats
    pub fn total(&self) -> u32 {
        self.values.values().sum()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatName, u32)> + '_ {
        self.values.iter().map(|(stat, value)| (*stat, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_as_str() {
        for stat in StatName::ALL {
            assert_eq!(StatName::parse(stat.as_str()), Some(stat));
        }
        assert_eq!(StatName::parse("special"), None);
        assert_eq!(StatName::parse("HP"), None);
    }

    #[test]
    fn test_from_pairs() {
        let stats = BaseStats::from_pairs([(StatName::Speed, 90), (StatName::Hp, 35)]).unwrap();

        assert_eq!(stats.get(StatName::Hp), Some(35));
        assert_eq!(stats.get(StatName::Speed), Some(90));
        assert_eq!(stats.get(StatName::Attack), None);
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_from_pairs_rejects_duplicates() {
        let result = BaseStats::from_pairs([(StatName::Hp, 35), (StatName::Hp, 40)]);

        assert!(matches!(
            result,
            Err(BattleError::DuplicateStat(StatName::Hp))
        ));
    }

    #[test]
    fn test_from_positional() {
        let stats = BaseStats::from_positional(&[35, 55, 40, 50, 50, 90]);

        assert_eq!(stats.get(StatName::Hp), Some(35));
        assert_eq!(stats.get(StatName::Defense), Some(40));
        assert_eq!(stats.get(StatName::Speed), Some(90));
        assert_eq!(stats.total(), 320);
    }

    #[test]
    fn test_from_positional_short() {
        let stats = BaseStats::from_positional(&[35, 55, 40]);

        assert!(stats.contains(StatName::Defense));
        assert!(!stats.contains(StatName::Speed));
    }
}
