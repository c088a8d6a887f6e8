//! Exchange scoring - majority of hp, attack and speed decides

use std::cmp::Ordering;

use crate::error::BattleError;
use crate::types::{Combatant, StatName};

/// Argument position of a combatant in [`compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Second,
}

/// Who wins an exchange in which neither side reaches two points
///
/// That happens only when at least two of the decisive stats are tied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    First,
    /// The second argument takes it: a challenger passed first has to
    /// earn a majority to win
    #[default]
    Second,
}

impl From<TieBreak> for Position {
    fn from(tie_break: TieBreak) -> Self {
        match tie_break {
            TieBreak::First => Position::First,
            TieBreak::Second => Position::Second,
        }
    }
}

/// Outcome of one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResult {
    pub winner: Position,
    pub winner_name: String,
    /// Decisive stats won by the first argument
    pub first_points: u8,
    /// Decisive stats won by the second argument
    pub second_points: u8,
    /// Whether [`TieBreak`] decided instead of a majority
    pub tie_broken: bool,
    pub explanation: String,
}

/// Compare two combatants with the default [`TieBreak`]
pub fn compare(a: &Combatant, b: &Combatant) -> Result<ExchangeResult, BattleError> {
    compare_with(a, b, TieBreak::default())
}

/// Compare two combatants on hp, attack and speed
pub fn compare_with(
    a: &Combatant,
    b: &Combatant,
    tie_break: TieBreak,
) -> Result<ExchangeResult, BattleError> {
    let mut first_points = 0u8;
    let mut second_points = 0u8;

    for stat in StatName::DECISIVE {
        let ours = a.require(stat)?;
        let theirs = b.require(stat)?;

        match ours.cmp(&theirs) {
            Ordering::Greater => first_points += 1,
            Ordering::Less => second_points += 1,
            Ordering::Equal => {}
        }
    }

    let (winner, tie_broken) = if first_points >= 2 {
        (Position::First, false)
    } else if second_points >= 2 {
        (Position::Second, false)
    } else {
        (Position::from(tie_break), true)
    };

    let winner_name = match winner {
        Position::First => a.name(),
        Position::Second => b.name(),
    }
    .to_string();

    let mut explanation = format!(
        "{} vs {} - Winner: {}",
        stat_line(a),
        stat_line(b),
        winner_name
    );
    if tie_broken {
        explanation.push_str(" (no majority, decided by tie-break)");
    }

    Ok(ExchangeResult {
        winner,
        winner_name,
        first_points,
        second_points,
        tie_broken,
        explanation,
    })
}

/// `name (HP: 35, ATK: 55, DEF: 40, SPE: 90)`
fn stat_line(combatant: &Combatant) -> String {
    let shown = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::Speed,
    ]
    .iter()
    .map(|stat| match combatant.stat(*stat) {
        Some(value) => format!("{}: {}", stat.label(), value),
        None => format!("{}: ?", stat.label()),
    })
    .collect::<Vec<_>>()
    .join(", ");

    format!("{} ({})", combatant.name(), shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseStats;

    fn mon(name: &str, hp: u32, atk: u32, spe: u32) -> Combatant {
        mon_with_def(name, hp, atk, 50, spe)
    }

    fn mon_with_def(name: &str, hp: u32, atk: u32, def: u32, spe: u32) -> Combatant {
        Combatant::new(
            name,
            BaseStats::from_pairs([
                (StatName::Hp, hp),
                (StatName::Attack, atk),
                (StatName::Defense, def),
                (StatName::Speed, spe),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_two_of_three_wins() {
        let first = mon("first", 100, 80, 90);
        let second = mon("second", 50, 120, 60);

        let result = compare(&first, &second).unwrap();
        assert_eq!(result.winner, Position::First);
        assert_eq!(result.winner_name, "first");
        assert_eq!((result.first_points, result.second_points), (2, 1));
        assert!(!result.tie_broken);
    }

    #[test]
    fn test_sweep() {
        let result = compare(&mon("a", 10, 10, 10), &mon("b", 20, 20, 20)).unwrap();

        assert_eq!(result.winner_name, "b");
        assert_eq!((result.first_points, result.second_points), (0, 3));
    }

    #[test]
    fn test_tied_stat_awards_nothing() {
        // hp tied, a takes attack and speed
        let result = compare(&mon("a", 60, 90, 90), &mon("b", 60, 10, 10)).unwrap();

        assert_eq!(result.winner_name, "a");
        assert_eq!((result.first_points, result.second_points), (2, 0));
        assert!(!result.tie_broken);
    }

    #[test]
    fn test_full_tie_uses_tie_break() {
        let a = mon("a", 50, 50, 50);
        let b = mon("b", 50, 50, 50);

        let result = compare(&a, &b).unwrap();
        assert_eq!((result.first_points, result.second_points), (0, 0));
        assert!(result.tie_broken);
        assert_eq!(result.winner, Position::Second);
        assert_eq!(result.winner_name, "b");
        assert!(result.explanation.ends_with("(no majority, decided by tie-break)"));

        let result = compare_with(&a, &b, TieBreak::First).unwrap();
        assert_eq!(result.winner_name, "a");
        assert!(result.tie_broken);
    }

    #[test]
    fn test_one_all_with_tie_uses_tie_break() {
        // hp tied, a takes attack, b takes speed
        let result = compare(&mon("a", 50, 90, 10), &mon("b", 50, 10, 90)).unwrap();

        assert_eq!((result.first_points, result.second_points), (1, 1));
        assert!(result.tie_broken);
        assert_eq!(result.winner_name, "b");
    }

    #[test]
    fn test_defense_does_not_decide() {
        let a = mon_with_def("a", 100, 80, 5, 90);
        let walls = [
            mon_with_def("b", 50, 120, 5, 60),
            mon_with_def("b", 50, 120, 250, 60),
        ];

        for b in &walls {
            let result = compare(&a, b).unwrap();
            assert_eq!(result.winner_name, "a");
        }
    }

    #[test]
    fn test_explanation_shows_defense() {
        let a = mon_with_def("pikachu", 35, 55, 40, 90);
        let b = mon_with_def("onix", 35, 45, 160, 70);

        let result = compare(&a, &b).unwrap();
        assert_eq!(
            result.explanation,
            "pikachu (HP: 35, ATK: 55, DEF: 40, SPE: 90) vs \
             onix (HP: 35, ATK: 45, DEF: 160, SPE: 70) - Winner: pikachu"
        );
    }

    #[test]
    fn test_explanation_without_defense() {
        let a = Combatant::new(
            "a",
            BaseStats::from_pairs([
                (StatName::Hp, 1),
                (StatName::Attack, 1),
                (StatName::Speed, 1),
            ])
            .unwrap(),
        );
        let b = mon("b", 2, 2, 2);

        let result = compare(&a, &b).unwrap();
        assert!(result.explanation.starts_with("a (HP: 1, ATK: 1, DEF: ?, SPE: 1)"));
    }

    #[test]
    fn test_missing_stat() {
        let partial = Combatant::new("ditto", BaseStats::from_positional(&[48, 48, 48]));
        let full = mon("mew", 100, 100, 100);

        for result in [compare(&partial, &full), compare(&full, &partial)] {
            match result {
                Err(BattleError::MissingStat { combatant, stat }) => {
                    assert_eq!(combatant, "ditto");
                    assert_eq!(stat, StatName::Speed);
                }
                other => panic!("expected MissingStat, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_winner_properties_over_small_stat_grid() {
        let values = [1u32, 2, 3];
        let mut mons = Vec::new();
        for hp in values {
            for atk in values {
                for spe in values {
                    mons.push(mon(&format!("{}-{}-{}", hp, atk, spe), hp, atk, spe));
                }
            }
        }

        for a in &mons {
            for b in &mons {
                let forward = compare(a, b).unwrap();
                let backward = compare(b, a).unwrap();

                assert!(forward.winner_name == a.name() || forward.winner_name == b.name());
                assert!(forward.first_points + forward.second_points <= 3);
                assert!(!(forward.first_points >= 2 && forward.second_points >= 2));

                // Same inputs, same answer
                assert_eq!(compare(a, b).unwrap(), forward);

                // A majority does not depend on argument order
                if !forward.tie_broken {
                    assert_eq!(forward.winner_name, backward.winner_name);
                    assert!(!backward.tie_broken);
                }
            }
        }
    }
}
