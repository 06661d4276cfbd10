//! Enemy ranking by share of wins.

use super::filter::filter_by_class;
use super::rank::{percent, top_n, Tally};
use crate::parser::Record;
use crate::utils::config::ENEMY_PREFIX;
use crate::utils::naming::display_name;
use log::debug;
use serde::{Deserialize, Serialize};

/// Wins recorded against one enemy class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyWinRate {
    pub key: String,

    /// Lower-cased display name, also used to look up the enemy image
    pub name: String,

    pub wins: u64,

    /// Share of all wins (not wins over encounters), rounded percent
    pub win_rate: u32,
}

/// Enemies ranked by their share of the player's wins
///
/// **Public** - the denominator is the total number of wins in the
/// filtered set, since losses are not tracked per enemy.
///
/// Winning records without an `enemyClass` still count toward the total
/// but get no entry of their own.
pub fn top_enemies(records: &[Record], selected_class: &str, n: usize) -> Vec<EnemyWinRate> {
    let mut wins: Tally<u64> = Tally::new();
    let mut total_wins = 0u64;

    for record in filter_by_class(records, selected_class) {
        if !record.is_win() {
            continue;
        }
        total_wins += 1;
        if let Some(enemy) = record.enemy_class.as_deref() {
            *wins.entry(enemy) += 1;
        }
    }

    debug!("{} wins against {} enemy classes", total_wins, wins.len());

    let rates = wins
        .into_entries()
        .into_iter()
        .map(|(key, count)| EnemyWinRate {
            name: display_name(&key, ENEMY_PREFIX).to_lowercase(),
            key,
            wins: count,
            win_rate: percent(count, total_wins),
        })
        .collect();

    // Ranked by the rounded rate, so near-equal shares keep dataset order
    top_n(rates, n, |enemy: &EnemyWinRate| enemy.win_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encounter(enemy: Option<&str>, winner: &str) -> Record {
        Record {
            enemy_class: enemy.map(str::to_string),
            winner_index: Some(winner.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_losses_are_ignored() {
        let records = vec![
            encounter(Some("enemy_slime"), "2"),
            encounter(Some("enemy_bat"), "1"),
        ];
        let top = top_enemies(&records, "all", 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].key, "enemy_slime");
        assert_eq!(top[0].win_rate, 100);
    }

    #[test]
    fn test_display_name_is_lowercased() {
        let records = vec![encounter(Some("enemy_Stone_Golem"), "2")];
        let top = top_enemies(&records, "all", 5);
        assert_eq!(top[0].name, "stone golem");
    }

    #[test]
    fn test_win_without_enemy_counts_toward_total() {
        let records = vec![
            encounter(None, "2"),
            encounter(Some("enemy_slime"), "2"),
        ];
        let top = top_enemies(&records, "all", 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].wins, 1);
        assert_eq!(top[0].win_rate, 50);
    }

    #[test]
    fn test_no_wins_is_empty() {
        let records = vec![encounter(Some("enemy_slime"), "1")];
        assert!(top_enemies(&records, "all", 5).is_empty());
    }
}
