//! Persisted per-player policy tables.
//!
//! A policy table is the external contract of a solve: one JSON object per
//! player mapping every reachable history key (concatenated move digits,
//! `""` for the root) to a distribution over the nine action labels
//! `"0"`-`"8"`, with weight 1 on the chosen action and 0 elsewhere.
//! Consumers look up the history they have reached and play the action
//! carrying full weight.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::minimax::game::{Action, Game, Player};
use crate::minimax::solver::MinimaxSolver;

use super::{Cell, TicTacToe};

/// Weight per action label; exactly one entry carries weight 1.
pub type ActionWeights = BTreeMap<String, u8>;

/// A complete deterministic policy for one player.
///
/// Ordered maps keep serialization deterministic: two identical solves
/// produce byte-identical files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable {
    entries: BTreeMap<String, ActionWeights>,
}

impl PolicyTable {
    /// Extract one player's policy from a finished solve.
    ///
    /// The solver stores the chosen action index per history; this expands
    /// each choice into the dense nine-label distribution of the persisted
    /// format.
    pub fn from_solver(solver: &MinimaxSolver<TicTacToe>, player: Player) -> Self {
        let num_actions = solver.game().num_actions();
        let mut entries = BTreeMap::new();

        for (history_key, &action) in solver.strategy(player) {
            let mut weights: ActionWeights = (0..num_actions)
                .map(|i| (Cell(i as u8).label(), 0))
                .collect();
            weights.insert(Cell(action as u8).label(), 1);
            entries.insert(history_key.clone(), weights);
        }

        Self { entries }
    }

    /// Number of history keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The weight distribution recorded at a history key.
    pub fn weights(&self, history_key: &str) -> Option<&ActionWeights> {
        self.entries.get(history_key)
    }

    /// The action carrying weight 1 at a history key.
    pub fn chosen(&self, history_key: &str) -> Option<usize> {
        self.entries
            .get(history_key)?
            .iter()
            .find(|(_, &weight)| weight == 1)
            .and_then(|(label, _)| label.parse().ok())
    }

    /// Iterate over (history key, weights) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ActionWeights)> {
        self.entries.iter()
    }

    /// Save to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }

    /// Load from JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved() -> MinimaxSolver<TicTacToe> {
        let mut solver = MinimaxSolver::new(TicTacToe::new());
        solver.solve();
        solver
    }

    #[test]
    fn test_root_entry_has_full_weight_on_opening() {
        let table = PolicyTable::from_solver(&solved(), Player::Max);
        let weights = table.weights("").unwrap();

        assert_eq!(weights.len(), 9);
        assert_eq!(weights["0"], 1);
        let total: u32 = weights.values().map(|&w| w as u32).sum();
        assert_eq!(total, 1);
        assert_eq!(table.chosen(""), Some(0));
    }

    #[test]
    fn test_every_entry_has_exactly_one_choice() {
        let solver = solved();
        for player in [Player::Max, Player::Min] {
            let table = PolicyTable::from_solver(&solver, player);
            assert!(!table.is_empty());
            for (_, weights) in table.iter() {
                assert_eq!(weights.len(), 9);
                let total: u32 = weights.values().map(|&w| w as u32).sum();
                assert_eq!(total, 1);
            }
        }
    }

    #[test]
    fn test_tables_cover_players_disjoint_histories() {
        let solver = solved();
        let x_table = PolicyTable::from_solver(&solver, Player::Max);
        let o_table = PolicyTable::from_solver(&solver, Player::Min);

        // x moves at even-length histories, o at odd-length ones.
        assert!(x_table.iter().all(|(key, _)| key.len() % 2 == 0));
        assert!(o_table.iter().all(|(key, _)| key.len() % 2 == 1));
        assert_eq!(o_table.chosen("0"), Some(4));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let first = PolicyTable::from_solver(&solved(), Player::Max);
        let second = PolicyTable::from_solver(&solved(), Player::Max);

        assert_eq!(first, second);
        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);

        let parsed: PolicyTable = serde_json::from_str(&first_json).unwrap();
        assert_eq!(parsed, first);
    }

    #[test]
    fn test_save_and_load() {
        let table = PolicyTable::from_solver(&solved(), Player::Min);
        let path = std::env::temp_dir().join("retrograde_solver_policy_o_test.json");

        table.save_json(&path).unwrap();
        let loaded = PolicyTable::load_json(&path).unwrap();
        assert_eq!(loaded, table);

        std::fs::remove_file(&path).ok();
    }
}
