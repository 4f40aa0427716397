//! Storage for memoized position values and per-player strategy tables.
//!
//! Every table lives inside a [`SolveStorage`] owned by a solver instance
//! and threaded through the recursion by exclusive reference. Independent
//! solves therefore never share or contaminate each other's state, and the
//! single-threaded evaluation needs no locking.

use rustc_hash::FxHashMap;

use crate::minimax::game::Player;

/// Memoized evaluation of one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoEntry {
    /// Backward-induction value of the position for the maximizing player.
    pub value: i8,
    /// Index of the optimal action, `None` at terminal positions.
    pub best_action: Option<usize>,
}

/// Tables accumulated during a solve.
///
/// - **Memo table**: canonical position key -> [`MemoEntry`]. Once written,
///   an entry is the true backward-induction value for every move order
///   that reaches that position.
/// - **Strategy tables**: one per player, history key -> chosen action
///   index. Storing the index directly makes the "exactly one action gets
///   full weight" invariant structural; the dense weight distribution is
///   materialized only at the persistence boundary.
#[derive(Debug, Clone, Default)]
pub struct SolveStorage {
    /// Position values: canonical key -> (value, optimal action).
    memo: FxHashMap<String, MemoEntry>,

    /// Deterministic choices: history key -> action index, per player.
    strategies: [FxHashMap<String, usize>; Player::COUNT],
}

impl SolveStorage {
    /// Create new empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with pre-allocated memo capacity.
    ///
    /// Use this when the number of distinct positions is known up front to
    /// avoid reallocations during the solve.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            memo: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            strategies: Default::default(),
        }
    }

    /// Look up the memoized entry for a position key.
    pub fn position(&self, key: &str) -> Option<MemoEntry> {
        self.memo.get(key).copied()
    }

    /// Store the evaluated entry for a position key.
    pub fn insert_position(&mut self, key: String, entry: MemoEntry) {
        self.memo.insert(key, entry);
    }

    /// Record the deterministic choice for a player at a history key.
    ///
    /// Idempotent: a revisit of the same history overwrites the entry with
    /// the same action, since the action comes from the shared memo entry.
    pub fn record_choice(&mut self, player: Player, history_key: &str, action: usize) {
        self.strategies[player.index()].insert(history_key.to_string(), action);
    }

    /// The completed strategy table for a player.
    pub fn strategy(&self, player: Player) -> &FxHashMap<String, usize> {
        &self.strategies[player.index()]
    }

    /// The action a player's strategy chooses at a history key, if recorded.
    pub fn chosen_action(&self, player: Player, history_key: &str) -> Option<usize> {
        self.strategies[player.index()].get(history_key).copied()
    }

    /// Number of distinct positions evaluated.
    pub fn num_positions(&self) -> usize {
        self.memo.len()
    }

    /// Number of history keys recorded for a player.
    pub fn num_choices(&self, player: Player) -> usize {
        self.strategies[player.index()].len()
    }

    /// Iterate over all memoized entries (for analysis and tests).
    pub fn positions(&self) -> impl Iterator<Item = (&String, &MemoEntry)> {
        self.memo.iter()
    }

    /// Clear all stored data.
    pub fn clear(&mut self) {
        self.memo.clear();
        for table in &mut self.strategies {
            table.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_round_trip() {
        let mut storage = SolveStorage::new();
        let entry = MemoEntry {
            value: 1,
            best_action: Some(4),
        };

        assert!(storage.position("x0000000o").is_none());
        storage.insert_position("x0000000o".to_string(), entry);
        assert_eq!(storage.position("x0000000o"), Some(entry));
        assert_eq!(storage.num_positions(), 1);
    }

    #[test]
    fn test_record_choice_is_idempotent() {
        let mut storage = SolveStorage::new();

        storage.record_choice(Player::Max, "04", 8);
        storage.record_choice(Player::Max, "04", 8);
        assert_eq!(storage.chosen_action(Player::Max, "04"), Some(8));
        assert_eq!(storage.num_choices(Player::Max), 1);

        // Tables are per player.
        assert_eq!(storage.num_choices(Player::Min), 0);
        assert!(storage.chosen_action(Player::Min, "04").is_none());
    }

    #[test]
    fn test_clear() {
        let mut storage = SolveStorage::new();
        storage.insert_position(
            "000000000".to_string(),
            MemoEntry {
                value: 0,
                best_action: Some(0),
            },
        );
        storage.record_choice(Player::Min, "0", 4);

        storage.clear();
        assert_eq!(storage.num_positions(), 0);
        assert_eq!(storage.num_choices(Player::Min), 0);
    }
}
