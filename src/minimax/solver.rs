//! Exhaustive backward-induction (retrograde minimax) solver.
//!
//! The solver walks the full game tree from the initial state, evaluates
//! terminal payoffs, and propagates optimal values upward. Positions
//! reachable by more than one move order are evaluated once and served
//! from the memo table afterwards; every reachable move order still gets
//! its own strategy-table entry.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::minimax::game::{Action, Game, Player};
use crate::minimax::storage::{MemoEntry, SolveStorage};

/// The main backward-induction solver.
///
/// This struct owns the memo table and both strategy tables for one solve,
/// so independent solves never cross-contaminate.
///
/// # Example
/// ```
/// use retrograde_solver::games::tictactoe::TicTacToe;
/// use retrograde_solver::minimax::MinimaxSolver;
///
/// let mut solver = MinimaxSolver::new(TicTacToe::new());
/// assert_eq!(solver.solve(), 0);
/// ```
pub struct MinimaxSolver<G: Game> {
    /// The game being solved.
    game: G,

    /// Memo table and per-player strategy tables.
    storage: SolveStorage,

    /// Statistics from the last solve.
    stats: SolveStats,
}

impl<G: Game> MinimaxSolver<G> {
    /// Create a new solver for the given game.
    pub fn new(game: G) -> Self {
        Self {
            game,
            storage: SolveStorage::new(),
            stats: SolveStats::new(),
        }
    }

    /// Create a solver with pre-allocated memo capacity.
    pub fn with_capacity(game: G, capacity: usize) -> Self {
        Self {
            game,
            storage: SolveStorage::with_capacity(capacity),
            stats: SolveStats::new(),
        }
    }

    /// Solve the game from its initial state.
    ///
    /// Returns the value of the game under optimal play by both sides and,
    /// as a side effect, fills the per-player strategy tables with the
    /// deterministic optimal action for every reachable history.
    pub fn solve(&mut self) -> i8 {
        let start = Instant::now();
        let root = self.game.initial_state();
        let value = self.evaluate(&root);

        self.stats.positions = self.storage.num_positions();
        self.stats.elapsed_seconds = start.elapsed().as_secs_f64();
        self.stats.root_value = Some(value);
        value
    }

    /// Recursive backward-induction evaluation of one state.
    ///
    /// Depth is bounded by the number of actions in the game (nine for
    /// tic-tac-toe), so plain recursion is safe.
    fn evaluate(&mut self, state: &G::State) -> i8 {
        let position_key = self.game.position_key(state);

        if let Some(entry) = self.storage.position(&position_key) {
            self.stats.cache_hits += 1;
            // A cached decision belongs to every move order that reaches
            // this position, not just the first one visited: register the
            // choice under this order's history key too.
            if let (Some(action), Some(player)) =
                (entry.best_action, self.game.current_player(state))
            {
                let history_key = self.game.history_key(state);
                self.storage.record_choice(player, &history_key, action);
            }
            return entry.value;
        }

        if self.game.is_terminal(state) {
            let value = self.game.utility(state);
            self.stats.terminal_positions += 1;
            self.storage.insert_position(
                position_key,
                MemoEntry {
                    value,
                    best_action: None,
                },
            );
            return value;
        }

        let player = match self.game.current_player(state) {
            Some(p) => p,
            // Non-terminal with nobody to move: score it as it stands.
            None => {
                let value = self.game.utility(state);
                self.storage.insert_position(
                    position_key,
                    MemoEntry {
                        value,
                        best_action: None,
                    },
                );
                return value;
            }
        };

        let mut best_value = match player {
            Player::Max => i8::MIN,
            Player::Min => i8::MAX,
        };
        let mut best_action: Option<usize> = None;

        for action in self.game.available_actions(state) {
            let child = self.game.apply_action(state, &action);
            let value = self.evaluate(&child);

            let improves = match player {
                Player::Max => value > best_value,
                Player::Min => value < best_value,
            };
            // Strict inequality: the first action reaching the extremum
            // wins, so ties break toward the lowest-indexed optimal action.
            if improves {
                best_value = value;
                best_action = Some(action.index());
            }
        }

        self.storage.insert_position(
            position_key,
            MemoEntry {
                value: best_value,
                best_action,
            },
        );
        if let Some(action) = best_action {
            let history_key = self.game.history_key(state);
            self.storage.record_choice(player, &history_key, action);
        }

        best_value
    }

    /// The completed strategy table for a player.
    ///
    /// Total over every reachable history at which that player moves.
    pub fn strategy(&self, player: Player) -> &rustc_hash::FxHashMap<String, usize> {
        self.storage.strategy(player)
    }

    /// The action a player's strategy chooses at a history key.
    pub fn chosen_action(&self, player: Player, history_key: &str) -> Option<usize> {
        self.storage.chosen_action(player, history_key)
    }

    /// Value of the initial position, if [`solve`](Self::solve) has run.
    pub fn game_value(&self) -> Option<i8> {
        self.stats.root_value
    }

    /// Number of distinct positions evaluated so far.
    pub fn num_positions(&self) -> usize {
        self.storage.num_positions()
    }

    /// Statistics from the last solve.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Get reference to the storage for analysis.
    pub fn storage(&self) -> &SolveStorage {
        &self.storage
    }

    /// Get reference to the game.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Reset the solver to its initial, empty state.
    pub fn reset(&mut self) {
        self.storage.clear();
        self.stats = SolveStats::new();
    }
}

/// Statistics tracked during a solve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveStats {
    /// Number of distinct positions evaluated.
    pub positions: usize,

    /// Number of distinct terminal positions reached.
    pub terminal_positions: usize,

    /// Memo-table hits (states served without re-evaluation).
    pub cache_hits: u64,

    /// Wall-clock time of the solve in seconds.
    pub elapsed_seconds: f64,

    /// Value of the initial position, once solved.
    pub root_value: Option<i8>,
}

impl SolveStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{TicTacToe, TttState};

    fn solved() -> MinimaxSolver<TicTacToe> {
        let mut solver = MinimaxSolver::new(TicTacToe::new());
        solver.solve();
        solver
    }

    #[test]
    fn test_root_value_is_draw() {
        let mut solver = MinimaxSolver::new(TicTacToe::new());
        assert_eq!(solver.solve(), 0);
        assert_eq!(solver.game_value(), Some(0));
    }

    #[test]
    fn test_position_counts() {
        let solver = solved();
        // Distinct legal boards, games stopping at a completed line.
        assert_eq!(solver.num_positions(), 5478);
        assert_eq!(solver.stats().terminal_positions, 958);
        assert!(solver.stats().cache_hits > 0);
    }

    #[test]
    fn test_memo_values_in_range() {
        let solver = solved();
        for (_, entry) in solver.storage().positions() {
            assert!((-1..=1).contains(&entry.value));
        }
    }

    #[test]
    fn test_terminal_entries_carry_no_action() {
        let solver = solved();
        let top_row_win = TttState::from_moves(&[0, 3, 1, 4, 2]).unwrap();
        let entry = solver.storage().position(&top_row_win.board_string()).unwrap();
        assert_eq!(entry.value, 1);
        assert_eq!(entry.best_action, None);
    }

    #[test]
    fn test_opening_move_is_lowest_indexed_corner() {
        // The optimal opening set is {0, 2, 4, 6, 8}; ties break to 0.
        let solver = solved();
        assert_eq!(solver.chosen_action(Player::Max, ""), Some(0));
    }

    #[test]
    fn test_reply_to_corner_is_center() {
        // Every non-center reply to a corner opening loses.
        let solver = solved();
        assert_eq!(solver.chosen_action(Player::Min, "0"), Some(4));
    }

    #[test]
    fn test_corner_center_line_is_drawn() {
        let solver = solved();
        let state = TttState::from_moves(&[0, 4]).unwrap();
        let entry = solver.storage().position(&state.board_string()).unwrap();
        assert_eq!(entry.value, 0);
    }

    #[test]
    fn test_memo_consistency_across_move_orders() {
        // Four move orders produce the board "x0ox0o000". Cache hits
        // truncate the recursion, so orders passing through an
        // already-cached intermediate position are never visited and stay
        // unregistered; every order that is registered must carry the
        // memo's one chosen continuation.
        let solver = solved();
        let orders = ["0235", "0532", "3205", "3502"];

        let choices: Vec<usize> = orders
            .iter()
            .filter_map(|key| solver.chosen_action(Player::Max, key))
            .collect();
        assert!(choices.len() >= 2);
        assert!(choices.iter().all(|&c| c == choices[0]));
    }

    #[test]
    fn test_registered_histories_agree_per_board() {
        // Table-wide: any two registered histories replaying to the same
        // board share one chosen action.
        use rustc_hash::FxHashMap;

        let solver = solved();
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();

        for player in [Player::Max, Player::Min] {
            for (history, &action) in solver.strategy(player) {
                let moves: Vec<u8> = history.bytes().map(|b| b - b'0').collect();
                let board = TttState::from_moves(&moves).unwrap().board_string();
                if let Some(&choice) = seen.get(&board) {
                    assert_eq!(choice, action, "conflicting choices for board {}", board);
                } else {
                    seen.insert(board, action);
                }
            }
        }
    }

    #[test]
    fn test_independent_solves_are_identical() {
        let first = solved();
        let second = solved();

        assert_eq!(first.game_value(), second.game_value());
        assert_eq!(first.strategy(Player::Max), second.strategy(Player::Max));
        assert_eq!(first.strategy(Player::Min), second.strategy(Player::Min));
    }

    #[test]
    fn test_reset_clears_tables() {
        let mut solver = solved();
        solver.reset();
        assert_eq!(solver.num_positions(), 0);
        assert!(solver.strategy(Player::Max).is_empty());
        assert_eq!(solver.game_value(), None);

        // A fresh solve after reset behaves like the first one.
        assert_eq!(solver.solve(), 0);
        assert_eq!(solver.num_positions(), 5478);
    }

    #[test]
    fn test_strategy_tables_cover_the_root() {
        let solver = solved();
        assert!(solver.strategy(Player::Max).contains_key(""));
        // The root belongs to the first mover only.
        assert!(!solver.strategy(Player::Min).contains_key(""));
        assert!(solver.storage().num_choices(Player::Min) > 0);
    }
}
