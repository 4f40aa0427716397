//! Backward-induction solver module.
//!
//! This module provides a generic implementation of exhaustive backward
//! induction (retrograde minimax) for finite two-player zero-sum
//! perfect-information games.
//!
//! # Overview
//!
//! The solver computes exact optimal play by:
//! 1. Recursively exploring every legal continuation of the initial state
//! 2. Evaluating terminal payoffs and propagating optimal values upward,
//!    maximizing for one player and minimizing for the other
//! 3. Memoizing evaluated positions by a canonical key so positions
//!    reachable via multiple move orders are evaluated once
//! 4. Recording a deterministic optimal action for every reachable history
//!
//! Ties break toward the lowest-indexed optimal action, so the resulting
//! strategy tables are canonical: re-solving from scratch reproduces them
//! exactly.
//!
//! # Usage
//!
//! 1. Implement the [`Game`] trait for your game
//! 2. Create a [`MinimaxSolver`] with the game
//! 3. Call [`MinimaxSolver::solve`] to evaluate the full tree
//! 4. Read the per-player tables via [`MinimaxSolver::strategy`]
//!
//! # Example
//!
//! ```
//! use retrograde_solver::games::tictactoe::TicTacToe;
//! use retrograde_solver::minimax::{MinimaxSolver, Player};
//!
//! let mut solver = MinimaxSolver::new(TicTacToe::new());
//! let value = solver.solve();
//! assert_eq!(value, 0);
//!
//! // The first mover opens in the lowest-indexed optimal cell.
//! assert_eq!(solver.chosen_action(Player::Max, ""), Some(0));
//! ```

pub mod game;
pub mod solver;
pub mod storage;

// Re-export main types for convenient access
pub use game::{Action, Game, Player};
pub use solver::{MinimaxSolver, SolveStats};
pub use storage::{MemoEntry, SolveStorage};
