//! # Retrograde Solver
//!
//! An exhaustive backward-induction (retrograde minimax) solver for finite
//! two-player zero-sum perfect-information games.
//!
//! ## Features
//!
//! - **Generic engine**: works with any game implementing the [`Game`] trait
//! - **Memoized search**: positions reachable by different move orders are
//!   evaluated once, keyed on a canonical position encoding
//! - **Deterministic strategies**: a complete optimal-action table per
//!   player, ties broken toward the lowest-indexed action
//! - **Policy export**: per-player JSON tables usable as lookup policies
//!
//! ## Quick Start
//!
//! ```
//! use retrograde_solver::games::tictactoe::TicTacToe;
//! use retrograde_solver::minimax::{MinimaxSolver, Player};
//!
//! let mut solver = MinimaxSolver::new(TicTacToe::new());
//! let value = solver.solve();
//!
//! // Tic-tac-toe is a draw under optimal play by both sides.
//! assert_eq!(value, 0);
//!
//! // The first mover's canonical opening is cell 0, the lowest-indexed
//! // member of the optimal opening set {0, 2, 4, 6, 8}.
//! assert_eq!(solver.chosen_action(Player::Max, ""), Some(0));
//! ```
//!
//! ## Modules
//!
//! - [`minimax`]: core backward-induction engine
//! - [`games`]: game implementations (tic-tac-toe)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │               MinimaxSolver (generic)                   │
//! │  - recursive backward induction   - memo table          │
//! │  - deterministic tie-breaking     - strategy tables     │
//! └─────────────────────────────────────────────────────────┘
//!                           │
//!                           │ implements Game trait
//!                           ▼
//!                    ┌─────────────┐
//!                    │ Tic-tac-toe │
//!                    └─────────────┘
//! ```

#![warn(missing_docs)]

/// Backward-induction solver module.
///
/// This is the core module containing the generic engine.
pub mod minimax;

/// Game implementations module.
///
/// Contains games solvable by the engine, starting with tic-tac-toe.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use minimax::{Action, Game, MemoEntry, MinimaxSolver, Player, SolveStats, SolveStorage};
