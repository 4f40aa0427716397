//! Game implementations for the backward-induction solver.
//!
//! Each game lives in its own module and implements the
//! [`Game`](crate::minimax::Game) trait, which is everything the solver
//! needs: state transitions, terminal detection, payoffs, and the two key
//! encodings (canonical position key for memoization, history key for the
//! strategy tables).
//!
//! ## Available Games
//!
//! - [`tictactoe`]: 3x3 tic-tac-toe, solved exactly (value 0, a draw)
//!
//! ## Adding New Games
//!
//! 1. Create a new module under `src/games/`
//! 2. Define state and action types
//! 3. Implement the `Game` trait
//! 4. Add tests that verify expected values and strategies
//!
//! See the [`tictactoe`] module for a complete example.

pub mod tictactoe;
