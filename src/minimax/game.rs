//! Game trait definition for the backward-induction solver.
//!
//! Any finite two-player zero-sum perfect-information game that implements
//! the `Game` trait can be solved exhaustively. The trait provides a clean
//! abstraction between the algorithm and specific games.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for actions that can be taken in a game.
///
/// Actions must be cloneable, comparable, and hashable for storage in maps.
pub trait Action: Clone + Eq + Hash + Debug {
    /// Stable index of this action within the game's fixed action space.
    ///
    /// The solver stores chosen actions by index, and the tie-break rule
    /// ("lowest-indexed optimal action wins") is defined in terms of it.
    fn index(&self) -> usize;

    /// String label used in strategy keys and persisted policy tables.
    fn label(&self) -> String {
        self.index().to_string()
    }
}

/// The two roles in a zero-sum game.
///
/// `Max` is the first mover and maximizes the utility returned by
/// [`Game::utility`]; `Min` minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The maximizing player.
    Max,
    /// The minimizing player.
    Min,
}

impl Player {
    /// Number of players (used to size per-player tables).
    pub const COUNT: usize = 2;

    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Index into per-player tables: `Max` is 0, `Min` is 1.
    pub fn index(self) -> usize {
        match self {
            Player::Max => 0,
            Player::Min => 1,
        }
    }
}

/// The main Game trait that defines the interface for any game.
///
/// Implement this trait to use the backward-induction solver with your game.
///
/// # Contract
///
/// - State transitions are immutable: `apply_action` returns a fresh state
///   and never mutates its input.
/// - `available_actions` returns actions in a deterministic order; the
///   solver iterates them in that order, so it fixes the tie-break.
/// - `position_key` must fully determine the game-theoretic value of a
///   state: two states with equal keys must have equal values, or the
///   memoization silently returns wrong results.
pub trait Game: Clone {
    /// The type representing a complete game state.
    type State: Clone + Debug;

    /// The type representing an action a player can take.
    type Action: Action;

    /// Create the initial game state.
    fn initial_state(&self) -> Self::State;

    /// Size of the fixed action space. Action indices lie in `0..num_actions`.
    fn num_actions(&self) -> usize;

    /// Check if the given state is terminal (game over).
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Utility of a terminal state for the maximizing player.
    ///
    /// Positive values favor `Max`, negative values favor `Min`, zero is a
    /// draw. Callers must only invoke this on terminal states.
    fn utility(&self, state: &Self::State) -> i8;

    /// Get the player who should act at the current state.
    ///
    /// # Returns
    /// - `Some(player)` if a player should act
    /// - `None` if no move remains to be made
    fn current_player(&self, state: &Self::State) -> Option<Player>;

    /// Get the list of available actions at the current state.
    ///
    /// The order is part of the game definition: the first action reaching
    /// the optimal value is the one recorded in the strategy table.
    fn available_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action to a state and return the resulting new state.
    ///
    /// The action must be legal at `state`; legality is the caller's
    /// responsibility via `available_actions`.
    fn apply_action(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Canonical encoding of the position, used as the memoization key.
    ///
    /// States reachable by different move orders but representing the same
    /// position must produce the same key.
    fn position_key(&self, state: &Self::State) -> String;

    /// Concatenated action labels since the start of the game, used as the
    /// strategy-table key ("" for the initial state).
    fn history_key(&self, state: &Self::State) -> String;
}
