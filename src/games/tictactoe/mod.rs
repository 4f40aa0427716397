//! Tic-tac-toe implementation for the backward-induction solver.
//!
//! Cells are indexed 0-8, row by row:
//!
//! ```text
//!  ___ ___ ___
//! |_0_|_1_|_2_|
//! |_3_|_4_|_5_|
//! |_6_|_7_|_8_|
//! ```
//!
//! `x` moves first and maximizes; `o` minimizes. A position is encoded as a
//! 9-character string over `{x, o, 0}` (cell order 0-8, `0` = empty), which
//! serves as the solver's memoization key. The full solve visits 5478
//! distinct positions, of which 958 are terminal, and its value is 0:
//! tic-tac-toe is a draw under optimal play.

use std::fmt;

use itertools::Itertools;

use crate::minimax::game::{Action, Game, Player};

pub mod output;

/// Number of cells on the board (also the size of the action space).
pub const NUM_CELLS: usize = 9;

/// The eight winning lines, in check order: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// First mover, the maximizing player.
    X,
    /// Second mover, the minimizing player.
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The solver role this mark plays.
    pub fn player(self) -> Player {
        match self {
            Mark::X => Player::Max,
            Mark::O => Player::Min,
        }
    }

    /// The mark playing a solver role.
    pub fn from_player(player: Player) -> Self {
        match player {
            Player::Max => Mark::X,
            Player::Min => Mark::O,
        }
    }

    /// Character used in the canonical board encoding.
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A move: the index of the cell to claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(
    /// Cell index, 0-8.
    pub u8,
);

impl Action for Cell {
    fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejection reasons from the defensive [`TttState::from_moves`] constructor.
///
/// The solver itself only ever derives states from legal actions, so these
/// arise only when a caller feeds in an externally supplied move sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// Cell index outside 0..9.
    OutOfRange(u8),
    /// Cell already claimed by an earlier move.
    Occupied(u8),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfRange(cell) => {
                write!(f, "cell index {} is out of range 0..9", cell)
            }
            IllegalMove::Occupied(cell) => {
                write!(f, "cell {} is already occupied", cell)
            }
        }
    }
}

impl std::error::Error for IllegalMove {}

/// An immutable tic-tac-toe position.
///
/// Holds the ordered move sequence and the board derived from it by
/// assigning marks alternately starting with `x`. The board is always a
/// pure function of the moves: two states built from equal sequences are
/// equal in every derived field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TttState {
    /// Cell indices in play order, even plies `x`, odd plies `o`.
    moves: Vec<u8>,
    /// Board derived from `moves`.
    board: [Option<Mark>; NUM_CELLS],
}

impl TttState {
    /// The initial position: no moves, empty board.
    pub fn empty() -> Self {
        Self {
            moves: Vec::new(),
            board: [None; NUM_CELLS],
        }
    }

    /// Build a position from an externally supplied move sequence,
    /// rejecting out-of-range indices and cell reuse.
    pub fn from_moves(moves: &[u8]) -> Result<Self, IllegalMove> {
        let mut board = [None; NUM_CELLS];
        for (ply, &cell) in moves.iter().enumerate() {
            if cell as usize >= NUM_CELLS {
                return Err(IllegalMove::OutOfRange(cell));
            }
            if board[cell as usize].is_some() {
                return Err(IllegalMove::Occupied(cell));
            }
            board[cell as usize] = Some(if ply % 2 == 0 { Mark::X } else { Mark::O });
        }
        Ok(Self {
            moves: moves.to_vec(),
            board,
        })
    }

    /// The move sequence in play order.
    pub fn moves(&self) -> &[u8] {
        &self.moves
    }

    /// The derived board, cell order 0-8.
    pub fn board(&self) -> &[Option<Mark>; NUM_CELLS] {
        &self.board
    }

    /// The mark whose turn it is, `None` once all nine cells are claimed.
    ///
    /// Pure function of the move count's parity.
    pub fn to_move(&self) -> Option<Mark> {
        if self.moves.len() == NUM_CELLS {
            None
        } else if self.moves.len() % 2 == 0 {
            Some(Mark::X)
        } else {
            Some(Mark::O)
        }
    }

    /// The mark occupying a completed line, checking the eight lines in a
    /// fixed order and returning the first match.
    pub fn winner(&self) -> Option<Mark> {
        for line in &LINES {
            if let Some(mark) = self.board[line[0]] {
                if self.board[line[1]] == Some(mark) && self.board[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// True iff no cell is empty and no line is complete.
    pub fn is_draw(&self) -> bool {
        self.board.iter().all(|cell| cell.is_some()) && self.winner().is_none()
    }

    /// True iff the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    /// Empty cells in ascending index order.
    ///
    /// The order drives the solver's iteration and hence its deterministic
    /// tie-breaking.
    pub fn open_cells(&self) -> Vec<Cell> {
        (0..NUM_CELLS as u8)
            .filter(|&i| self.board[i as usize].is_none())
            .map(Cell)
            .collect()
    }

    /// The successor position after claiming `cell`.
    ///
    /// The cell must be open (use [`open_cells`](Self::open_cells)); this
    /// state is left untouched.
    pub fn play(&self, cell: Cell) -> TttState {
        debug_assert!(
            self.board[cell.index()].is_none(),
            "cell {} is already occupied",
            cell
        );
        let mut next = self.clone();
        let ply = next.moves.len();
        next.board[cell.index()] = Some(if ply % 2 == 0 { Mark::X } else { Mark::O });
        next.moves.push(cell.0);
        next
    }

    /// Canonical 9-character encoding: `x`, `o`, or `0` per cell.
    pub fn board_string(&self) -> String {
        self.board
            .iter()
            .map(|cell| cell.map_or('0', Mark::as_char))
            .collect()
    }

    /// Concatenated decimal digits of the move sequence ("" at the root).
    pub fn history_string(&self) -> String {
        self.moves.iter().map(|&m| char::from(b'0' + m)).collect()
    }
}

impl fmt::Display for TttState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let c = self.board[row * 3 + col].map_or('.', Mark::as_char);
                write!(f, "{}", c)?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Tic-tac-toe game definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl TicTacToe {
    /// Create a new game.
    pub fn new() -> Self {
        Self
    }
}

impl Game for TicTacToe {
    type State = TttState;
    type Action = Cell;

    fn initial_state(&self) -> TttState {
        TttState::empty()
    }

    fn num_actions(&self) -> usize {
        NUM_CELLS
    }

    fn is_terminal(&self, state: &TttState) -> bool {
        state.is_over()
    }

    fn utility(&self, state: &TttState) -> i8 {
        match state.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        }
    }

    fn current_player(&self, state: &TttState) -> Option<Player> {
        state.to_move().map(Mark::player)
    }

    fn available_actions(&self, state: &TttState) -> Vec<Cell> {
        state.open_cells()
    }

    fn apply_action(&self, state: &TttState, action: &Cell) -> TttState {
        state.play(*action)
    }

    fn position_key(&self, state: &TttState) -> String {
        state.board_string()
    }

    fn history_key(&self, state: &TttState) -> String {
        state.history_string()
    }
}

/// Diagnostic: every move order of matching length whose alternating replay
/// produces exactly `board_str`.
///
/// Enumerates permutations of distinct cells, so it is exponential in the
/// number of occupied cells; intended for debugging and verification, not
/// for the solving algorithm itself.
pub fn matching_histories(board_str: &str) -> Vec<String> {
    let depth = board_str.chars().filter(|&c| c != '0').count();
    (0..NUM_CELLS as u8)
        .permutations(depth)
        .filter_map(|moves| TttState::from_moves(&moves).ok())
        .filter(|state| state.board_string() == board_str)
        .map(|state| state.history_string())
        .collect()
}
