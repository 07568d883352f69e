use std::ops::{Deref, DerefMut};

use crate::errors::GameError;
use crate::MIN_SIZE;

/// One of the two sides of the game
///
/// Cells hold an `Option<Player>`: `None` marks an empty cell and is
/// never a move owner or a winner.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The other side (A <-> B)
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// A rectangular Connect 4 board with gravity
///
/// Cells are stored left-to-right, bottom-to-top; `heights` counts the
/// pieces in each column so that drops and undos are O(1). Occupied
/// cells in a column always form a contiguous block from the bottom.
///
/// Public move columns are ONE-indexed, in `[1, columns]`. Cell
/// accessors are zero-indexed with row 0 at the bottom.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Player>>,
    heights: Vec<usize>,
}

impl Board {
    /// Creates an empty board
    ///
    /// Fails with [`GameError::Config`] if either dimension is below
    /// [`MIN_SIZE`](crate::MIN_SIZE).
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        if rows < MIN_SIZE || columns < MIN_SIZE {
            return Err(GameError::Config { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
            heights: vec![0; columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The zero-indexed middle column, favoured by the heuristic
    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    /// The cell at a zero-indexed position, row 0 at the bottom
    pub fn cell(&self, row: usize, column: usize) -> Option<Player> {
        self.cells[column + self.columns * row]
    }

    /// The number of pieces currently in a zero-indexed column
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    fn playable(&self, column: usize) -> bool {
        self.heights[column] < self.rows
    }

    /// Drops a piece for `player` into a one-indexed column
    ///
    /// Returns `false` without touching the board when the column is out
    /// of range or full, so callers can re-prompt or pick another move.
    pub fn apply_move(&mut self, column_one_indexed: usize, player: Player) -> bool {
        if column_one_indexed < 1 || column_one_indexed > self.columns {
            return false;
        }
        let column = column_one_indexed - 1;
        if !self.playable(column) {
            return false;
        }
        self.cells[column + self.columns * self.heights[column]] = Some(player);
        self.heights[column] += 1;
        true
    }

    /// Removes the topmost piece of a one-indexed column
    ///
    /// Reverses a previous [`apply_move`](Self::apply_move) during
    /// search backtracking. Calls must mirror drops in exact reverse
    /// order; the column must not be empty.
    pub fn undo_last_in_column(&mut self, column_one_indexed: usize) {
        let column = column_one_indexed - 1;
        debug_assert!(self.heights[column] > 0, "undo on an empty column");
        self.heights[column] -= 1;
        self.cells[column + self.columns * self.heights[column]] = None;
    }

    /// The playable one-indexed columns in ascending order
    ///
    /// Lazy and restartable (call again for a fresh pass). Yields
    /// nothing if and only if the board is full.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns)
            .filter(move |&column| self.playable(column))
            .map(|column| column + 1)
    }

    /// True when no column can take another piece
    pub fn is_full(&self) -> bool {
        self.legal_moves().next().is_none()
    }

    /// Drops a piece and returns a guard that undoes it when dropped
    ///
    /// `None` when the move is invalid. The search engine places every
    /// candidate through this guard so the undo runs on each exit path
    /// of the move loop, including alpha-beta pruning breaks.
    pub fn place(&mut self, column_one_indexed: usize, player: Player) -> Option<PlacedPiece<'_>> {
        if self.apply_move(column_one_indexed, player) {
            Some(PlacedPiece {
                board: self,
                column: column_one_indexed,
            })
        } else {
            None
        }
    }
}

/// A scoped board mutation: one placed piece, removed again on drop
pub struct PlacedPiece<'a> {
    board: &'a mut Board,
    column: usize,
}

impl Deref for PlacedPiece<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for PlacedPiece<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for PlacedPiece<'_> {
    fn drop(&mut self) {
        self.board.undo_last_in_column(self.column);
    }
}
