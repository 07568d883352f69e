use thiserror::Error;

use crate::MIN_SIZE;

/// Fatal error conditions surfaced by the engine
///
/// An out-of-range or full column is deliberately NOT represented here:
/// [`Board::apply_move`](crate::board::Board::apply_move) reports it by
/// returning `false` so callers can re-prompt without unwinding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "invalid board size {rows}x{columns}, both dimensions must be at least {min}",
        min = MIN_SIZE
    )]
    Config { rows: usize, columns: usize },

    #[error("no legal moves remain, callers must check for a full board before searching")]
    NoLegalMove,
}
