//! Four-in-a-row detection

use crate::board::{Board, Player};
use crate::CONNECT;

/// True if `player` has four aligned tiles anywhere on the board
///
/// Scans every length-4 window in all four directions on every call.
/// The full re-scan is the contract: no assumption is made about where
/// the last piece landed.
pub fn has_won(board: &Board, player: Player) -> bool {
    has_won_horizontally(board, player)
        || has_won_vertically(board, player)
        || has_won_diagonally(board, player)
}

/// The winning side, if any
///
/// Checks A before B; a legal game can never have both sides winning at
/// once, so the precedence is only observable on hand-built positions.
pub fn check_winner(board: &Board) -> Option<Player> {
    if has_won(board, Player::A) {
        Some(Player::A)
    } else if has_won(board, Player::B) {
        Some(Player::B)
    } else {
        None
    }
}

fn has_won_horizontally(board: &Board, player: Player) -> bool {
    for row in 0..board.rows() {
        for column in 0..=(board.columns() - CONNECT) {
            if (0..CONNECT).all(|x| board.cell(row, column + x) == Some(player)) {
                return true;
            }
        }
    }
    false
}

fn has_won_vertically(board: &Board, player: Player) -> bool {
    for row in 0..=(board.rows() - CONNECT) {
        for column in 0..board.columns() {
            if (0..CONNECT).all(|x| board.cell(row + x, column) == Some(player)) {
                return true;
            }
        }
    }
    false
}

fn has_won_diagonally(board: &Board, player: Player) -> bool {
    for row in 0..=(board.rows() - CONNECT) {
        for column in 0..=(board.columns() - CONNECT) {
            // rising diagonal
            if (0..CONNECT).all(|x| board.cell(row + x, column + x) == Some(player)) {
                return true;
            }
            // falling diagonal
            if (0..CONNECT).all(|x| board.cell(row + CONNECT - 1 - x, column + x) == Some(player)) {
                return true;
            }
        }
    }
    false
}
