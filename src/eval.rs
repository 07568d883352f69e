//! Sliding-window heuristic evaluation of non-terminal positions

use crate::board::{Board, Player};
use crate::CONNECT;

/// Value of a completed four-window
const FOUR_VALUE: i32 = 100;
/// Value of three own tiles with one open cell
const THREE_VALUE: i32 = 5;
/// Value of two own tiles with two open cells
const TWO_VALUE: i32 = 2;
/// Penalty for an opponent three with one open cell
const OPPONENT_THREE_VALUE: i32 = -4;
/// Bonus per own tile in the center column
const CENTER_VALUE: i32 = 5;

/// Scores the board from `for_player`'s perspective
///
/// Sums the window values of every length-4 window in the four scan
/// directions, plus [`CENTER_VALUE`] per own piece in the middle column.
/// Only meant for non-terminal, depth-exhausted positions; the search
/// scores terminal positions with its own sentinels.
pub fn evaluate(board: &Board, for_player: Player) -> i32 {
    let mut score = 0;

    // horizontal
    for row in 0..board.rows() {
        for column in 0..=(board.columns() - CONNECT) {
            score += window_value(for_player, (0..CONNECT).map(|x| board.cell(row, column + x)));
        }
    }

    // vertical
    for row in 0..=(board.rows() - CONNECT) {
        for column in 0..board.columns() {
            score += window_value(for_player, (0..CONNECT).map(|x| board.cell(row + x, column)));
        }
    }

    for row in 0..=(board.rows() - CONNECT) {
        for column in 0..=(board.columns() - CONNECT) {
            // rising diagonal
            score += window_value(
                for_player,
                (0..CONNECT).map(|x| board.cell(row + x, column + x)),
            );
            // falling diagonal
            score += window_value(
                for_player,
                (0..CONNECT).map(|x| board.cell(row + CONNECT - 1 - x, column + x)),
            );
        }
    }

    let center = board.center_column();
    for row in 0..board.rows() {
        if board.cell(row, center) == Some(for_player) {
            score += CENTER_VALUE;
        }
    }

    score
}

/// Scores one window by exact multiset counts of its four cells
fn window_value(for_player: Player, window: impl Iterator<Item = Option<Player>>) -> i32 {
    let mut own = 0;
    let mut empty = 0;
    let mut opponent = 0;
    for cell in window {
        match cell {
            Some(player) if player == for_player => own += 1,
            Some(_) => opponent += 1,
            None => empty += 1,
        }
    }

    let mut value = 0;
    if own == CONNECT {
        value += FOUR_VALUE;
    } else if own == 3 && empty == 1 {
        value += THREE_VALUE;
    } else if own == 2 && empty == 2 {
        value += TWO_VALUE;
    }
    if opponent == 3 && empty == 1 {
        value += OPPONENT_THREE_VALUE;
    }
    value
}
