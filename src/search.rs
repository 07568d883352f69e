//! Depth-limited minimax and alpha-beta game tree search
//!
//! Player A maximizes, player B minimizes. Both variants walk the one
//! shared board with apply/recurse/undo backtracking and return the same
//! move and value; pruning changes only the number of nodes visited.

use rand::seq::SliceRandom;

use crate::board::{Board, Player};
use crate::errors::GameError;
use crate::eval::evaluate;
use crate::win::has_won;

/// Sentinel for a proven A win, above every heuristic value
pub const WIN_SCORE: i32 = 1_000_000;
/// Sentinel for a proven B win, below every heuristic value
pub const LOSS_SCORE: i32 = -1_000_000;
/// Sentinel for a drawn (full, no winner) position
pub const DRAW_SCORE: i32 = 0;

/// Picks the best column for `acting` by alpha-beta search
///
/// Fails with [`GameError::NoLegalMove`] on a full board; the caller is
/// expected to check for a draw first. On an already-decided position
/// (or at depth 0) the terminal and leaf checks yield no column, and the
/// lowest legal column is returned instead.
pub fn choose_move(board: &mut Board, depth: u32, acting: Player) -> Result<usize, GameError> {
    let first_legal = board.legal_moves().next().ok_or(GameError::NoLegalMove)?;

    let maximizing = acting == Player::A;
    let (column, _value) = alphabeta(board, depth, i32::MIN, i32::MAX, maximizing);
    Ok(column.unwrap_or(first_legal))
}

/// Terminal scoring shared by both search variants
///
/// A win check outranks the depth limit, so a decided position is never
/// handed to the heuristic, even at depth 0.
fn terminal_score(board: &Board) -> Option<i32> {
    if has_won(board, Player::B) {
        Some(LOSS_SCORE)
    } else if has_won(board, Player::A) {
        Some(WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Plain minimax search
///
/// Returns the chosen one-indexed column (`None` at a terminal or
/// depth-exhausted leaf) and the position value. Leaves are always
/// scored from A's perspective, whichever side is to move.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> (Option<usize>, i32) {
    if let Some(score) = terminal_score(board) {
        return (None, score);
    }
    if depth == 0 {
        return (None, evaluate(board, Player::A));
    }

    let moves: Vec<usize> = board.legal_moves().collect();
    // a random fallback guarantees a column even if no child improves on
    // the infinite starting bound; in practice the first child always does
    let mut chosen = *moves
        .choose(&mut rand::thread_rng())
        .unwrap_or(&moves[0]);

    if maximizing {
        let mut best = i32::MIN;
        for &column in &moves {
            let mut placed = match board.place(column, Player::A) {
                Some(placed) => placed,
                None => continue,
            };
            let (_, value) = minimax(&mut placed, depth - 1, false);
            if value > best {
                best = value;
                chosen = column;
            }
        }
        (Some(chosen), best)
    } else {
        let mut best = i32::MAX;
        for &column in &moves {
            let mut placed = match board.place(column, Player::B) {
                Some(placed) => placed,
                None => continue,
            };
            let (_, value) = minimax(&mut placed, depth - 1, true);
            if value < best {
                best = value;
                chosen = column;
            }
        }
        (Some(chosen), best)
    }
}

/// Minimax with alpha-beta pruning
///
/// Identical contract to [`minimax`]: same chosen column, same value.
/// Siblings are skipped once `alpha >= beta`, as a perfect opponent will
/// not let the game reach them; the undo guard still reverses the last
/// placement when the loop breaks early.
pub fn alphabeta(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> (Option<usize>, i32) {
    if let Some(score) = terminal_score(board) {
        return (None, score);
    }
    if depth == 0 {
        return (None, evaluate(board, Player::A));
    }

    let moves: Vec<usize> = board.legal_moves().collect();
    let mut chosen = *moves
        .choose(&mut rand::thread_rng())
        .unwrap_or(&moves[0]);

    if maximizing {
        let mut best = i32::MIN;
        for &column in &moves {
            let mut placed = match board.place(column, Player::A) {
                Some(placed) => placed,
                None => continue,
            };
            let (_, value) = alphabeta(&mut placed, depth - 1, alpha, beta, false);
            if value > best {
                best = value;
                chosen = column;
            }
            alpha = alpha.max(best);
            if alpha >= beta {
                // remaining siblings cannot raise the parent's minimum
                break;
            }
        }
        (Some(chosen), best)
    } else {
        let mut best = i32::MAX;
        for &column in &moves {
            let mut placed = match board.place(column, Player::B) {
                Some(placed) => placed,
                None => continue,
            };
            let (_, value) = alphabeta(&mut placed, depth - 1, alpha, beta, true);
            if value < best {
                best = value;
                chosen = column;
            }
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        (Some(chosen), best)
    }
}
