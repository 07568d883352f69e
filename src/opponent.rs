//! A scripted, human-like opponent for player B
//!
//! Plays an immediate win when one exists, otherwise leans on the center
//! column, otherwise moves at random. Used by the orchestration layer as
//! the engine's sparring partner.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Player};
use crate::win::has_won;

/// Probability of taking the center column when it is open
const CENTER_BIAS: f64 = 0.65;

/// Picks player B's next column, or `None` on a full board
///
/// The one-ply win check runs on a snapshot of the board, so the
/// caller's board is never left mutated. This side exploration is
/// separate from the engine's search and owns its own copy.
pub fn choose_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let moves: Vec<usize> = board.legal_moves().collect();
    if moves.is_empty() {
        return None;
    }

    // take a win on the spot if any column offers one
    let mut scratch = board.clone();
    for &column in &moves {
        if scratch.apply_move(column, Player::B) {
            let wins = has_won(&scratch, Player::B);
            scratch.undo_last_in_column(column);
            if wins {
                return Some(column);
            }
        }
    }

    let center = board.center_column() + 1;
    if moves.contains(&center) && rng.gen_bool(CENTER_BIAS) {
        return Some(center);
    }

    moves.choose(rng).copied()
}
