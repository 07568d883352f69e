//! A heuristic minimax agent for playing the board game 'Connect 4'
//!
//! This agent explores the game tree with depth-limited minimax search
//! (plain or alpha-beta pruned) over a sliding-window board evaluation,
//! and picks the best column for the side to move.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::board::{Board, Player};
//! use connect4_minimax::search::choose_move;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new(6, 7)?;
//! board.apply_move(4, Player::B);
//!
//! let column = choose_move(&mut board, 4, Player::A)?;
//! assert!((1..=7).contains(&column));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod errors;

pub mod board;

pub mod win;

pub mod eval;

pub mod search;

pub mod opponent;


/// The number of aligned tiles needed to win (and the scan window length)
pub const CONNECT: usize = 4;

/// The smallest allowed board dimension, for rows and columns alike
pub const MIN_SIZE: usize = 5;

/// The width of the standard game board in tiles
pub const DEFAULT_COLUMNS: usize = 7;

/// The height of the standard game board in tiles
pub const DEFAULT_ROWS: usize = 6;

// ensure the standard board satisfies the minimum-dimension rule
const_assert!(DEFAULT_COLUMNS >= MIN_SIZE);
const_assert!(DEFAULT_ROWS >= MIN_SIZE);
