use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::board::{Board, Player};

/// Draws the board to stdout, top row first, with a column-number header
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    // single-digit header; columns past 9 wrap to their last digit
    let header: String = (1..=board.columns()).map(|c| (c % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in (0..board.rows()).rev() {
        for column in 0..board.columns() {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.cell(row, column) {
                        Some(Player::A) => Color::Red,
                        Some(Player::B) => Color::Yellow,
                        None => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
