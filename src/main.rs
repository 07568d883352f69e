use anyhow::{anyhow, Result};
use rand::Rng;

use std::io::{stdin, stdout, Write};
use std::time::{Duration, Instant};

use connect4_minimax::board::{Board, Player};
use connect4_minimax::{opponent, search, win, DEFAULT_COLUMNS, DEFAULT_ROWS};

mod render;

const DEFAULT_DEPTH: u32 = 7;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // `benchmark <runs> [depth]` runs silent self-play instead of a game
    if args.get(1).map(String::as_str) == Some("benchmark") {
        let runs = args
            .get(2)
            .ok_or_else(|| anyhow!("usage: {} benchmark <runs> [depth]", args[0]))?
            .parse::<usize>()?;
        let depth = match args.get(3) {
            Some(depth) => depth.parse::<u32>()?,
            None => DEFAULT_DEPTH,
        };
        return benchmark(runs, depth);
    }

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose engine control of player A
    let mut engine_plays_a = false;
    loop {
        let mut buffer = String::new();
        print!("Is player A (red) engine controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                engine_plays_a = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose scripted control of player B
    let mut scripted_plays_b = false;
    loop {
        let mut buffer = String::new();
        print!("Is player B (yellow) computer controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                scripted_plays_b = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let depth = if engine_plays_a {
        loop {
            let mut buffer = String::new();
            print!("Engine search depth (try {}): ", DEFAULT_DEPTH);
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.trim().parse::<u32>() {
                Ok(depth) => break depth,
                Err(_) => println!("Invalid number: {}", buffer.trim()),
            }
        }
    } else {
        DEFAULT_DEPTH
    };

    let mut board = Board::new(DEFAULT_ROWS, DEFAULT_COLUMNS)?;
    let mut rng = rand::thread_rng();

    // random starter, as a coin flip
    let mut to_move = if rng.gen_bool(0.5) { Player::A } else { Player::B };
    println!(
        "Player {} starts\n",
        match to_move {
            Player::A => "A",
            Player::B => "B",
        }
    );

    // game loop
    loop {
        render::draw(&board).expect("Failed to draw board!");

        match win::check_winner(&board) {
            Some(Player::A) => {
                println!("Player A wins!");
                break;
            }
            Some(Player::B) => {
                println!("Player B wins!");
                break;
            }
            None => {}
        }
        if board.is_full() {
            println!("Draw!");
            break;
        }

        let next_move = match to_move {
            // engine player
            Player::A if engine_plays_a => {
                println!("Engine is thinking...");
                stdout().flush().expect("Failed to flush to stdout!");

                let column = search::choose_move(&mut board, depth, Player::A)?;
                println!("Engine plays column {}", column);
                column
            }
            // scripted player
            Player::B if scripted_plays_b => {
                // the board is not full here, so a move always exists
                match opponent::choose_move(&board, &mut rng) {
                    Some(column) => {
                        println!("Computer plays column {}", column);
                        column
                    }
                    None => unreachable!("no move on a non-full board"),
                }
            }
            // human player
            _ => {
                print!("Move input > ");
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                match input_str.trim().parse::<usize>() {
                    Err(_) => {
                        println!("Invalid number: {}", input_str);
                        continue;
                    }
                    Ok(column) => column,
                }
            }
        };

        if !board.apply_move(next_move, to_move) {
            println!("Invalid move, column {} is out of range or full", next_move);
            // try the move again
            continue;
        }
        to_move = to_move.opponent();
    }
    Ok(())
}

/// Plays `runs` silent games of the engine (A) against the scripted
/// opponent (B) and reports mean runtime and the engine's win rate
fn benchmark(runs: usize, depth: u32) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut engine_wins = 0;
    let mut times = Vec::with_capacity(runs);

    for _ in 0..runs {
        let mut board = Board::new(DEFAULT_ROWS, DEFAULT_COLUMNS)?;
        let mut to_move = if rng.gen_bool(0.5) { Player::A } else { Player::B };

        let start_time = Instant::now();
        let result = loop {
            match win::check_winner(&board) {
                Some(winner) => break Some(winner),
                None => {}
            }
            if board.is_full() {
                break None;
            }

            let column = match to_move {
                Player::A => search::choose_move(&mut board, depth, Player::A)?,
                Player::B => match opponent::choose_move(&board, &mut rng) {
                    Some(column) => column,
                    None => break None,
                },
            };
            if !board.apply_move(column, to_move) {
                return Err(anyhow!("illegal move {} chosen for {:?}", column, to_move));
            }
            to_move = to_move.opponent();
        };
        times.push(start_time.elapsed());

        if result == Some(Player::A) {
            engine_wins += 1;
        }
    }

    println!(
        "Alpha-beta search with depth {}:\nMean time: {:.6}s\nWin percentage: {}",
        depth,
        (times.iter().sum::<Duration>() / runs.max(1) as u32).as_secs_f64(),
        engine_wins as f64 / runs.max(1) as f64
    );
    Ok(())
}
