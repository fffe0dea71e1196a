//! Interactive terminal host: human (X) against the search engine (O).

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{BufRead, Write};
use tictactoe_engine::{Game, GameStatus, Position};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut game = Game::new();
    if let Some(state) = &cli.state {
        game.set_state_string(state)?;
        info!(state = %state, "resumed game from state string");
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}\n", game.board().display());

        match game.status() {
            GameStatus::Won(player) => {
                println!("{player} wins!");
                break;
            }
            GameStatus::Draw => {
                println!("It's a draw.");
                break;
            }
            GameStatus::InProgress => {}
        }

        print!("{} to move (0-8 or label, e.g. 'center'): ", game.to_move());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let input = line?;

        let Some(pos) = Position::from_label_or_number(&input) else {
            println!("Unrecognized position: {}", input.trim());
            continue;
        };

        if !game.attempt_move(pos.to_index()) {
            println!("{} is taken, try another square.", pos.label());
            continue;
        }
        debug!(state = %game.state_string(), "human move applied");

        if !cli.two_player && game.status() == GameStatus::InProgress {
            game.run_ai_turn();
            debug!(state = %game.state_string(), "AI move applied");
        }
    }

    info!(state = %game.state_string(), "final position");
    Ok(())
}
