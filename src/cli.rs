//! Command-line interface for the demo host.

use clap::Parser;

/// Tic-tac-toe against an unbeatable negamax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_engine")]
#[command(about = "Play tic-tac-toe against an unbeatable opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Resume from a 9-character state string ('0' empty, '1' X, '2' O)
    #[arg(short, long)]
    pub state: Option<String>,

    /// Disable the AI seat and play both sides by hand
    #[arg(long)]
    pub two_player: bool,
}
