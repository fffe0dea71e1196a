//! Tic-tac-toe rules engine with an unbeatable negamax opponent.
//!
//! # Architecture
//!
//! - **Board & rules**: `Board` is a plain 3x3 value type; win and draw
//!   detection are pure functions in [`rules`].
//! - **Search**: [`search::find_best_move`] runs an exhaustive negamax to
//!   full depth and returns the game-theoretically optimal move.
//! - **Game**: [`Game`] is the host-facing surface - it enforces occupancy
//!   and turn order, caches the derived status, and drives the AI turn.
//! - **State strings**: the only persisted representation is a 9-character
//!   row-major string over `{'0','1','2'}` (see [`state`]).
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! assert!(game.attempt_move(4)); // X takes the center
//! game.run_ai_turn();            // O replies optimally
//! assert_eq!(game.to_move(), Player::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod position;
pub mod rules;
pub mod search;
pub mod state;
mod types;

pub use action::Move;
pub use error::GameError;
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
