//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board position. Rules are separated from
//! board storage so the search engine and the game wrapper share one
//! authoritative implementation.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
