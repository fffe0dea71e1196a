//! Error types for board and game operations.

use crate::position::Position;

/// Error that can occur when validating or applying a game operation.
///
/// Every variant is a recoverable input rejection: the failing operation
/// leaves board and game state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The flat index does not name a cell on the 3x3 board.
    #[display("Position {_0} is out of range (must be 0-8)")]
    InvalidPosition(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0.label())]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A state string was not 9 characters from {'0','1','2'}.
    #[display("Malformed state string: {_0}")]
    MalformedState(String),
}

impl std::error::Error for GameError {}
