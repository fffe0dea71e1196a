//! Flat state-string serialization.
//!
//! The persisted board representation is exactly 9 ASCII digits in
//! row-major order, alphabet {'0','1','2'}: '0' empty, '1' player X,
//! '2' player O. The empty board is `"000000000"`.
//!
//! The one-based digit encoding exists only here; everything else in the
//! crate speaks the zero-based `Player` enum.

use crate::error::GameError;
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The state string of the empty board.
pub const INITIAL_STATE: &str = "000000000";

impl Board {
    /// Serializes the board to its 9-character state string.
    #[instrument]
    pub fn state_string(&self) -> String {
        let mut state = String::with_capacity(9);
        for pos in Position::ALL {
            let digit = match self.get(pos) {
                Square::Empty => '0',
                Square::Occupied(Player::X) => '1',
                Square::Occupied(Player::O) => '2',
            };
            state.push(digit);
        }
        state
    }

    /// Reconstructs a board from a 9-character state string.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MalformedState` if the input is not exactly
    /// 9 characters from {'0','1','2'}. Nothing is constructed on failure.
    #[instrument]
    pub fn from_state_string(s: &str) -> Result<Self, GameError> {
        if s.chars().count() != 9 {
            return Err(GameError::MalformedState(format!(
                "expected 9 characters, got {}",
                s.chars().count()
            )));
        }

        let mut board = Board::new();
        for (pos, ch) in Position::ALL.iter().zip(s.chars()) {
            let square = match ch {
                '0' => Square::Empty,
                '1' => Square::Occupied(Player::X),
                '2' => Square::Occupied(Player::O),
                other => {
                    return Err(GameError::MalformedState(format!(
                        "invalid character '{other}' (expected '0', '1', or '2')"
                    )));
                }
            };
            board.set(*pos, square);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_state_string() {
        assert_eq!(Board::new().state_string(), INITIAL_STATE);
    }

    #[test]
    fn test_round_trip() {
        let board = Board::from_state_string("120021210").unwrap();
        assert_eq!(board.state_string(), "120021210");
        let again = Board::from_state_string(&board.state_string()).unwrap();
        assert_eq!(again, board);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            Board::from_state_string("0000"),
            Err(GameError::MalformedState(_))
        ));
        assert!(matches!(
            Board::from_state_string("0000000000"),
            Err(GameError::MalformedState(_))
        ));
    }

    #[test]
    fn test_rejects_bad_alphabet() {
        assert!(matches!(
            Board::from_state_string("0000X0000"),
            Err(GameError::MalformedState(_))
        ));
        assert!(matches!(
            Board::from_state_string("000030000"),
            Err(GameError::MalformedState(_))
        ));
    }

    #[test]
    fn test_row_major_order() {
        // Only bottom-left set: index 6 = row 2, col 0.
        let board = Board::from_state_string("000000100").unwrap();
        assert_eq!(board.owner_at(Position::BottomLeft), Some(Player::X));
        assert!(board.is_empty(Position::TopLeft));
    }
}
