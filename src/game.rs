//! Game engine: board, turn alternation, and the AI turn.
//!
//! `Board` is pure storage and the rules are pure functions; this wrapper
//! is the host-facing surface that enforces occupancy and turn order,
//! caches the derived status, and drives the search on the AI's turn.

use crate::action::Move;
use crate::error::GameError;
use crate::position::Position;
use crate::rules;
use crate::search;
use crate::state::INITIAL_STATE;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the winner, if the game has one.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Checks whether the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Places the current player's mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` if the game is already decided and
    /// `GameError::SquareOccupied` if the square is not empty. The game is
    /// unchanged on failure.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            warn!("move rejected: game is over");
            return Err(GameError::GameOver);
        }

        if !self.board.is_empty(pos) {
            warn!("move rejected: square occupied");
            return Err(GameError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        debug!(%player, position = %pos.label(), "mark placed");

        self.update_status();
        if self.status == GameStatus::InProgress {
            self.to_move = player.opponent();
        }

        Ok(())
    }

    /// Places the current player's mark at a flat index (0-8).
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPosition` for an out-of-range index, plus
    /// everything [`Game::make_move`] can return.
    pub fn make_move_at(&mut self, index: usize) -> Result<(), GameError> {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "move rejected: position out of range");
            return Err(GameError::InvalidPosition(index));
        };
        self.make_move(pos)
    }

    /// Host surface: attempts a move at a flat index (0-8).
    ///
    /// Returns true iff a mark was legally placed. Out-of-range indices,
    /// occupied squares, and finished games all report false.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, index: usize) -> bool {
        self.make_move_at(index).is_ok()
    }

    /// Runs one AI turn: computes the optimal move for the side to move
    /// and applies it.
    ///
    /// A no-op when the game is already decided or the search reports no
    /// move (only possible on a full board, unreachable while in
    /// progress).
    #[instrument(skip(self))]
    pub fn run_ai_turn(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }

        match search::find_best_move(&self.board, self.to_move) {
            Some(pos) => {
                debug!(position = %pos.label(), "AI move selected");
                // The square is empty by construction, and the game is in
                // progress: the move cannot fail.
                let _ = self.make_move(pos);
            }
            None => warn!("AI turn requested with no empty square"),
        }
    }

    /// Resets to a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// The state string of a fresh game.
    pub fn initial_state_string() -> &'static str {
        INITIAL_STATE
    }

    /// Serializes the board to its 9-character state string.
    pub fn state_string(&self) -> String {
        self.board.state_string()
    }

    /// Restores the game from a 9-character state string.
    ///
    /// The string stores only the board; the player to move is re-derived
    /// from the mark counts (X moves first, so equal counts mean X's turn)
    /// and the status from the rules. History is cleared: the string does
    /// not carry move order.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MalformedState` on invalid input, leaving the
    /// game unchanged.
    #[instrument(skip(self))]
    pub fn set_state_string(&mut self, s: &str) -> Result<(), GameError> {
        let board = Board::from_state_string(s)?;

        let x_count = board
            .squares()
            .iter()
            .filter(|sq| **sq == Square::Occupied(Player::X))
            .count();
        let o_count = board
            .squares()
            .iter()
            .filter(|sq| **sq == Square::Occupied(Player::O))
            .count();

        self.to_move = if x_count <= o_count {
            Player::X
        } else {
            Player::O
        };
        self.board = board;
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.update_status();
        debug!(state = %s, to_move = %self.to_move, "state restored");
        Ok(())
    }

    /// Re-derives the cached status from the board.
    fn update_status(&mut self) {
        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.status = GameStatus::InProgress;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
