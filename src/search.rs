//! Exhaustive negamax search for the AI move.
//!
//! Full-depth search is tractable at this board size: the tree is bounded
//! by 9! leaves and terminates early on every win or full board, so no
//! pruning or move ordering is needed for optimal play.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Maximum search depth: the longest possible game fills all 9 squares.
pub const FULL_DEPTH: u32 = 9;

/// Score floor below any reachable score (scores lie in -10..=10).
const SCORE_MIN: i32 = -1000;

/// Scores a board from `to_move`'s perspective, searching to `max_depth`.
///
/// Negamax formulation: each call returns the score for its own mover, and
/// the caller negates the child's score to reinterpret it from its side.
///
/// - A decided board scores `10 - depth` when `to_move` owns the winning
///   triple and `depth - 10` otherwise. In legal play the winner is always
///   the player who just moved, so a decided child returns `depth - 10`
///   and the winner's node sees it negated. Depth-biased magnitudes make
///   faster wins rank higher and faster losses rank lower.
/// - A full board with no winner scores 0.
/// - Hitting `max_depth` scores 0; with `FULL_DEPTH` this never happens
///   before one of the terminal cases above.
///
/// The board is mutated tentatively (place, recurse, undo), so it is
/// restored exactly on return; sibling branches never observe each
/// other's placements because the search is strictly depth-first.
pub fn negamax(board: &mut Board, depth: u32, to_move: Player, max_depth: u32) -> i32 {
    if let Some(winner) = rules::check_winner(board) {
        return if winner == to_move {
            10 - depth as i32
        } else {
            depth as i32 - 10
        };
    }

    if rules::is_full(board) {
        return 0;
    }

    if depth >= max_depth {
        return 0;
    }

    let mut best_score = SCORE_MIN;

    for pos in Position::ALL {
        if board.is_empty(pos) {
            board.set(pos, Square::Occupied(to_move));
            let score = -negamax(board, depth + 1, to_move.opponent(), max_depth);
            board.set(pos, Square::Empty);

            if score > best_score {
                best_score = score;
            }
        }
    }

    best_score
}

/// Finds the optimal move for `ai` on the given board.
///
/// Scans positions in flat index order with a strict greater-than
/// comparison, so the lowest-indexed cell wins among equally-scored moves.
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board), fields(state = %board.state_string()))]
pub fn find_best_move(board: &Board, ai: Player) -> Option<Position> {
    let mut scratch = board.clone();
    let mut best_score = SCORE_MIN;
    let mut best_move = None;

    for pos in Position::ALL {
        if scratch.is_empty(pos) {
            scratch.set(pos, Square::Occupied(ai));
            let score = -negamax(&mut scratch, 1, ai.opponent(), FULL_DEPTH);
            scratch.set(pos, Square::Empty);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }
    }

    debug!(?best_move, best_score, "search complete");
    best_move
}
