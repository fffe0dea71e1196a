//! Tests for win and draw detection against known positions.

use tictactoe_engine::rules::{check_winner, is_draw, is_full};
use tictactoe_engine::{Board, Player, Position, Square};

#[test]
fn test_empty_board_has_no_result() {
    let board = Board::from_state_string("000000000").unwrap();
    assert_eq!(check_winner(&board), None);
    assert!(!is_full(&board));
    assert!(!is_draw(&board));
}

#[test]
fn test_top_row_win_for_x() {
    let board = Board::from_state_string("111220000").unwrap();
    assert_eq!(check_winner(&board), Some(Player::X));
}

#[test]
fn test_every_winning_triple_is_detected() {
    let triples: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for triple in triples {
        let mut board = Board::new();
        for index in triple {
            let pos = Position::from_index(index).unwrap();
            board.set(pos, Square::Occupied(Player::O));
        }
        assert_eq!(check_winner(&board), Some(Player::O), "triple {triple:?}");
    }
}

#[test]
fn test_full_board_without_triple_is_a_draw() {
    // X O X / X O O / O X X
    let board = Board::from_state_string("121122211").unwrap();
    assert_eq!(check_winner(&board), None);
    assert!(is_full(&board));
    assert!(is_draw(&board));
}

#[test]
fn test_full_board_with_winner_is_not_a_draw() {
    // Alternating marks leave X the 0-4-8 diagonal.
    let board = Board::from_state_string("121212121").unwrap();
    assert_eq!(check_winner(&board), Some(Player::X));
    assert!(is_full(&board));
    assert!(!is_draw(&board));
}

#[test]
fn test_queries_are_idempotent() {
    let board = Board::from_state_string("120210000").unwrap();
    assert_eq!(check_winner(&board), check_winner(&board));
    assert_eq!(is_draw(&board), is_draw(&board));
}
