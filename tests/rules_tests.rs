// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
mod common;

use common::{diagram, mov, play, sorted, sq};
use gambit::{Board, Color, MoveError, PieceKind};

#[test]
fn twenty_moves_each_side() {
    let board = Board::new();
    assert_eq!(20, board.all_legal_moves(Color::White).len());
    assert_eq!(20, board.all_legal_moves(Color::Black).len());
    assert!(!board.is_check(Color::White));
    assert!(!board.is_check(Color::Black));
}

#[test]
fn knight_from_start() {
    let board = Board::new();
    assert_eq!(
        sorted(&[sq("a3"), sq("c3")]),
        sorted(&board.legal_moves_from(sq("b1")))
    );
}

#[test]
fn blocked_pieces_have_no_moves() {
    let board = Board::new();
    for name in &["a1", "c1", "d1", "e1", "f1", "h1"] {
        assert!(board.legal_moves_from(sq(name)).is_empty(), "{} can move", name);
    }
}

#[test]
fn empty_square_has_no_moves() {
    let board = Board::new();
    assert!(board.legal_moves_from(sq("e4")).is_empty());
}

#[test]
fn pawn_pushes() {
    let board = diagram(
        [
            "....k...", //
            "........", //
            "........", //
            "........", //
            "...n....", //
            "....N...", //
            "...PP..P", //
            "....K...", //
        ],
        Color::White,
    );

    // blocked directly ahead
    assert!(board.legal_moves_from(sq("e2")).is_empty());

    // the two-step needs both squares empty
    assert_eq!(vec![sq("d3")], board.legal_moves_from(sq("d2")).to_vec());
    assert_eq!(
        sorted(&[sq("h3"), sq("h4")]),
        sorted(&board.legal_moves_from(sq("h2")))
    );
}

#[test]
fn pawn_captures_diagonally_only() {
    let board = diagram(
        [
            "....k...", //
            "........", //
            "........", //
            "..p.p...", //
            "...P....", //
            "........", //
            "........", //
            "....K...", //
        ],
        Color::White,
    );

    // a pawn off its starting row has no two-step.
    assert_eq!(
        sorted(&[sq("c5"), sq("d5"), sq("e5")]),
        sorted(&board.legal_moves_from(sq("d4")))
    );
}

#[test]
fn king_cannot_step_into_attack() {
    let board = diagram(
        [
            "k..r....", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "....K...", //
        ],
        Color::White,
    );

    assert_eq!(
        sorted(&[sq("e2"), sq("f1"), sq("f2")]),
        sorted(&board.legal_moves_from(sq("e1")))
    );
}

#[test]
fn absolutely_pinned_piece_cannot_move() {
    let board = diagram(
        [
            "k...r...", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "....B...", //
            "....K...", //
        ],
        Color::White,
    );

    // white is not checked, the bishop is blocking the rook
    assert!(!board.is_check(Color::White));
    assert!(board.legal_moves_from(sq("e2")).is_empty());
}

#[test]
fn pinned_rook_moves_along_the_pin() {
    let board = diagram(
        [
            "k...r...", //
            "........", //
            "........", //
            "........", //
            "....R...", //
            "........", //
            "........", //
            "....K...", //
        ],
        Color::White,
    );

    assert_eq!(
        sorted(&[sq("e2"), sq("e3"), sq("e5"), sq("e6"), sq("e7"), sq("e8")]),
        sorted(&board.legal_moves_from(sq("e4")))
    );
}

#[test]
fn check_must_be_answered() {
    let board = diagram(
        [
            "k...r...", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "N.......", //
            "....K...", //
        ],
        Color::White,
    );

    assert!(board.is_check(Color::White));

    // the knight can't reach the e-file, so only the king moves.
    assert!(board.legal_moves_from(sq("a2")).is_empty());
    for mov in board.all_legal_moves(Color::White) {
        assert_eq!(sq("e1"), mov.from);
        assert_ne!(4, mov.to.col());
    }
}

#[test]
fn legal_moves_never_leave_the_king_in_check() {
    let positions = vec![
        Board::new(),
        play(&["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6"]),
        play(&["d2d4", "e7e6", "c2c4", "f8b4"]),
        play(&["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5e5"]),
    ];

    for board in positions {
        let side = board.side_to_move();
        let moves = board.all_legal_moves(side);
        assert!(!moves.is_empty());
        for mov in moves {
            let mut child = board.clone();
            child.apply_move(mov.from, mov.to).unwrap();
            assert!(!child.is_check(side), "{} leaves {} in check", mov, side);
        }
    }
}

#[test]
fn bishop_check_in_opening() {
    // 1. d4 e6 2. c4 Bb4+: only blocks and king moves answer the check.
    let board = play(&["d2d4", "e7e6", "c2c4", "f8b4"]);
    assert!(board.is_check(Color::White));
    assert_eq!(
        Err(MoveError::IllegalDestination(mov("g1f3"))),
        board.clone().apply_move(sq("g1"), sq("f3"))
    );
    assert!(board.is_legal(mov("b1c3")));
    assert!(board.is_legal(mov("c1d2")));
}

#[test]
fn apply_move_errors() {
    let mut board = Board::new();
    assert_eq!(
        Err(MoveError::EmptySquare(sq("e4"))),
        board.apply_move(sq("e4"), sq("e5"))
    );
    assert_eq!(
        Err(MoveError::WrongSide(sq("e7"))),
        board.apply_move(sq("e7"), sq("e5"))
    );
    assert_eq!(
        Err(MoveError::IllegalDestination(mov("e2e5"))),
        board.apply_move(sq("e2"), sq("e5"))
    );

    // nothing changed
    assert_eq!(Color::White, board.side_to_move());
    assert!(board.history().is_empty());
    assert_eq!(PieceKind::Pawn, board.piece_at(sq("e2")).unwrap().kind);
}

#[test]
fn history_records_captures() {
    let board = play(&["e2e4", "d7d5", "e4d5"]);
    let history = board.history();
    assert_eq!(3, history.len());

    let last = history[2];
    assert_eq!(mov("e4d5"), last.mov);
    assert_eq!(PieceKind::Pawn, last.piece.kind);
    assert_eq!(Color::White, last.piece.color);
    assert_eq!(Some(Color::Black), last.captured.map(|p| p.color));
    assert!(!last.promoted);
    assert!(history[0].captured.is_none());
}

#[test]
fn moved_pieces_track_location() {
    let board = play(&["g1f3", "g8f6", "f3e5"]);
    let knight = board.piece_at(sq("e5")).unwrap();
    assert_eq!(sq("e5"), knight.location);
    assert!(knight.has_moved);
    assert!(board.piece_at(sq("g1")).is_none());
    assert!(board.piece_at(sq("f3")).is_none());
}

#[test]
fn king_location_follows_king() {
    let board = play(&["e2e4", "e7e5", "e1e2", "e8e7"]);
    assert_eq!(Some(sq("e2")), board.king_location(Color::White));
    assert_eq!(Some(sq("e7")), board.king_location(Color::Black));
}
