// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![allow(dead_code)]

use gambit::{Board, Color, Move, PieceKind, Square};

pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

pub fn mov(text: &str) -> Move {
    Move::from_coordinates(text).unwrap()
}

/// Plays coordinate moves from the initial position.
pub fn play(moves: &[&str]) -> Board {
    let mut board = Board::new();
    for text in moves {
        let mov = mov(text);
        board.apply_move(mov.from, mov.to).unwrap();
    }

    board
}

/// Builds a board from a diagram, rank 8 first. Uppercase letters are white
/// pieces, lowercase are black and `.` is an empty square.
pub fn diagram(rows: [&str; 8], side_to_move: Color) -> Board {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(8, line.len(), "bad diagram row: {}", line);
        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }

            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => panic!("bad diagram piece: {}", ch),
            };
            board
                .place(kind, color, Square::new(row as u8, col as u8))
                .unwrap();
        }
    }

    board.set_side_to_move(side_to_move);
    board.refresh_status();
    board
}

pub fn sorted(squares: &[Square]) -> Vec<Square> {
    let mut squares = squares.to_vec();
    squares.sort();
    squares
}
