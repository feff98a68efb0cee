// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation. The functions here only know about piece
//! geometry and occupancy; they never ask whether the mover's king is left
//! in check. That makes them safe to call from check detection itself.
//!
//! Destinations are produced in a fixed order per piece kind (the order of
//! the offset and ray tables below). Move ordering in the search sorts
//! stably, so this order decides ties there.
use arrayvec::ArrayVec;

use crate::placement::Placement;
use crate::types::{Piece, PieceKind, Square};

/// Destinations of a single piece. A queen in the middle of an empty board
/// has 27 of them, the most any piece can have.
pub type SquareVec = ArrayVec<[Square; 32]>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// On-board destinations of a jumping piece for every square, ignoring
/// occupancy.
struct JumpTable {
    table: Vec<ArrayVec<[Square; 8]>>,
}

impl JumpTable {
    fn new(offsets: &[(i8, i8)]) -> JumpTable {
        let table = Square::all()
            .map(|sq| {
                offsets
                    .iter()
                    .filter_map(|&(dr, dc)| sq.offset(dr, dc))
                    .collect()
            })
            .collect();
        JumpTable { table }
    }

    fn targets(&self, sq: Square) -> &[Square] {
        &self.table[sq.as_index()]
    }
}

lazy_static! {
    static ref KNIGHT_TABLE: JumpTable = JumpTable::new(&KNIGHT_OFFSETS);
    static ref KING_TABLE: JumpTable = JumpTable::new(&KING_OFFSETS);
}

/// Geometry-only candidate destinations for `piece`, which must be standing
/// on its `location` in `placement`.
pub fn pseudo_moves(placement: &Placement, piece: &Piece) -> SquareVec {
    let mut moves = SquareVec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(placement, piece, &mut moves),
        PieceKind::Knight => jump_moves(placement, piece, &KNIGHT_TABLE, &mut moves),
        PieceKind::Bishop => ray_moves(placement, piece, &BISHOP_RAYS, &mut moves),
        PieceKind::Rook => ray_moves(placement, piece, &ROOK_RAYS, &mut moves),
        PieceKind::Queen => {
            ray_moves(placement, piece, &ROOK_RAYS, &mut moves);
            ray_moves(placement, piece, &BISHOP_RAYS, &mut moves);
        }
        PieceKind::King => jump_moves(placement, piece, &KING_TABLE, &mut moves),
    }
    moves
}

fn pawn_moves(placement: &Placement, piece: &Piece, moves: &mut SquareVec) {
    let forward = piece.color.forward();
    if let Some(single) = piece.location.offset(forward, 0) {
        if placement.piece_at(single).is_none() {
            moves.push(single);

            // The two-step is only reachable through an empty first step.
            if !piece.has_moved {
                if let Some(double) = piece.location.offset(2 * forward, 0) {
                    if placement.piece_at(double).is_none() {
                        moves.push(double);
                    }
                }
            }
        }
    }

    for &dc in &[-1, 1] {
        if let Some(target) = piece.location.offset(forward, dc) {
            match placement.piece_at(target) {
                Some(victim) if victim.color != piece.color => moves.push(target),
                _ => {}
            }
        }
    }
}

fn jump_moves(placement: &Placement, piece: &Piece, table: &JumpTable, moves: &mut SquareVec) {
    for &target in table.targets(piece.location) {
        match placement.piece_at(target) {
            Some(other) if other.color == piece.color => {}
            _ => moves.push(target),
        }
    }
}

fn ray_moves(placement: &Placement, piece: &Piece, rays: &[(i8, i8)], moves: &mut SquareVec) {
    for &(dr, dc) in rays {
        let mut cursor = piece.location;
        while let Some(next) = cursor.offset(dr, dc) {
            match placement.piece_at(next) {
                None => moves.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}
