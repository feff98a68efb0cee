// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move ordering. Searching likely-good moves first lets alpha-beta cut off
//! more of the tree; it never changes the score a search returns, only how
//! many nodes it visits and which of several equally good moves it reports.
use std::cmp::Reverse;

use crate::board::Board;
use crate::eval::piece_value;
use crate::moves::Move;
use crate::types::Square;

const CENTER_WEIGHT: i32 = 10;

/// Manhattan distance from `sq` to the center point of the board, which
/// sits between the four central squares. Always a whole number: the
/// distance is `|3.5 - row| + |3.5 - col|` and both halves end in `.5`.
pub fn center_distance(sq: Square) -> i32 {
    let row = (7 - 2 * sq.row() as i32).abs();
    let col = (7 - 2 * sq.col() as i32).abs();
    (row + col) / 2
}

/// Captures first, most valuable victim first; otherwise moves toward the
/// center.
pub fn ordering_score(board: &Board, mov: Move) -> i32 {
    let capture = board
        .piece_at(mov.to)
        .map(|victim| piece_value(victim.kind))
        .unwrap_or(0);
    capture + (7 - center_distance(mov.to)) * CENTER_WEIGHT
}

/// Sorts `moves` by descending `ordering_score`. The sort is stable, so
/// moves with equal scores keep their generation order.
pub fn order_moves(board: &Board, moves: &mut Vec<Move>) {
    moves.sort_by_cached_key(|&mov| Reverse(ordering_score(board, mov)));
}
