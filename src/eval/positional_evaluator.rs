// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::eval::tables::{piece_value, position_value};
use crate::eval::{BoardEvaluator, Score};
use crate::types::Color;

const DECIDED_WEIGHT: i32 = 10000;
const CHECK_WEIGHT: i32 = 50;
const MOBILITY_WEIGHT: i32 = 10;

/// Material plus piece-square tables, a bonus for checking the opponent's
/// king, and mobility.
pub struct PositionalEvaluator;

impl PositionalEvaluator {
    pub fn new() -> PositionalEvaluator {
        PositionalEvaluator
    }
}

impl Default for PositionalEvaluator {
    fn default() -> PositionalEvaluator {
        PositionalEvaluator
    }
}

impl BoardEvaluator for PositionalEvaluator {
    fn evaluate(&self, board: &Board, engine: Color) -> Score {
        let opponent = engine.toggle();
        if board.is_over() {
            let score = match board.winner() {
                Some(winner) if winner == engine => DECIDED_WEIGHT,
                Some(_) => -DECIDED_WEIGHT,
                None => 0,
            };
            return Score::Evaluated(score);
        }

        let mut score = 0;
        for piece in board.pieces() {
            let value = piece_value(piece.kind)
                + position_value(piece.kind, piece.color, piece.location);
            if piece.color == engine {
                score += value;
            } else {
                score -= value;
            }
        }

        if board.is_check(opponent) {
            score += CHECK_WEIGHT;
        }
        if board.is_check(engine) {
            score -= CHECK_WEIGHT;
        }

        let engine_mobility = board.all_legal_moves(engine).len() as i32;
        let opponent_mobility = board.all_legal_moves(opponent).len() as i32;
        score += (engine_mobility - opponent_mobility) * MOBILITY_WEIGHT;

        Score::Evaluated(score)
    }
}
