// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::types::Color;

mod positional_evaluator;
mod score;
mod tables;

pub use positional_evaluator::PositionalEvaluator;
pub use score::Score;
pub use tables::{piece_value, position_value};

/// A static evaluation function. Scores are relative to `engine`: positive
/// scores are good for the engine's side.
pub trait BoardEvaluator: Default {
    fn evaluate(&self, board: &Board, engine: Color) -> Score;
}
