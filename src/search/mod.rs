// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::eval::{PositionalEvaluator, Score};
use crate::moves::Move;
use crate::types::Color;

mod alpha_beta;
mod ordering;

pub use alpha_beta::AlphaBetaSearcher;
pub use ordering::{center_distance, order_moves, ordering_score};

/// Which side the engine plays and how many plies it looks ahead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub engine_color: Color,
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            engine_color: Color::Black,
            depth: 3,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// `None` when the side to move had no legal moves at the root, or when
    /// the search depth was zero.
    pub best_move: Option<Move>,
    pub score: Score,
    pub nodes_searched: u64,
}

pub trait Searcher {
    /// Searches `board` for the engine's best move. Returns `None` without
    /// searching if it isn't the engine's turn.
    fn search(&mut self, board: &Board) -> Option<SearchResult>;
}

/// The engine's chosen move for Black, searching `depth` plies. Returns
/// `None` when White is to move.
pub fn best_move(board: &Board, depth: u32) -> Option<Move> {
    let config = SearchConfig {
        engine_color: Color::Black,
        depth,
    };
    let mut searcher: AlphaBetaSearcher<PositionalEvaluator> = AlphaBetaSearcher::new(config);
    searcher.search(board).and_then(|result| result.best_move)
}
