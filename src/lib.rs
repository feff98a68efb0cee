// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A two-player chess rules engine with an alpha-beta search opponent.
//!
//! The rules engine lives in `Board`: legal move generation, check, checkmate
//! and stalemate detection, and move application. The search engine
//! (`search`) picks a move for the engine's side by depth-limited minimax with
//! alpha-beta pruning over independent copies of the board.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod board;
pub mod eval;
pub mod game;
mod movegen;
mod moves;
mod perft;
mod placement;
pub mod search;
mod types;

pub use board::{Board, GameStatus, MoveError, SetupError};
pub use movegen::SquareVec;
pub use moves::{HistoryEntry, Move, ParseMoveError};
pub use perft::perft;
pub use placement::Placement;
pub use search::best_move;
pub use types::{Color, ParseSquareError, Piece, PieceKind, Square, TableIndex};
pub use types::{COLORS, PIECE_KINDS};
