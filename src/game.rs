// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The interactive game: one long-lived board, the player's current piece
//! selection, and an optional engine opponent.
//!
//! A front end drives a `Game` with two kinds of input. Square clicks go
//! through `click`, which either selects a piece (reporting where it may go)
//! or moves the selected piece. After every human move the front end calls
//! `engine_turn`, which lets the engine reply if it is its turn.
use crate::board::{Board, GameStatus, MoveError};
use crate::eval::PositionalEvaluator;
use crate::movegen::SquareVec;
use crate::moves::Move;
use crate::search::{AlphaBetaSearcher, SearchConfig, Searcher};
use crate::types::Square;

/// What a click on the board did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The selected piece moved to the clicked square.
    Moved(Move),

    /// The clicked square holds a piece of the side to move, which is now
    /// selected. Carries its legal destinations.
    Selected(SquareVec),

    /// Nothing is selected any more.
    Cleared,

    /// The click was not accepted: the game is over, or the engine is to
    /// move.
    Ignored,
}

pub struct Game {
    board: Board,
    opponent: Option<SearchConfig>,
    selected: Option<Square>,
    targets: SquareVec,
}

impl Game {
    /// Starts a game from the initial position. With `opponent` set, the
    /// engine plays the configured side; without it both sides are human.
    pub fn new(opponent: Option<SearchConfig>) -> Game {
        Game {
            board: Board::new(),
            opponent,
            selected: None,
            targets: SquareVec::new(),
        }
    }

    /// Throws the current game away and starts over with the same opponent.
    pub fn restart(&mut self) {
        info!("restarting game");
        self.board = Board::new();
        self.clear_selection();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn opponent(&self) -> Option<SearchConfig> {
        self.opponent
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations of the selected piece.
    pub fn targets(&self) -> &[Square] {
        &self.targets
    }

    /// True when the configured engine, if any, is to move in an unfinished
    /// game.
    pub fn is_engine_turn(&self) -> bool {
        match self.opponent {
            Some(config) => {
                !self.board.is_over() && self.board.side_to_move() == config.engine_color
            }
            None => false,
        }
    }

    /// Selects the piece on `sq` if it belongs to the side to move,
    /// otherwise clears the selection.
    pub fn select(&mut self, sq: Square) -> ClickOutcome {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.board.side_to_move() => {
                self.selected = Some(sq);
                self.targets = self.board.legal_moves(&piece);
                ClickOutcome::Selected(self.targets.clone())
            }
            _ => {
                self.clear_selection();
                ClickOutcome::Cleared
            }
        }
    }

    /// Handles a click on `sq`. A click on one of the selected piece's
    /// destinations moves it there; any other click re-selects.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        if self.board.is_over() || self.is_engine_turn() {
            return ClickOutcome::Ignored;
        }

        if let Some(from) = self.selected {
            if self.targets.contains(&sq) {
                let mov = Move::new(from, sq);
                self.board.make_move(mov);
                self.after_move(mov);
                return ClickOutcome::Moved(mov);
            }
        }

        self.select(sq)
    }

    /// Plays a move given directly rather than through clicks.
    pub fn play(&mut self, mov: Move) -> Result<(), MoveError> {
        self.board.apply_move(mov.from, mov.to)?;
        self.after_move(mov);
        Ok(())
    }

    /// Lets the engine reply if it is its turn, returning the move it made.
    pub fn engine_turn(&mut self) -> Option<Move> {
        if !self.is_engine_turn() {
            return None;
        }

        let config = self.opponent?;
        let mut searcher: AlphaBetaSearcher<PositionalEvaluator> = AlphaBetaSearcher::new(config);
        let mov = searcher.search(&self.board)?.best_move?;
        self.board.make_move(mov);
        self.after_move(mov);
        Some(mov)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    fn after_move(&mut self, mov: Move) {
        self.clear_selection();
        match self.board.status() {
            GameStatus::Checkmate { winner } => info!("{} checkmates with {}", winner, mov),
            GameStatus::Stalemate => info!("stalemate after {}", mov),
            GameStatus::Ongoing => {}
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new(Some(SearchConfig::default()))
    }
}
