// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::movegen::SquareVec;
use crate::moves::{HistoryEntry, Move};
use crate::placement::Placement;
use crate::types::{Color, Piece, PieceKind, Square};

/// Reasons `Board::apply_move` can refuse a move. A refused move leaves the
/// board exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// There is no piece on the source square.
    EmptySquare(Square),

    /// The piece on the source square doesn't belong to the side to move.
    WrongSide(Square),

    /// The destination isn't among the piece's legal moves.
    IllegalDestination(Move),

    /// The game has already ended in checkmate or stalemate.
    GameAlreadyOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::EmptySquare(sq) => write!(f, "no piece on {}", sq),
            MoveError::WrongSide(sq) => write!(f, "the piece on {} can't move this turn", sq),
            MoveError::IllegalDestination(mov) => write!(f, "{} is not a legal move", mov),
            MoveError::GameAlreadyOver => write!(f, "the game is over"),
        }
    }
}

impl Error for MoveError {}

/// Possible errors that can arise when setting up a position by hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    Occupied(Square),
    SecondKing(Color),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetupError::Occupied(sq) => write!(f, "{} is already occupied", sq),
            SetupError::SecondKing(color) => write!(f, "{} already has a king", color),
        }
    }
}

impl Error for SetupError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// A chess position together with its game state: whose turn it is, whether
/// the game has ended, and the moves that led here.
#[derive(Clone, Debug)]
pub struct Board {
    placement: Placement,
    side_to_move: Color,
    is_over: bool,

    // `None` with `is_over` set means the game was drawn.
    winner: Option<Color>,
    history: Vec<HistoryEntry>,
}

//
// Construction and setup
//

impl Board {
    /// A board in the standard initial position, White to move.
    pub fn new() -> Board {
        Board::with_placement(Placement::standard())
    }

    /// A board with no pieces on it, White to move. Useful for setting up
    /// test positions with `place`; a board needs both kings before any of
    /// the rules operations make sense.
    pub fn empty() -> Board {
        Board::with_placement(Placement::empty())
    }

    fn with_placement(placement: Placement) -> Board {
        Board {
            placement,
            side_to_move: Color::White,
            is_over: false,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Adds a piece to the board. Pawns off their starting row are treated as
    /// having moved, so they don't get a two-step.
    pub fn place(&mut self, kind: PieceKind, color: Color, sq: Square) -> Result<(), SetupError> {
        if self.placement.piece_at(sq).is_some() {
            return Err(SetupError::Occupied(sq));
        }

        if kind == PieceKind::King && self.placement.king_location(color).is_some() {
            return Err(SetupError::SecondKing(color));
        }

        let mut piece = Piece::new(kind, color, sq);
        piece.has_moved = kind == PieceKind::Pawn && sq.row() != color.pawn_row();
        self.placement.put(piece);
        Ok(())
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Evaluates the terminal status rule for the side to move: no legal
    /// moves means checkmate if that side is in check and stalemate
    /// otherwise. `apply_move` does this after every move; set-up positions
    /// call it once after placing their pieces.
    pub fn refresh_status(&mut self) {
        let side = self.side_to_move;
        if self.placement.has_legal_move(side) {
            return;
        }

        self.is_over = true;
        self.winner = if self.placement.is_check(side) {
            Some(side.toggle())
        } else {
            None
        };
    }
}

//
// Board state getters
//

impl Board {
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.placement.piece_at(sq)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The square of the king of `color`. Only `None` while a board is being
    /// set up.
    pub fn king_location(&self, color: Color) -> Option<Square> {
        self.placement.king_location(color)
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        match (self.is_over, self.winner) {
            (false, _) => GameStatus::Ongoing,
            (true, Some(winner)) => GameStatus::Checkmate { winner },
            (true, None) => GameStatus::Stalemate,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn pieces<'a>(&'a self) -> impl Iterator<Item = Piece> + 'a {
        self.placement.pieces()
    }
}

//
// Move generation and check detection
//

impl Board {
    /// Geometry-only destinations of `piece`, ignoring checks on its king.
    pub fn pseudo_moves(&self, piece: &Piece) -> SquareVec {
        self.placement.pseudo_moves(piece)
    }

    /// Destinations of `piece` that don't leave its own king in check.
    pub fn legal_moves(&self, piece: &Piece) -> SquareVec {
        self.placement.legal_moves(piece)
    }

    /// Legal destinations of whatever piece stands on `sq`, regardless of
    /// whose turn it is. Empty if the square is empty.
    pub fn legal_moves_from(&self, sq: Square) -> SquareVec {
        match self.placement.piece_at(sq) {
            Some(piece) => self.placement.legal_moves(&piece),
            None => SquareVec::new(),
        }
    }

    pub fn is_check(&self, color: Color) -> bool {
        self.placement.is_check(color)
    }

    /// Every legal move of `color`, piece by piece in row-major scan order.
    /// The order is stable and the search relies on it to break ties.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.placement.all_legal_moves(color)
    }

    /// Move legality test: the move must start on a piece of the side to move
    /// and land on one of that piece's legal destinations.
    pub fn is_legal(&self, mov: Move) -> bool {
        self.check_move(mov).is_ok()
    }

    fn check_move(&self, mov: Move) -> Result<(), MoveError> {
        if self.is_over {
            return Err(MoveError::GameAlreadyOver);
        }

        let piece = self
            .placement
            .piece_at(mov.from)
            .ok_or(MoveError::EmptySquare(mov.from))?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide(mov.from));
        }

        if !self.placement.legal_moves(&piece).contains(&mov.to) {
            return Err(MoveError::IllegalDestination(mov));
        }

        Ok(())
    }
}

//
// Move application
//

impl Board {
    /// Applies a move from `from` to `to` for the side to move. On success
    /// the turn passes to the other side and the terminal status is
    /// re-evaluated for it.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let mov = Move::new(from, to);
        self.check_move(mov)?;
        self.make_move(mov);
        Ok(())
    }

    /// Applies a move already known to be legal, skipping validation. The
    /// search and perft use this on moves straight out of `all_legal_moves`.
    /// A move whose source square is empty is logged and ignored.
    pub(crate) fn make_move(&mut self, mov: Move) {
        let piece = match self.placement.piece_at(mov.from) {
            Some(piece) => piece,
            None => {
                warn!("ignoring move {} from an empty square", mov);
                return;
            }
        };
        let captured = self.placement.relocate(mov.from, mov.to);

        let mut promoted = false;
        if let Some(moved) = self.placement.piece_mut(mov.to) {
            moved.has_moved = true;
            if moved.kind == PieceKind::Pawn && mov.to.row() == moved.color.promotion_row() {
                moved.kind = PieceKind::Queen;
                promoted = true;
            }
        }

        trace!("{} {} {}", piece.color, piece.kind, mov);
        self.history.push(HistoryEntry {
            mov,
            piece,
            captured,
            promoted,
        });

        self.side_to_move = self.side_to_move.toggle();
        self.refresh_status();
    }
}

//
// Trait implementations
//

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                if let Some(piece) = self.placement.piece_at(Square::new(row, col)) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", 8 - row)?;
        }

        for _ in 0..8 {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for file in "abcdefgh".chars() {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
