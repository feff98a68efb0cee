// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Moves are a pair of squares: the square a piece leaves and the square it
//! lands on. There are no special move kinds; captures are implied by the
//! destination being occupied and promotion is always to a queen, so the
//! board itself has everything it needs to apply a move.
//!
//! Moves print and parse in coordinate notation, the source square followed
//! by the destination square (`e2e4`).
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::types::{ParseSquareError, Piece, Square};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Parses a move in coordinate notation, e.g. `g8f6`.
    pub fn from_coordinates(text: &str) -> Result<Move, ParseMoveError> {
        if text.len() != 4 || !text.is_ascii() {
            return Err(ParseMoveError::BadLength);
        }

        let from = Square::from_algebraic(&text[0..2]).map_err(ParseMoveError::Square)?;
        let to = Square::from_algebraic(&text[2..4]).map_err(ParseMoveError::Square)?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        Move::from_coordinates(s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    BadLength,
    Square(ParseSquareError),
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseMoveError::BadLength => write!(f, "a move is two squares, like e2e4"),
            ParseMoveError::Square(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParseMoveError {}

/// A record of one applied move. History is append-only and only kept for
/// record-keeping; it does not carry enough state to undo a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub mov: Move,

    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

#[cfg(test)]
mod tests {
    use super::{Move, ParseMoveError};
    use crate::types::{ParseSquareError, Square};

    #[test]
    fn parse_coordinates() {
        let mov = Move::from_coordinates("e2e4").unwrap();
        assert_eq!(Square::new(6, 4), mov.from);
        assert_eq!(Square::new(4, 4), mov.to);
        assert_eq!("e2e4", mov.to_string());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Err(ParseMoveError::BadLength), "e2e".parse::<Move>());
        assert_eq!(Err(ParseMoveError::BadLength), "e2e4q".parse::<Move>());
        assert_eq!(
            Err(ParseMoveError::Square(ParseSquareError::InvalidRank('0'))),
            "e0e4".parse::<Move>()
        );
    }
}
