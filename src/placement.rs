// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `Placement` is the piece-bearing half of a board: the 8x8 grid and the
//! cached location of each king. It is a plain `Copy` value, which is what
//! makes legality testing simple. A candidate move is tried on a copy of the
//! placement and the copy is thrown away, so the real position can never be
//! left half-restored.
use crate::movegen::{self, SquareVec};
use crate::moves::Move;
use crate::types::TableIndex;
use crate::types::{Color, Piece, PieceKind, Square, BACK_RANK};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    grid: [[Option<Piece>; 8]; 8],

    // Denormalized from `grid`. Every operation that moves a king updates
    // this in the same step.
    kings: [Option<Square>; 2],
}

impl Placement {
    pub fn empty() -> Placement {
        Placement {
            grid: [[None; 8]; 8],
            kings: [None; 2],
        }
    }

    /// The standard initial setup.
    pub fn standard() -> Placement {
        let mut placement = Placement::empty();
        for &color in &[Color::Black, Color::White] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                let sq = Square::new(color.back_row(), col as u8);
                placement.put(Piece::new(kind, color, sq));
            }
            for col in 0..8 {
                let sq = Square::new(color.pawn_row(), col);
                placement.put(Piece::new(PieceKind::Pawn, color, sq));
            }
        }
        placement
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    pub fn king_location(&self, color: Color) -> Option<Square> {
        self.kings[color.as_index()]
    }

    /// Puts a piece on the square named by its `location`, replacing whatever
    /// was there.
    pub fn put(&mut self, piece: Piece) {
        let sq = piece.location;
        if let Some(existing) = self.piece_at(sq) {
            if existing.kind == PieceKind::King && self.kings[existing.color.as_index()] == Some(sq)
            {
                self.kings[existing.color.as_index()] = None;
            }
        }

        self.grid[sq.row() as usize][sq.col() as usize] = Some(piece);
        if piece.kind == PieceKind::King {
            self.kings[piece.color.as_index()] = Some(sq);
        }
    }

    /// Moves the piece on `from` to `to`, keeping its `location` and the king
    /// cache in sync, and returns the piece that stood on `to`, if any.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.grid[from.row() as usize][from.col() as usize].take()?;
        let captured = self.grid[to.row() as usize][to.col() as usize].take();
        piece.location = to;
        if piece.kind == PieceKind::King {
            self.kings[piece.color.as_index()] = Some(to);
        }
        self.grid[to.row() as usize][to.col() as usize] = Some(piece);
        captured
    }

    /// Mutable access to the piece on `sq`, for bookkeeping that doesn't
    /// change which square it stands on.
    pub(crate) fn piece_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.grid[sq.row() as usize][sq.col() as usize].as_mut()
    }

    /// All pieces, in row-major then column-major scan order.
    pub fn pieces<'a>(&'a self) -> impl Iterator<Item = Piece> + 'a {
        self.grid.iter().flat_map(|row| row.iter().filter_map(|&cell| cell))
    }

    pub fn pieces_of<'a>(&'a self, color: Color) -> impl Iterator<Item = Piece> + 'a {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn pseudo_moves(&self, piece: &Piece) -> SquareVec {
        movegen::pseudo_moves(self, piece)
    }

    /// Whether any piece of the other color has the king of `color` among
    /// its pseudo-legal destinations. A placement with no king of `color` is
    /// never in check.
    pub fn is_check(&self, color: Color) -> bool {
        let king = match self.king_location(color) {
            Some(sq) => sq,
            None => return false,
        };

        self.pieces_of(color.toggle())
            .any(|attacker| self.pseudo_moves(&attacker).contains(&king))
    }

    /// Whether moving `piece` to `to` would leave its own king in check. The
    /// trial is made on a copy, so `self` is untouched on every path.
    pub fn leaves_king_in_check(&self, piece: &Piece, to: Square) -> bool {
        let mut trial = *self;
        trial.relocate(piece.location, to);
        trial.is_check(piece.color)
    }

    /// Pseudo-legal destinations of `piece` that don't leave its own king in
    /// check.
    pub fn legal_moves(&self, piece: &Piece) -> SquareVec {
        self.pseudo_moves(piece)
            .into_iter()
            .filter(|&to| !self.leaves_king_in_check(piece, to))
            .collect()
    }

    /// Every legal move of `color`, grouped by piece in scan order.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.pieces_of(color) {
            for to in self.legal_moves(&piece) {
                moves.push(Move::new(piece.location, to));
            }
        }
        moves
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color).any(|piece| {
            self.pseudo_moves(&piece)
                .into_iter()
                .any(|to| !self.leaves_king_in_check(&piece, to))
        })
    }
}

impl Default for Placement {
    fn default() -> Self {
        Placement::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Placement;
    use crate::types::{Color, Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn standard_kings() {
        let placement = Placement::standard();
        assert_eq!(Some(sq("e1")), placement.king_location(Color::White));
        assert_eq!(Some(sq("e8")), placement.king_location(Color::Black));
        assert_eq!(32, placement.pieces().count());
    }

    #[test]
    fn standard_back_rank_order() {
        let placement = Placement::standard();
        let kinds: Vec<_> = (0..8)
            .map(|col| placement.piece_at(Square::new(0, col)).unwrap().kind)
            .collect();
        assert_eq!(
            vec![
                PieceKind::Rook,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Queen,
                PieceKind::King,
                PieceKind::Bishop,
                PieceKind::Knight,
                PieceKind::Rook,
            ],
            kinds
        );
    }

    #[test]
    fn relocate_tracks_king() {
        let mut placement = Placement::empty();
        placement.put(Piece::new(PieceKind::King, Color::Black, sq("e8")));
        placement.put(Piece::new(PieceKind::Rook, Color::White, sq("d7")));

        let captured = placement.relocate(sq("e8"), sq("d7"));
        assert_eq!(PieceKind::Rook, captured.unwrap().kind);
        assert_eq!(Some(sq("d7")), placement.king_location(Color::Black));
        assert_eq!(sq("d7"), placement.piece_at(sq("d7")).unwrap().location);
        assert!(placement.piece_at(sq("e8")).is_none());
    }

    #[test]
    fn trial_move_leaves_placement_untouched() {
        let mut placement = Placement::empty();
        placement.put(Piece::new(PieceKind::King, Color::White, sq("e1")));
        placement.put(Piece::new(PieceKind::Bishop, Color::White, sq("e2")));
        placement.put(Piece::new(PieceKind::Rook, Color::Black, sq("e8")));
        let before = placement;

        let bishop = placement.piece_at(sq("e2")).unwrap();
        assert!(placement.leaves_king_in_check(&bishop, sq("d3")));
        assert!(placement.legal_moves(&bishop).is_empty());

        let king = placement.piece_at(sq("e1")).unwrap();
        assert!(!placement.leaves_king_in_check(&king, sq("f1")));
        assert_eq!(before, placement);
    }

    #[test]
    fn pieces_scan_in_row_major_order() {
        let placement = Placement::standard();
        let first: Vec<_> = placement.pieces().take(9).map(|p| p.location).collect();
        assert_eq!(sq("a8"), first[0]);
        assert_eq!(sq("h8"), first[7]);
        assert_eq!(sq("a7"), first[8]);
    }
}
