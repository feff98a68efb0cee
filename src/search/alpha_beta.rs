// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::eval::{BoardEvaluator, Score};
use crate::moves::Move;
use crate::search::ordering;
use crate::search::{SearchConfig, SearchResult, Searcher};

/// Depth-limited minimax with alpha-beta pruning. Every node works on its
/// own copy of the board, so nothing is ever unmade.
pub struct AlphaBetaSearcher<E> {
    evaluator: E,
    config: SearchConfig,
    nodes_searched: u64,
}

impl<E: BoardEvaluator> AlphaBetaSearcher<E> {
    pub fn new(config: SearchConfig) -> AlphaBetaSearcher<E> {
        AlphaBetaSearcher {
            evaluator: Default::default(),
            config,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Number of `minimax` calls since the last `search`.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Scores `board` from the engine's point of view, searching `depth`
    /// plies. `maximizing` is true at nodes where the engine's side picks
    /// the move. Returns the best score found and the move that reached it;
    /// the move is `None` at leaves and at nodes with no legal moves.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Score, Option<Move>) {
        self.nodes_searched += 1;
        if depth == 0 || board.is_over() {
            let score = self.evaluator.evaluate(board, self.config.engine_color);
            return (score, None);
        }

        let side = board.side_to_move();
        let mut moves = board.all_legal_moves(side);
        if moves.is_empty() {
            // Only reachable on a board whose status was never refreshed;
            // checkmate is the worst outcome for whoever is choosing here.
            if board.is_check(side) {
                let mated = if maximizing { Score::Loss } else { Score::Win };
                return (mated, None);
            }

            return (Score::Evaluated(0), None);
        }

        ordering::order_moves(board, &mut moves);
        let mut best_score = if maximizing { Score::Loss } else { Score::Win };
        let mut best_move = None;
        for mov in moves {
            let mut child = board.clone();
            child.make_move(mov);
            let (score, _) = self.minimax(&child, depth - 1, alpha, beta, !maximizing);
            if depth == self.config.depth {
                debug!("root move {} scores {}", mov, score);
            } else {
                trace!("depth {}: {} scores {}", depth, mov, score);
            }

            // The first move always sets the running best, even if every
            // move is scored as a loss.
            if maximizing {
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }
}

impl<E: BoardEvaluator> Searcher for AlphaBetaSearcher<E> {
    fn search(&mut self, board: &Board) -> Option<SearchResult> {
        if board.side_to_move() != self.config.engine_color {
            debug!(
                "not searching: {} to move, engine plays {}",
                board.side_to_move(),
                self.config.engine_color
            );
            return None;
        }

        self.nodes_searched = 0;
        let depth = self.config.depth;
        let (score, best_move) = self.minimax(board, depth, Score::Loss, Score::Win, true);
        match best_move {
            Some(mov) => info!(
                "depth {}: best move {} ({}), {} nodes",
                depth, mov, score, self.nodes_searched
            ),
            None => info!("depth {}: no move ({})", depth, score),
        }

        Some(SearchResult {
            best_move,
            score,
            nodes_searched: self.nodes_searched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AlphaBetaSearcher;
    use crate::board::Board;
    use crate::eval::{PositionalEvaluator, Score};
    use crate::moves::Move;
    use crate::search::{SearchConfig, Searcher};
    use crate::types::{Color, PieceKind, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn searcher(depth: u32) -> AlphaBetaSearcher<PositionalEvaluator> {
        AlphaBetaSearcher::new(SearchConfig {
            engine_color: Color::Black,
            depth,
        })
    }

    #[test]
    fn refuses_to_move_for_white() {
        let board = Board::new();
        assert!(searcher(2).search(&board).is_none());
        assert_eq!(0, searcher(2).nodes_searched());
    }

    #[test]
    fn depth_zero_is_static_evaluation() {
        let mut board = Board::new();
        board.apply_move(sq("e2"), sq("e4")).unwrap();

        let mut search = searcher(0);
        let result = search.search(&board).unwrap();
        assert_eq!(None, result.best_move);
        assert_eq!(1, result.nodes_searched);
    }

    #[test]
    fn mated_at_root_is_a_loss() {
        // a set-up position whose status was never refreshed.
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, sq("h8")).unwrap();
        board.place(PieceKind::Queen, Color::White, sq("g7")).unwrap();
        board.place(PieceKind::King, Color::White, sq("f6")).unwrap();
        board.set_side_to_move(Color::Black);
        assert!(!board.is_over());

        let mut search = searcher(3);
        assert_eq!((Score::Loss, None), search.minimax(&board, 3, Score::Loss, Score::Win, true));
        assert_eq!((Score::Win, None), search.minimax(&board, 3, Score::Loss, Score::Win, false));
    }

    #[test]
    fn stalemate_at_root_is_zero() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, sq("h8")).unwrap();
        board.place(PieceKind::Queen, Color::White, sq("g6")).unwrap();
        board.place(PieceKind::King, Color::White, sq("f7")).unwrap();
        board.set_side_to_move(Color::Black);

        let mut search = searcher(2);
        let result = search.search(&board).unwrap();
        assert_eq!(Score::Evaluated(0), result.score);
        assert_eq!(None, result.best_move);
    }

    #[test]
    fn takes_hanging_queen() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, sq("e8")).unwrap();
        board.place(PieceKind::Rook, Color::Black, sq("a4")).unwrap();
        board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
        board.place(PieceKind::Queen, Color::White, sq("h4")).unwrap();
        board.set_side_to_move(Color::Black);

        for depth in 1..3 {
            let result = searcher(depth).search(&board).unwrap();
            assert_eq!(Some(Move::new(sq("a4"), sq("h4"))), result.best_move);
        }
    }
}
