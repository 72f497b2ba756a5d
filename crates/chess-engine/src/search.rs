//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes the [`evaluate`] score. The root tries
//! every legal move of the side to move and runs a full-window minimax of
//! `depth` plies below each one, so the effective lookahead is one move more
//! than the configured depth. Moves are searched in generation order and ties
//! keep the first move found, which makes the result deterministic.

use crate::check::is_king_in_check;
use crate::eval::evaluate;
use crate::movegen::all_legal_moves;
use crate::Board;
use chess_core::{Color, Move};

/// Score of a checkmate, before the bonus for mating sooner.
pub const MATE_SCORE: i32 = 1_000_000;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Minimax value of the chosen move (White's point of view).
    pub score: i32,
    /// Nodes visited below the root.
    pub nodes: u64,
}

/// Search state
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Plies searched below each root move unless configured otherwise.
    pub const DEFAULT_DEPTH: u8 = 3;

    /// Deepest search a front end may request.
    pub const MAX_DEPTH: u8 = 6;

    /// Creates a searcher for `depth` plies below each root move.
    pub fn new(depth: u8) -> Self {
        Searcher { depth, nodes: 0 }
    }

    /// Returns the configured depth.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Picks the move for `side`: the minimum for Black, the maximum for White.
    pub fn best_move(&mut self, board: &Board, side: Color) -> SearchResult {
        self.nodes = 0;
        let moves = all_legal_moves(board, side);

        let mut best: Option<(Move, i32)> = None;
        for &m in &moves {
            let child = board.with_move(m);
            let score = self.minimax(&child, self.depth, i32::MIN, i32::MAX, side.opposite());
            let improves = match best {
                None => true,
                Some((_, current)) => match side {
                    Color::White => score > current,
                    Color::Black => score < current,
                },
            };
            if improves {
                best = Some((m, score));
            }
        }

        let result = SearchResult {
            best_move: best.map(|(m, _)| m),
            score: best.map_or_else(|| evaluate(board), |(_, s)| s),
            nodes: self.nodes,
        };
        tracing::debug!(
            side = %side,
            depth = self.depth,
            nodes = result.nodes,
            score = result.score,
            best = ?result.best_move,
            "search finished"
        );
        result
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        to_move: Color,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(board);
        }

        let moves = all_legal_moves(board, to_move);
        if moves.is_empty() {
            return if is_king_in_check(board, to_move) {
                // Prefer faster mates
                -to_move.sign() * (MATE_SCORE + depth as i32)
            } else {
                0
            };
        }

        match to_move {
            Color::White => {
                let mut best = i32::MIN;
                for &m in &moves {
                    let score = self.minimax(&board.with_move(m), depth - 1, alpha, beta, Color::Black);
                    best = best.max(score);
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
            Color::Black => {
                let mut best = i32::MAX;
                for &m in &moves {
                    let score = self.minimax(&board.with_move(m), depth - 1, alpha, beta, Color::White);
                    best = best.min(score);
                    beta = beta.min(score);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::legal_moves;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn black_takes_a_hanging_queen() {
        let b = board("4k3/8/8/3Q4/8/8/7K/3r4");
        let mut searcher = Searcher::new(1);
        let result = searcher.best_move(&b, Color::Black);
        assert_eq!(result.best_move, Move::from_uci("d1d5"));
        assert!(result.score < 0);
    }

    #[test]
    fn white_mates_in_one() {
        // Qe7 is mate with the king on e6 guarding it
        let b = board("4k3/8/4K3/8/8/8/8/7Q");
        let mut searcher = Searcher::new(1);
        let result = searcher.best_move(&b, Color::White);
        let mate = result.best_move.unwrap();
        let after = b.with_move(mate);
        assert!(crate::is_checkmate(&after, Color::Black), "{} is not mate", mate);
        assert!(result.score >= MATE_SCORE);
    }

    #[test]
    fn no_moves_means_no_best_move() {
        let b = board("7k/5Q2/6K1/8/8/8/8/8");
        let result = Searcher::new(2).best_move(&b, Color::Black);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn chosen_move_is_legal() {
        let b = Board::initial().with_move(Move::from_uci("e2e4").unwrap());
        let result = Searcher::new(2).best_move(&b, Color::Black);
        let m = result.best_move.unwrap();
        assert!(b.is_color(m.from(), Color::Black));
        assert!(legal_moves(&b, m.from()).contains(m.to()));
        assert!(result.nodes > 0);
    }

    #[test]
    fn search_is_deterministic() {
        let b = board("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R");
        let first = Searcher::new(2).best_move(&b, Color::Black);
        let second = Searcher::new(2).best_move(&b, Color::Black);
        assert_eq!(first, second);
    }

    #[test]
    fn ties_keep_the_first_move() {
        // Two bare kings: every move evaluates to zero
        let b = board("k7/8/8/8/8/8/8/7K");
        let result = Searcher::new(1).best_move(&b, Color::Black);
        let first = all_legal_moves(&b, Color::Black).as_slice()[0];
        assert_eq!(result.best_move, Some(first));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn default_depth_is_three() {
        assert_eq!(Searcher::default().depth(), 3);
    }
}
