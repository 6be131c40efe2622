//! Fixed-depth alpha-beta search
//!
//! A single full-width pass over the root moves, with minimax + alpha-beta
//! pruning below, a depth-gated transposition table, and a capture-only
//! quiescence extension at the horizon. No iterative deepening and no time
//! management: the caller picks a depth, the searcher returns a move.

use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Chess, Color, Move, Position};

use super::eval::evaluate;
use super::tt::TranspositionTable;

pub const INFINITY: i32 = 1_000_000;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: i32 = 3;

/// Quiescence recursion cap beyond the horizon.
const QS_MAX_PLY: i32 = 3;

fn get_hash(pos: &Chess) -> u64 {
    let z: Zobrist64 = pos.zobrist_hash(shakmaty::EnPassantMode::Legal);
    z.0
}

/// Legal moves with captures ahead of quiet moves. The sort is stable, so
/// generation order is preserved within each class.
fn ordered_moves(pos: &Chess) -> Vec<Move> {
    let mut moves: Vec<Move> = pos.legal_moves().into_iter().collect();
    moves.sort_by_key(|m| !m.is_capture());
    moves
}

#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
}

pub struct Searcher {
    depth: i32,
    tt: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(depth: i32) -> Self {
        Searcher {
            depth: depth.max(1),
            tt: TranspositionTable::default(),
            stats: SearchStats::default(),
        }
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn set_hash_size(&mut self, size_mb: usize) {
        self.tt = TranspositionTable::new(size_mb);
    }

    pub fn clear(&mut self) {
        self.tt.clear();
        self.stats = SearchStats::default();
    }

    /// Pick the best move for the side to move, or `None` if the position
    /// has no legal moves (the caller should treat that as game over).
    ///
    /// Every root move is fully explored; the root window still narrows so
    /// the subtrees below prune. Ties keep the first move found, which
    /// makes the choice deterministic for a fixed position and depth.
    pub fn select_best_move(&mut self, pos: &Chess) -> Option<Move> {
        self.stats = SearchStats::default();
        self.tt.new_search();

        let is_white = pos.turn() == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best_move: Option<Move> = None;
        let mut best_val = if is_white { -INFINITY } else { INFINITY };

        for mv in &ordered_moves(pos) {
            let next = pos.clone().play(mv).unwrap();
            let val = self.alpha_beta(&next, self.depth - 1, alpha, beta, !is_white);
            if is_white {
                if val > best_val {
                    best_val = val;
                    best_move = Some(mv.clone());
                }
                alpha = alpha.max(val);
            } else {
                if val < best_val {
                    best_val = val;
                    best_move = Some(mv.clone());
                }
                beta = beta.min(val);
            }
        }

        best_move
    }

    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// A sufficiently deep transposition hit returns before the depth-0 and
    /// game-over checks; the cached score is trusted over re-deriving
    /// terminal status. Quiescence results are not stored.
    fn alpha_beta(
        &mut self,
        pos: &Chess,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let hash = get_hash(pos);
        if let Some(score) = self.tt.probe(hash, depth) {
            self.stats.tt_hits += 1;
            return score;
        }

        if depth == 0 || pos.is_game_over() {
            return self.quiescence(pos, alpha, beta, 0);
        }

        let moves = ordered_moves(pos);
        let best = if maximizing {
            let mut best = -INFINITY;
            for mv in &moves {
                let next = pos.clone().play(mv).unwrap();
                let score = self.alpha_beta(&next, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in &moves {
                let next = pos.clone().play(mv).unwrap();
                let score = self.alpha_beta(&next, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        };

        self.tt.store(hash, depth, best);
        best
    }

    /// Capture-only extension at the horizon.
    ///
    /// Stands pat on the static evaluation, then explores capture chains up
    /// to [`QS_MAX_PLY`] extra plies. Returns the active bound for the side
    /// to move (alpha at White nodes, beta at Black nodes) rather than a
    /// true minimax value.
    fn quiescence(&mut self, pos: &Chess, mut alpha: i32, mut beta: i32, q_depth: i32) -> i32 {
        self.stats.qnodes += 1;

        let stand_pat = evaluate(pos);
        if q_depth > QS_MAX_PLY {
            return stand_pat;
        }

        let white_to_move = pos.turn() == Color::White;
        if white_to_move {
            if stand_pat >= beta {
                return beta;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return alpha;
            }
            beta = beta.min(stand_pat);
        }

        // Captures only; all captures rank equally, generation order stands.
        for mv in pos.legal_moves().iter().filter(|m| m.is_capture()) {
            let next = pos.clone().play(mv).unwrap();
            let score = self.quiescence(&next, alpha, beta, q_depth + 1);
            if white_to_move {
                if score >= beta {
                    return beta;
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    return alpha;
                }
                beta = beta.min(score);
            }
        }

        if white_to_move { alpha } else { beta }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
