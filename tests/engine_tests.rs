//! Engine Module Tests
//!
//! Tests for the evaluator and the transposition table.

use pawnstorm::engine::eval::{evaluate, DRAW_SCORE, MATE_SCORE};
use pawnstorm::engine::tt::TranspositionTable;
use shakmaty::{fen::Fen, CastlingMode, Chess};

fn from_fen(fen: &str) -> Chess {
    let f: Fen = fen.parse().unwrap();
    f.into_position(CastlingMode::Standard).unwrap()
}

// ============================================================================
// Evaluation Tests
// ============================================================================

#[test]
fn test_eval_startpos_is_balanced() {
    let pos = Chess::default();
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_eval_material_advantage() {
    // White up a queen
    let pos = from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(evaluate(&pos) > 800);
}

#[test]
fn test_eval_white_checkmated() {
    // Fool's mate: White to move and mated
    let pos = from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(evaluate(&pos), -MATE_SCORE);
}

#[test]
fn test_eval_black_checkmated() {
    // Scholar's mate: Black to move and mated
    let pos = from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert_eq!(evaluate(&pos), MATE_SCORE);
}

#[test]
fn test_eval_stalemate_is_draw() {
    let pos = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&pos), DRAW_SCORE);
}

#[test]
fn test_eval_insufficient_material_is_draw() {
    let pos = from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&pos), DRAW_SCORE);
}

#[test]
fn test_eval_mirror_symmetry() {
    // The same K+P endgame from either color's point of view
    let white_pawn = from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1");
    let black_pawn = from_fen("4k3/8/8/8/3p4/8/8/4K3 b - - 0 1");
    let score = evaluate(&white_pawn);
    assert!(score > 0);
    assert_eq!(evaluate(&black_pawn), -score);
}

#[test]
fn test_eval_pst_varies_by_square() {
    // Same material, different squares, different scores
    let on_d5 = from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1");
    let on_d2 = from_fen("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1");
    assert_ne!(evaluate(&on_d5), evaluate(&on_d2));
}

// ============================================================================
// Transposition Table Tests
// ============================================================================

#[test]
fn test_tt_store_probe() {
    let mut tt = TranspositionTable::new(1);
    let key = 0x123456789ABCDEF0;
    tt.store(key, 5, 100);
    assert_eq!(tt.probe(key, 5), Some(100));
    assert_eq!(tt.probe(key, 3), Some(100));
}

#[test]
fn test_tt_miss() {
    let tt = TranspositionTable::new(1);
    assert!(tt.probe(0x123456789ABCDEF0, 0).is_none());
}

#[test]
fn test_tt_rejects_shallower_entry() {
    // A depth-2 entry must never answer a depth-3 query
    let mut tt = TranspositionTable::new(1);
    let key = 0xDEADBEEFCAFEF00D;
    tt.store(key, 2, 55);
    assert_eq!(tt.probe(key, 2), Some(55));
    assert!(tt.probe(key, 3).is_none());
}

#[test]
fn test_tt_depth_preferred_replacement() {
    let mut tt = TranspositionTable::new(1);
    let key = 0x123456789ABCDEF0;
    tt.store(key, 5, 100);
    // Shallower store within the same search must not clobber it
    tt.store(key, 2, 42);
    assert_eq!(tt.probe(key, 0), Some(100));
    // A deeper store replaces
    tt.store(key, 6, 7);
    assert_eq!(tt.probe(key, 0), Some(7));
}

#[test]
fn test_tt_stale_entry_replaced_after_new_search() {
    let mut tt = TranspositionTable::new(1);
    let key = 0x123456789ABCDEF0;
    tt.store(key, 5, 100);
    tt.new_search();
    tt.store(key, 1, 42);
    assert_eq!(tt.probe(key, 1), Some(42));
}

#[test]
fn test_tt_hashfull() {
    let mut tt = TranspositionTable::new(1);
    assert_eq!(tt.hashfull(), 0);
    tt.store(0x42, 1, 10);
    assert!(tt.hashfull() <= 1000);
}

#[test]
fn test_tt_clear() {
    let mut tt = TranspositionTable::new(1);
    let key = 0x123456789ABCDEF0;
    tt.store(key, 5, 100);
    assert!(tt.probe(key, 0).is_some());
    tt.clear();
    assert!(tt.probe(key, 0).is_none());
}
