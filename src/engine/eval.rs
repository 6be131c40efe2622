//! Material + piece-square-table evaluation
//!
//! Scores a position in centipawns from White's perspective: base material
//! for every piece plus a per-square positional bonus for pawns, knights,
//! bishops and kings. Rooks and queens carry material value only.

use shakmaty::{Chess, Color, Position, Role, Square};

/// Score reported for a checkmated position, signed against the side to move.
pub const MATE_SCORE: i32 = 99_999;

/// Score for stalemate and insufficient-material positions.
pub const DRAW_SCORE: i32 = 0;

pub fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 20000,
    }
}

// Tables are authored from White's viewpoint; Black looks them up through
// a vertical mirror.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,   0,   0,   0,   0,  0,  0,
    50, 50,  50,  50,  50,  50, 50, 50,
    10, 10,  20,  30,  30,  20, 10, 10,
     5,  5,  10,  25,  25,  10,  5,  5,
     0,  0,   0,  20,  20,   0,  0,  0,
     5, -5, -10,   0,   0, -10, -5,  5,
     5, 10,  10, -20, -20,  10, 10,  5,
     0,  0,   0,   0,   0,   0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

fn pst(role: Role) -> Option<&'static [i32; 64]> {
    match role {
        Role::Pawn => Some(&PAWN_PST),
        Role::Knight => Some(&KNIGHT_PST),
        Role::Bishop => Some(&BISHOP_PST),
        Role::King => Some(&KING_PST),
        Role::Rook | Role::Queen => None,
    }
}

/// Evaluate a position from White's perspective.
///
/// Checkmate returns the mate sentinel signed against the side to move;
/// stalemate and insufficient material return [`DRAW_SCORE`].
pub fn evaluate(pos: &Chess) -> i32 {
    if pos.is_checkmate() {
        return match pos.turn() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return DRAW_SCORE;
    }

    let board = pos.board();
    let mut score = 0;
    for sq in board.occupied() {
        if let Some(piece) = board.piece_at(sq) {
            let mut value = piece_value(piece.role);
            if let Some(table) = pst(piece.role) {
                let idx: Square = match piece.color {
                    Color::White => sq,
                    Color::Black => sq.flip_vertical(),
                };
                value += table[idx as usize];
            }
            score += match piece.color {
                Color::White => value,
                Color::Black => -value,
            };
        }
    }
    score
}
