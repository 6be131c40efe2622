//! Chess engine components
//!
//! This module contains the core engine functionality:
//! - Material + piece-square-table evaluation
//! - Fixed-depth alpha-beta search with quiescence
//! - Transposition table

pub mod eval;
pub mod search;
pub mod tt;

pub use eval::{evaluate, DRAW_SCORE, MATE_SCORE};
pub use search::{SearchStats, Searcher, INFINITY};
pub use tt::{TTEntry, TranspositionTable};
