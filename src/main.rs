//! Pawnstorm - terminal chess against a fixed-depth alpha-beta engine

use pawnstorm::cli::GameLoop;
use pawnstorm::engine::search::DEFAULT_DEPTH;

fn main() {
    let depth = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DEPTH);

    println!("Pawnstorm v0.1.0");
    println!("You play White. Enter moves in coordinate notation, e.g. e2e4.");
    println!("Search depth: {} plies", depth.max(1));

    let mut game = GameLoop::new(depth);
    game.run();
}
