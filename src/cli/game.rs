//! Interactive human-vs-engine game loop
//!
//! The human plays White from the terminal in coordinate notation (e2e4);
//! the engine answers for Black. Runs until the game is over, then prints
//! the result.

use shakmaty::uci::UciMove;
use shakmaty::{Board, CastlingMode, Chess, Color, File, Outcome, Position, Rank, Square};
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::engine::search::Searcher;

pub struct GameLoop {
    pub board: Chess,
    searcher: Searcher,
}

impl GameLoop {
    pub fn new(depth: i32) -> Self {
        GameLoop {
            board: Chess::default(),
            searcher: Searcher::new(depth),
        }
    }

    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut lines = stdin.lock().lines();

        while !self.board.is_game_over() {
            writeln!(stdout, "\n{}", render_board(self.board.board())).unwrap();

            if self.board.turn() == Color::White {
                write!(stdout, "\nYour move: ").unwrap();
                stdout.flush().unwrap();

                let line = match lines.next() {
                    Some(Ok(l)) => l,
                    _ => break,
                };
                match self.parse_move(line.trim()) {
                    Some(mv) => {
                        self.board = self.board.clone().play(&mv).unwrap();
                    }
                    None => {
                        writeln!(stdout, "Illegal move! Use coordinate notation, e.g. e2e4.")
                            .unwrap();
                    }
                }
            } else {
                writeln!(stdout, "Thinking...").unwrap();
                let start = Instant::now();
                match self.searcher.select_best_move(&self.board) {
                    Some(mv) => {
                        let stats = self.searcher.stats();
                        writeln!(
                            stdout,
                            "Engine played {} ({:.2}s, {} nodes)",
                            mv.to_uci(CastlingMode::Standard),
                            start.elapsed().as_secs_f64(),
                            stats.nodes + stats.qnodes,
                        )
                        .unwrap();
                        self.board = self.board.clone().play(&mv).unwrap();
                    }
                    None => break,
                }
            }
        }

        writeln!(stdout, "\n{}", render_board(self.board.board())).unwrap();
        let result = match self.board.outcome() {
            Some(Outcome::Decisive { winner: Color::White }) => "1-0",
            Some(Outcome::Decisive { winner: Color::Black }) => "0-1",
            Some(Outcome::Draw) => "1/2-1/2",
            None => "*",
        };
        writeln!(stdout, "\nGame over! Result: {}", result).unwrap();
    }

    /// Parse a coordinate-notation move and check it is legal in the
    /// current position.
    pub fn parse_move(&self, move_str: &str) -> Option<shakmaty::Move> {
        let uci: UciMove = move_str.parse().ok()?;
        let mv = uci.to_move(&self.board).ok()?;
        if self.board.is_legal(&mv) { Some(mv) } else { None }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(crate::engine::search::DEFAULT_DEPTH)
    }
}

/// ASCII board, rank 8 at the top, empty squares as dots.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for rank in (0..8u32).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8u32 {
            let sq = Square::from_coords(File::new(file), Rank::new(rank));
            match board.piece_at(sq) {
                Some(piece) => out.push(piece.char()),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}
