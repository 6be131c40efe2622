pub mod cli;
pub mod engine;

pub use cli::GameLoop;
pub use engine::eval::evaluate;
pub use engine::search::Searcher;
pub use shakmaty;
