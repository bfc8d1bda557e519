pub mod board;
pub mod game;
pub mod lexicon;
pub mod score;
pub mod search;
pub mod util;

/// Maximum number of neighbours a cell can have (8-directional adjacency)
pub const MAX_NEIGHBORS: usize = 8;

/// Board a new game starts with, in row-major order
pub const DEFAULT_BOARD: [&str; 16] = [
    "E", "E", "C", "A", //
    "A", "L", "E", "P", //
    "H", "N", "B", "O", //
    "Q", "T", "T", "Y",
];

pub use self::board::Board;
pub use self::game::{GameOptions, WordSearchGame};
pub use self::lexicon::Lexicon;
pub use self::util::Position;
