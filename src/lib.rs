//! Word search board engine: finds every lexicon word that can be traced
//! through adjacent tiles of a square board, locates the path of a single
//! word, and scores sets of words against both.
pub mod errors;
pub mod log;
pub mod wordsearch;

pub use errors::{Result, WordSearchError};
pub use wordsearch::{Board, GameOptions, Lexicon, Position, WordSearchGame, DEFAULT_BOARD};
