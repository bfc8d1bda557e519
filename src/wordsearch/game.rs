use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::lexicon::Lexicon;
use super::score;
use super::search::{Enumerator, Locator};
use super::util::check_min_length;
use crate::errors::{Result, WordSearchError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Spread exhaustive enumeration over the rayon thread pool.
    /// Off by default, searches run on the calling thread.
    pub parallel: bool,
}

/// A word search game: one board, one lexicon and the queries over them.
///
/// The lexicon and board are behind `Arc`s so callers can hand them to other
/// threads; they are never mutated once built, only replaced.
#[derive(Debug, Clone, Default)]
pub struct WordSearchGame {
    /// `None` until a lexicon has been loaded
    lexicon: Option<Arc<Lexicon>>,
    board: Arc<Board>,
    options: GameOptions,
}

impl WordSearchGame {
    /// New game on the default 4x4 board, without a lexicon
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GameOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replaces the lexicon with the given words
    pub fn load_lexicon<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lexicon = Lexicon::new(words)?;
        log::info!("Lexicon loaded with {} words", lexicon.len());
        self.lexicon = Some(Arc::new(lexicon));
        Ok(())
    }

    /// Replaces the lexicon with a word list read from disk.
    /// On failure the previous lexicon, if any, is kept.
    pub fn load_lexicon_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let lexicon = Lexicon::load_from_path(path)?;
        self.lexicon = Some(Arc::new(lexicon));
        Ok(())
    }

    /// Replaces the board with N*N tiles in row-major order
    pub fn set_board<S: AsRef<str>>(&mut self, tiles: &[S]) -> Result<()> {
        self.replace_board(Board::new(tiles)?);
        Ok(())
    }

    /// Replaces the board with one read from a JSON file
    pub fn set_board_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.replace_board(Board::from_file(path)?);
        Ok(())
    }

    fn replace_board(&mut self, board: Board) {
        log::info!("Board set to {}x{}", board.size(), board.size());
        self.board = Arc::new(board);
    }

    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    /// The board as text, one row per line
    pub fn board_string(&self) -> String {
        self.board.to_string()
    }

    pub fn lexicon(&self) -> Result<&Arc<Lexicon>> {
        self.lexicon.as_ref().ok_or(WordSearchError::NotReady)
    }

    pub fn is_valid_word(&self, word: &str) -> Result<bool> {
        Ok(self.lexicon()?.is_word(word))
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool> {
        Ok(self.lexicon()?.has_prefix(prefix))
    }

    /// Lexicon for a query taking a minimum length. A bad length is reported
    /// ahead of a missing lexicon.
    fn lexicon_for(&self, min_length: usize) -> Result<&Lexicon> {
        check_min_length(min_length)?;
        self.lexicon().map(|lexicon| &**lexicon)
    }

    /// Every lexicon word of at least `min_length` characters that can be traced on the board
    pub fn get_all_scorable_words(&self, min_length: usize) -> Result<BTreeSet<String>> {
        let lexicon = self.lexicon_for(min_length)?;
        let enumerator = Enumerator::with_valid_length(&self.board, lexicon, min_length);
        Ok(if self.options.parallel {
            enumerator.run_parallel()
        } else {
            enumerator.run()
        })
    }

    /// Row-major indices of a path spelling `word`, or an empty vector if it cannot be traced.
    /// Lexicon membership is not required, but a lexicon must have been loaded.
    pub fn is_on_board(&self, word: &str) -> Result<Vec<usize>> {
        self.lexicon()?;
        Ok(Locator::new(&self.board).locate(word))
    }

    pub fn get_score_for_words<I, S>(&self, words: I, min_length: usize) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lexicon = self.lexicon_for(min_length)?;
        Ok(score::total_score(&self.board, lexicon, words, min_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_before_lexicon_are_not_ready() {
        let game = WordSearchGame::new();
        assert!(matches!(game.is_valid_word("ale"), Err(WordSearchError::NotReady)));
        assert!(matches!(game.is_valid_prefix("al"), Err(WordSearchError::NotReady)));
        assert!(matches!(game.get_all_scorable_words(3), Err(WordSearchError::NotReady)));
        assert!(matches!(game.is_on_board("ale"), Err(WordSearchError::NotReady)));
        assert!(matches!(
            game.get_score_for_words(["ale"], 3),
            Err(WordSearchError::NotReady)
        ));
    }

    #[test]
    fn test_default_board() {
        let game = WordSearchGame::new();
        assert_eq!(game.board().size(), 4);
        assert_eq!(
            game.board_string(),
            "E E C A \nA L E P \nH N B O \nQ T T Y \n"
        );
    }

    #[test]
    fn test_set_board_replaces_board() {
        let mut game = WordSearchGame::new();
        game.set_board(&["C", "A", "X", "T"]).unwrap();
        assert_eq!(game.board().size(), 2);

        assert!(game.set_board(&["A", "B", "C"]).is_err());
        // A rejected board leaves the previous one in place
        assert_eq!(game.board().size(), 2);
    }

    #[test]
    fn test_reloading_lexicon_replaces_content() {
        let mut game = WordSearchGame::new();
        game.load_lexicon(["ale", "pace"]).unwrap();
        assert!(game.is_valid_word("ALE").unwrap());
        game.load_lexicon(["bent"]).unwrap();
        assert!(!game.is_valid_word("ale").unwrap());
        assert!(game.is_valid_prefix("BE").unwrap());
    }

    #[test]
    fn test_min_length_validated() {
        let mut game = WordSearchGame::new();
        game.load_lexicon(["ale"]).unwrap();
        let err = game.get_all_scorable_words(0).unwrap_err();
        assert_eq!(err.code(), "W001");
        assert!(game.get_score_for_words(["ale"], 0).is_err());

        // Argument errors are reported before readiness
        let fresh = WordSearchGame::new();
        assert_eq!(fresh.get_all_scorable_words(0).unwrap_err().code(), "W001");
        assert_eq!(fresh.get_score_for_words(["ale"], 0).unwrap_err().code(), "W001");
    }

    #[test]
    fn test_case_variant_candidates_each_score() {
        let mut game = WordSearchGame::new();
        game.set_board(&["C", "A", "X", "T"]).unwrap();
        game.load_lexicon(["cat"]).unwrap();
        let candidates: BTreeSet<String> = ["cat", "CAT"].iter().map(|w| w.to_string()).collect();
        assert_eq!(game.get_score_for_words(&candidates, 3).unwrap(), 2);
    }

    #[test]
    fn test_serial_and_parallel_games_agree() {
        let words = ["ale", "lane", "pace", "cape", "bent", "net", "toby", "eel", "lea"];
        let mut serial = WordSearchGame::new();
        let mut parallel = WordSearchGame::with_options(GameOptions { parallel: true });
        serial.load_lexicon(words).unwrap();
        parallel.load_lexicon(words).unwrap();
        assert_eq!(
            serial.get_all_scorable_words(3).unwrap(),
            parallel.get_all_scorable_words(3).unwrap()
        );
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: GameOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, GameOptions::default());
        assert!(!options.parallel);
        let options: GameOptions = serde_json::from_str(r#"{"parallel": true}"#).unwrap();
        assert!(options.parallel);
    }
}
