//! Error type for the word search engine.
//!
//! Every variant has a stable code for documentation lookup:
//!
//! - W001: `InvalidArgument` (bad input to a public operation)
//! - W002: `NotReady` (lexicon queried before it was loaded)
//! - W003: `OutOfRange` (position outside the board)
//! - W004: `Io` (lexicon or board source could not be read)
//! - W005: `Fst` (lexicon index construction failed)
//! - W006: `BoardFormat` (board JSON could not be decoded)

use std::io;

/// Errors reported by the lexicon, board and search operations.
#[derive(Debug, thiserror::Error)]
pub enum WordSearchError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Lexicon has not been loaded")]
    NotReady,

    #[error("Position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Lexicon index error: {0}")]
    Fst(#[from] fst::Error),

    #[error("Malformed board description: {0}")]
    BoardFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordSearchError>;

impl WordSearchError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        WordSearchError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordSearchError::InvalidArgument { .. } => "W001",
            WordSearchError::NotReady => "W002",
            WordSearchError::OutOfRange { .. } => "W003",
            WordSearchError::Io(_) => "W004",
            WordSearchError::Fst(_) => "W005",
            WordSearchError::BoardFormat(_) => "W006",
        }
    }

    /// Returns a helpful suggestion for this error, if there is one
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordSearchError::NotReady => Some("Call load_lexicon (or load_lexicon_from_path) before querying words"),
            WordSearchError::OutOfRange { .. } => Some("Positions are 0-indexed and must be smaller than the board dimension"),
            WordSearchError::BoardFormat(_) => Some("Expected a JSON array of N*N strings, or N rows of N strings"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let base_msg = self.to_string();
        let code = self.code();
        match self.help() {
            Some(help_text) => format!("{base_msg} ({code})\n{help_text}"),
            None => format!("{base_msg} ({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = vec![
            WordSearchError::invalid("bad"),
            WordSearchError::NotReady,
            WordSearchError::OutOfRange { row: 4, col: 0, size: 4 },
            WordSearchError::Io(io::Error::new(io::ErrorKind::NotFound, "missing")),
        ];

        let mut codes = std::collections::HashSet::new();
        for err in errors {
            assert!(err.code().starts_with('W'));
            assert!(codes.insert(err.code()), "Duplicate error code {}", err.code());
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = WordSearchError::NotReady;
        let detailed = err.display_detailed();
        assert!(detailed.contains("W002"));
        assert!(detailed.contains("load_lexicon"));

        let err = WordSearchError::invalid("minimum word length must be at least 1");
        assert_eq!(
            err.display_detailed(),
            "Invalid argument: minimum word length must be at least 1 (W001)"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = WordSearchError::OutOfRange { row: 2, col: 7, size: 3 };
        assert_eq!(err.to_string(), "Position (2, 7) is outside the 3x3 board");
    }
}
