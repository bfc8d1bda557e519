use std::collections::BTreeSet;

use rayon::prelude::*;

use super::{walk_from, Flow, PathVisitor, SearchState};
use crate::errors::Result;
use crate::wordsearch::board::Board;
use crate::wordsearch::lexicon::Lexicon;
use crate::wordsearch::util::{check_min_length, word_length};

/// Finds every lexicon word of at least `min_length` characters spelled by a simple path.
#[derive(Debug, Clone, Copy)]
pub struct Enumerator<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    min_length: usize,
    prune: bool,
}

impl<'a> Enumerator<'a> {
    pub fn new(board: &'a Board, lexicon: &'a Lexicon, min_length: usize) -> Result<Self> {
        check_min_length(min_length)?;
        Ok(Self::with_valid_length(board, lexicon, min_length))
    }

    /// Constructor for callers that have already run `check_min_length`
    pub(crate) fn with_valid_length(board: &'a Board, lexicon: &'a Lexicon, min_length: usize) -> Self {
        Self {
            board,
            lexicon,
            min_length,
            prune: true,
        }
    }

    /// Explores every simple path regardless of the lexicon. Only useful as a
    /// reference for small boards, the result is the same as with pruning.
    pub fn without_pruning(mut self) -> Self {
        self.prune = false;
        self
    }

    /// Runs the search one start cell at a time on the current thread
    pub fn run(&self) -> BTreeSet<String> {
        let mut state = SearchState::new(self.board);
        let mut collector = self.collector();
        for start in self.board.positions() {
            walk_from(&mut state, start, &mut collector);
        }
        log::debug!(
            "Enumerated {} words of length >= {} on a {}x{} board",
            collector.found.len(),
            self.min_length,
            self.board.size(),
            self.board.size()
        );
        collector.found
    }

    /// Same result as [`Enumerator::run`], with start cells spread over the rayon pool.
    /// Every start cell gets its own search state.
    pub fn run_parallel(&self) -> BTreeSet<String> {
        let starts: Vec<_> = self.board.positions().collect();
        let found = starts
            .into_par_iter()
            .map(|start| {
                let mut state = SearchState::new(self.board);
                let mut collector = self.collector();
                walk_from(&mut state, start, &mut collector);
                collector.found
            })
            .reduce(BTreeSet::new, |mut acc, words| {
                acc.extend(words);
                acc
            });
        log::debug!(
            "Enumerated {} words of length >= {} on a {}x{} board (parallel)",
            found.len(),
            self.min_length,
            self.board.size(),
            self.board.size()
        );
        found
    }

    fn collector(&self) -> WordCollector<'a> {
        WordCollector {
            lexicon: self.lexicon,
            min_length: self.min_length,
            prune: self.prune,
            found: BTreeSet::new(),
        }
    }
}

struct WordCollector<'a> {
    lexicon: &'a Lexicon,
    min_length: usize,
    prune: bool,
    found: BTreeSet<String>,
}

impl PathVisitor for WordCollector<'_> {
    fn can_extend(&self, assembled: &str) -> bool {
        !self.prune || self.lexicon.has_normalized_prefix(assembled)
    }

    fn visit(&mut self, state: &SearchState<'_>) -> Flow {
        let word = state.assembled();
        if word_length(word) >= self.min_length
            && self.lexicon.contains_normalized(word)
            && !self.found.contains(word)
        {
            self.found.insert(word.to_string());
        }
        Flow::Continue
    }
}
