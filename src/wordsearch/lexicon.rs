use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};

use super::util::normalize;
use crate::errors::Result;

/// Ordered set of uppercase words backed by an fst.
///
/// The fst gives exact lookup and a `ge` range stream, which is all the
/// prefix test needs: the smallest stored word not less than a prefix either
/// starts with it, or no stored word does.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Set<Vec<u8>>,
}

impl Lexicon {
    /// Builds a lexicon from raw words. Words are uppercased and deduplicated,
    /// empty entries are dropped. No other cleanup happens, so a word keeps any
    /// surrounding whitespace it was given with.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // fst needs its input sorted and unique
        let entries: BTreeSet<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        let words = Set::from_iter(entries)?;
        log::debug!("Built lexicon with {} words", words.len());
        Ok(Self { words })
    }

    /// Parses a word list held in memory. Only the first whitespace separated
    /// token of each line is used, so lists with trailing definitions or scores load as-is.
    pub fn parse_from_str(contents: &str) -> Result<Self> {
        Self::new(
            contents
                .lines()
                .filter_map(|line| line.split_whitespace().next()),
        )
    }

    /// Reads a word list from disk, see [`Lexicon::parse_from_str`] for the format
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;
        let lexicon = Self::parse_from_str(&data)?;
        log::info!(
            "Loaded {} words from {}",
            lexicon.len(),
            path.as_ref().display()
        );
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True iff the normalized word is stored exactly
    pub fn is_word(&self, word: &str) -> bool {
        self.contains_normalized(&normalize(word))
    }

    /// True iff some stored word starts with the normalized prefix
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.has_normalized_prefix(&normalize(prefix))
    }

    /// Smallest stored word that is greater than or equal to `key`
    pub fn ceiling(&self, key: &str) -> Option<String> {
        let key = normalize(key);
        let mut stream = self.words.range().ge(key.as_bytes()).into_stream();
        stream
            .next()
            .map(|w| String::from_utf8_lossy(w).into_owned())
    }

    /// All stored words starting with `prefix`, in lexicographic order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize(prefix);
        let matcher = Str::new(&prefix).starts_with();
        let mut stream = self.words.search(matcher).into_stream();
        let mut result = Vec::new();
        while let Some(w) = stream.next() {
            result.push(String::from_utf8_lossy(w).into_owned());
        }
        result
    }

    /// Every stored word in lexicographic order
    pub fn words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Lookup for strings that are already uppercase (the search hot path)
    pub(crate) fn contains_normalized(&self, word: &str) -> bool {
        self.words.contains(word.as_bytes())
    }

    pub(crate) fn has_normalized_prefix(&self, prefix: &str) -> bool {
        let mut stream = self.words.range().ge(prefix.as_bytes()).into_stream();
        match stream.next() {
            Some(ceiling) => ceiling.starts_with(prefix.as_bytes()),
            None => false,
        }
    }
}
