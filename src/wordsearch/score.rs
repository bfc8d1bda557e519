use super::board::Board;
use super::lexicon::Lexicon;
use super::search::Locator;
use super::util::{check_min_length, normalize, word_length};
use crate::errors::Result;

/// Points a single word is worth: one for reaching the minimum length and one per extra character
pub fn word_score(word: &str, min_length: usize) -> usize {
    word_length(word).saturating_sub(min_length) + 1
}

/// Cumulative score of the candidates that are long enough, in the lexicon and on the board.
/// Every candidate is scored as given; "cat" and "CAT" are two candidates and both count.
pub fn score_words<I, S>(board: &Board, lexicon: &Lexicon, words: I, min_length: usize) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    check_min_length(min_length)?;
    Ok(total_score(board, lexicon, words, min_length))
}

/// [`score_words`] for a minimum length that is already known to be valid
pub(crate) fn total_score<I, S>(board: &Board, lexicon: &Lexicon, words: I, min_length: usize) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let locator = Locator::new(board);
    let mut candidates = 0;
    let mut total = 0;
    for word in words {
        candidates += 1;
        let word = normalize(word.as_ref());
        if word_length(&word) >= min_length
            && lexicon.contains_normalized(&word)
            && !locator.locate(&word).is_empty()
        {
            total += word_score(&word, min_length);
        }
    }
    log::debug!("Scored {candidates} candidates for {total} points");
    total
}
