//! Letter statistics commands

use super::CommandError;
use crate::core::{Corpus, Letter, LetterId, Word};
use crate::query::with_letters;

/// A letter identity with the words that contain it
pub struct LetterReport<'c> {
    pub letter: Letter,
    pub word_count: usize,
    /// Highest-scoring words containing the letter
    pub top_words: Vec<&'c Word>,
}

/// Parse `e`, `E`, `e2`, ... into a letter identity
///
/// The optional number is the 1-based occurrence (`e2` is the second E).
///
/// # Errors
/// Returns `CommandError::InvalidLetter` if `spec` does not start with an
/// ASCII letter or the occurrence is not a positive number.
pub fn parse_letter_spec(spec: &str) -> Result<LetterId, CommandError> {
    let invalid = || CommandError::InvalidLetter(spec.to_string());

    let mut chars = spec.trim().chars();
    let ch = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(invalid)?;

    let rest = chars.as_str();
    let occurrence = if rest.is_empty() {
        1
    } else {
        rest.parse::<usize>().map_err(|_| invalid())?
    };

    if occurrence == 0 {
        return Err(invalid());
    }

    Ok(LetterId::new(ch, occurrence - 1))
}

/// Statistics for one letter identity plus its best `limit` words
///
/// # Errors
/// Returns `CommandError::InvalidLetter` for an unparseable `spec`.
pub fn letter_report<'c>(
    corpus: &'c Corpus,
    spec: &str,
    limit: usize,
) -> Result<LetterReport<'c>, CommandError> {
    let id = parse_letter_spec(spec)?;
    let mut words = with_letters(corpus.words(), &[id]);
    let word_count = words.len();
    words.truncate(limit);

    Ok(LetterReport {
        letter: corpus.registry().letter(id),
        word_count,
        top_words: words,
    })
}

/// Every letter identity in rank order
#[must_use]
pub fn letter_ranking(corpus: &Corpus) -> Vec<Letter> {
    let mut letters = corpus.all_letters().to_vec();
    letters.sort_by_key(|letter| letter.rank());
    letters
}
