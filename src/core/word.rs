//! Corpus word representation
//!
//! A Word stores an uppercase 5-letter word decomposed into positional letter
//! identities, plus its score against the corpus statistics.

use super::letter::{LetterId, LetterRegistry};
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter corpus word with occurrence-aware letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [LetterId; WORD_LENGTH],
    score: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

/// Validate `text` as a word and return its uppercase form
///
/// # Errors
/// Returns `WordError` if the text is not exactly 5 characters long or
/// contains anything other than ASCII letters.
pub fn normalize(text: &str) -> Result<String, WordError> {
    let len = text.chars().count();
    if len != WORD_LENGTH {
        return Err(WordError::InvalidLength(len));
    }

    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    Ok(text.to_ascii_uppercase())
}

/// Split a word into positional letter identities
///
/// Position `i` maps to the identity whose occurrence index is the number of
/// identical characters at earlier positions.
///
/// # Errors
/// Returns `WordError` for anything [`normalize`] rejects.
///
/// # Examples
/// ```
/// use wordle_helper::core::{LetterId, decompose};
///
/// let letters = decompose("sassy").unwrap();
/// assert_eq!(letters[2], LetterId::new('S', 1));
/// assert_eq!(letters[3], LetterId::new('S', 2));
/// ```
pub fn decompose(text: &str) -> Result<[LetterId; WORD_LENGTH], WordError> {
    let text = normalize(text)?;
    let bytes = text.as_bytes();

    Ok(std::array::from_fn(|position| {
        let ch = bytes[position];
        let occurrence = bytes[..position].iter().filter(|&&b| b == ch).count();
        LetterId::new(char::from(ch), occurrence)
    }))
}

impl Word {
    /// Create a word and register each of its positional letters
    ///
    /// The score stays 0 until [`Word::set_score`] runs after every word of
    /// the corpus has been registered.
    ///
    /// # Errors
    /// Returns `WordError` if the text is not 5 ASCII letters.
    pub fn new(text: &str, registry: &mut LetterRegistry) -> Result<Self, WordError> {
        let letters = decompose(text)?;

        for &letter in &letters {
            registry.register_occurrence(letter);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
            letters,
            score: 0,
        })
    }

    /// Sum the current frequencies of the 5 positional letters
    pub fn set_score(&mut self, registry: &LetterRegistry) {
        self.score = self
            .letters
            .iter()
            .map(|&id| registry.letter(id).frequency())
            .sum();
    }

    /// Uppercase word text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterId; WORD_LENGTH] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Check for an exact identity; a lone E does not satisfy `E@1`
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: LetterId) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how many of `letters` this word contains
    #[must_use]
    pub fn count_of(&self, letters: &[LetterId]) -> usize {
        letters.iter().filter(|&&id| self.contains(id)).count()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
