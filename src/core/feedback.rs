//! Per-position guess feedback
//!
//! Each position of a guess is marked:
//! - Green (right letter, right position)
//! - Yellow (letter in the answer, wrong position)
//! - Black (letter not in the answer)
//!
//! Feedback is typed one character per position (`g`, `y`, `b`), or computed
//! from a known answer when simulating a game.

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Green,
    Yellow,
    Black,
}

impl Feedback {
    /// Map `g`/`y`/`b` (any case) to a code
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Self::Green),
            'y' => Some(Self::Yellow),
            'b' => Some(Self::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Black => 'B',
        }
    }
}

/// Error type for unparseable feedback lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("result input is too short ({0} of 5)")]
    TooShort(usize),
    #[error("result input is too long ({0} of 5)")]
    TooLong(usize),
    #[error("invalid result code {0:?}; use 'g' for green, 'y' for yellow, 'b' for black")]
    UnknownCode(char),
}

/// Feedback for a whole guess, one code per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([Feedback; WORD_LENGTH]);

impl FeedbackRow {
    /// All greens
    pub const SOLVED: Self = Self([Feedback::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(codes: [Feedback; WORD_LENGTH]) -> Self {
        Self(codes)
    }

    /// Parse a line such as `"ggybb"`
    ///
    /// Length is checked before individual codes.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the line is not exactly 5 codes or holds a
    /// character other than `g`, `y` or `b`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, FeedbackRow};
    ///
    /// let row = FeedbackRow::parse("GGybb").unwrap();
    /// assert_eq!(row.codes()[2], Feedback::Yellow);
    /// assert!(FeedbackRow::parse("ggyb").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, FeedbackError> {
        let len = line.chars().count();
        if len < WORD_LENGTH {
            return Err(FeedbackError::TooShort(len));
        }
        if len > WORD_LENGTH {
            return Err(FeedbackError::TooLong(len));
        }

        let mut codes = [Feedback::Black; WORD_LENGTH];
        for (slot, c) in codes.iter_mut().zip(line.chars()) {
            *slot = Feedback::from_char(c).ok_or(FeedbackError::UnknownCode(c))?;
        }

        Ok(Self(codes))
    }

    /// Compute the feedback Wordle shows for `guess` when the answer is `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green and remove them from the pool
    /// 2. Second pass: mark yellows from what remains in the pool
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Corpus, FeedbackRow};
    ///
    /// let corpus = Corpus::build(["crane", "slate"]).unwrap();
    /// let crane = corpus.word("crane").unwrap();
    /// let slate = corpus.word("slate").unwrap();
    /// assert_eq!(FeedbackRow::calculate(crane, slate).to_string(), "BBGBG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.text().as_bytes();
        let answer = answer.text().as_bytes();
        let mut codes = [Feedback::Black; WORD_LENGTH];
        let mut available: FxHashMap<u8, u8> = FxHashMap::default();

        for &ch in answer {
            *available.entry(ch).or_insert(0) += 1;
        }

        for ((code, &letter), &expected) in codes.iter_mut().zip(guess).zip(answer) {
            if letter == expected {
                *code = Feedback::Green;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (code, letter) in codes.iter_mut().zip(guess) {
            if *code == Feedback::Green {
                continue;
            }

            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                *code = Feedback::Yellow;
                *count -= 1;
            }
        }

        Self(codes)
    }

    #[inline]
    #[must_use]
    pub const fn codes(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }
}

impl FromStr for FeedbackRow {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.0 {
            write!(f, "{}", code.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Corpus;
    use test_case::test_case;

    fn calculate(guess: &str, answer: &str) -> FeedbackRow {
        let corpus = Corpus::build([guess, answer]).unwrap();
        FeedbackRow::calculate(
            corpus.word(guess).unwrap(),
            corpus.word(answer).unwrap(),
        )
    }

    #[test_case('g', Some(Feedback::Green) ; "lower green")]
    #[test_case('G', Some(Feedback::Green) ; "upper green")]
    #[test_case('y', Some(Feedback::Yellow) ; "yellow")]
    #[test_case('B', Some(Feedback::Black) ; "upper black")]
    #[test_case('-', None ; "dash")]
    #[test_case('x', None ; "unknown letter")]
    fn feedback_from_char(c: char, expected: Option<Feedback>) {
        assert_eq!(Feedback::from_char(c), expected);
    }

    #[test]
    fn parse_valid() {
        let row = FeedbackRow::parse("ggbbb").unwrap();
        assert_eq!(row.codes()[1], Feedback::Green);
        assert_eq!(row.codes()[2], Feedback::Black);
        assert_eq!(row.to_string(), "GGBBB");
    }

    #[test_case("ggbb", FeedbackError::TooShort(4) ; "four codes")]
    #[test_case("ggbbbb", FeedbackError::TooLong(6) ; "six codes")]
    #[test_case("", FeedbackError::TooShort(0) ; "empty")]
    #[test_case("ggxbb", FeedbackError::UnknownCode('x') ; "unknown code")]
    #[test_case("gg bb", FeedbackError::UnknownCode(' ') ; "space")]
    fn parse_invalid(line: &str, expected: FeedbackError) {
        assert_eq!(FeedbackRow::parse(line), Err(expected));
    }

    #[test]
    fn solved_row() {
        assert!(FeedbackRow::parse("GGGGG").unwrap().is_solved());
        assert!(!FeedbackRow::parse("GGGGY").unwrap().is_solved());
    }

    #[test]
    fn calculate_all_green() {
        assert_eq!(calculate("crane", "CRANE"), FeedbackRow::SOLVED);
    }

    #[test]
    fn calculate_all_black() {
        assert_eq!(calculate("abcde", "fghij").to_string(), "BBBBB");
    }

    #[test]
    fn calculate_duplicate_letters_yellow() {
        // SPEED vs ERASE: S yellow, both E's yellow
        assert_eq!(calculate("SPEED", "ERASE").to_string(), "YBYYB");
    }

    #[test]
    fn calculate_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(calculate("ROBOT", "FLOOR").to_string(), "YYBGB");
    }

    #[test]
    fn calculate_extra_copies_are_black() {
        // ABIDE's only E is consumed by the green in the last position
        assert_eq!(calculate("GEESE", "ABIDE").to_string(), "BBBBG");
    }
}
