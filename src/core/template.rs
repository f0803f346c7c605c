//! Positional word templates and general word predicates
//!
//! A [`Template`] fixes some positions to a letter and leaves the rest as
//! wildcards, written like `"AB..."`. Filters accept any [`WordMatcher`], so a
//! case-insensitive [`Regex`] can stand in wherever a template is expected.

use super::word::WORD_LENGTH;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A predicate over an uppercase 5-letter word
pub trait WordMatcher {
    fn is_match(&self, word: &str) -> bool;
}

impl WordMatcher for Regex {
    #[inline]
    fn is_match(&self, word: &str) -> bool {
        Self::is_match(self, word)
    }
}

impl<M: WordMatcher + ?Sized> WordMatcher for &M {
    #[inline]
    fn is_match(&self, word: &str) -> bool {
        (**self).is_match(word)
    }
}

/// Compile a case-insensitive regular expression for use as a [`WordMatcher`]
///
/// # Errors
/// Returns `regex::Error` if the expression is invalid.
pub fn compile_pattern(expr: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(expr).case_insensitive(true).build()
}

/// Error type for unparseable templates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template must be exactly 5 characters, got {0}")]
    InvalidLength(usize),
    #[error("template character {0:?} is neither a letter nor a wildcard ('.' or '_')")]
    InvalidCharacter(char),
}

/// Fixed letters at some positions, wildcards elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Template([Option<char>; WORD_LENGTH]);

impl Template {
    /// All positions wildcard; matches every word
    #[must_use]
    pub const fn wildcard() -> Self {
        Self([None; WORD_LENGTH])
    }

    /// A template fixing only `ch` at `position`
    ///
    /// # Panics
    /// Panics if `position >= 5`
    #[must_use]
    pub fn only(position: usize, ch: char) -> Self {
        let mut template = Self::wildcard();
        template.fix(position, ch);
        template
    }

    /// Fix `position` to `ch`
    ///
    /// # Panics
    /// Panics if `position >= 5`
    pub fn fix(&mut self, position: usize, ch: char) {
        self.0[position] = Some(ch.to_ascii_uppercase());
    }
}

impl WordMatcher for Template {
    fn is_match(&self, word: &str) -> bool {
        word.chars().count() == WORD_LENGTH
            && self
                .0
                .iter()
                .zip(word.chars())
                .all(|(slot, ch)| slot.is_none_or(|fixed| fixed == ch.to_ascii_uppercase()))
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(TemplateError::InvalidLength(len));
        }

        let mut template = Self::wildcard();
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '.' | '_' => {}
                c if c.is_ascii_alphabetic() => template.fix(position, c),
                c => return Err(TemplateError::InvalidCharacter(c)),
            }
        }

        Ok(template)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{}", slot.unwrap_or('.'))?;
        }
        Ok(())
    }
}
