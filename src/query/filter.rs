//! Order-preserving word filters
//!
//! Every filter returns its input untouched when given no constraint.

use crate::core::{LetterId, Word, WordMatcher};

/// Keep words containing every one of `required`
///
/// Matching is by exact identity: requiring `E@1` keeps only words with at
/// least two E's.
#[must_use]
pub fn with_letters<'c>(mut words: Vec<&'c Word>, required: &[LetterId]) -> Vec<&'c Word> {
    if required.is_empty() {
        return words;
    }

    words.retain(|word| required.iter().all(|&letter| word.contains(letter)));
    words
}

/// Keep words containing none of `excluded`
#[must_use]
pub fn without_letters<'c>(mut words: Vec<&'c Word>, excluded: &[LetterId]) -> Vec<&'c Word> {
    if excluded.is_empty() {
        return words;
    }

    words.retain(|word| !excluded.iter().any(|&letter| word.contains(letter)));
    words
}

/// Keep words the pattern matches; `None` keeps everything
#[must_use]
pub fn matching<'c, M>(mut words: Vec<&'c Word>, pattern: Option<&M>) -> Vec<&'c Word>
where
    M: WordMatcher + ?Sized,
{
    let Some(pattern) = pattern else {
        return words;
    };

    words.retain(|word| pattern.is_match(word.text()));
    words
}

/// Drop words matched by any of `patterns`
#[must_use]
pub fn not_matching<'c, M>(mut words: Vec<&'c Word>, patterns: &[M]) -> Vec<&'c Word>
where
    M: WordMatcher,
{
    for pattern in patterns {
        words.retain(|word| !pattern.is_match(word.text()));
    }
    words
}
