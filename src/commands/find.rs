//! Ad-hoc word queries

use super::CommandError;
use crate::core::{Corpus, LetterId, Word, compile_pattern, letter_ids};
use crate::query::{
    matching, not_matching, try_with_letters, try_without_letters, with_letters, without_letters,
};

/// Query options; every field is optional and empty means "no constraint"
///
/// Letter fields take plain letters where a repeat names the next occurrence
/// (`"ee"` is the first and second E). Pattern fields are case-insensitive
/// regular expressions, `not_matching` being a comma-separated list.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub with: Option<String>,
    pub without: Option<String>,
    pub matching: Option<String>,
    pub not_matching: Option<String>,
    pub try_with: Option<String>,
    pub try_without: Option<String>,
}

fn letters_of(field: Option<&str>) -> Vec<LetterId> {
    field.map(letter_ids).unwrap_or_default()
}

/// Run a query against the corpus
///
/// Stages apply in order: with, without, matching, not matching, then the
/// two orderings.
///
/// # Errors
///
/// Returns `CommandError::Pattern` if any regular expression is invalid.
pub fn find_words<'c>(
    corpus: &'c Corpus,
    options: &FindOptions,
) -> Result<Vec<&'c Word>, CommandError> {
    let pattern = options
        .matching
        .as_deref()
        .map(compile_pattern)
        .transpose()?;

    let excluded = options
        .not_matching
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|expr| !expr.is_empty())
        .map(compile_pattern)
        .collect::<Result<Vec<_>, _>>()?;

    let words = with_letters(corpus.words(), &letters_of(options.with.as_deref()));
    let words = without_letters(words, &letters_of(options.without.as_deref()));
    let words = matching(words, pattern.as_ref());
    let words = not_matching(words, &excluded);
    let words = try_with_letters(words, &letters_of(options.try_with.as_deref()));
    Ok(try_without_letters(
        words,
        &letters_of(options.try_without.as_deref()),
    ))
}
