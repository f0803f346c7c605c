//! Word orderings and the informativeness signal
//!
//! All orderings are stable: words that compare equal keep their input order.

use crate::core::{Letter, LetterId, LetterRegistry, Word};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// A letter not yet known, with the number of candidate words containing it
///
/// `words` is how many still-possible answers would be settled by learning
/// whether the answer has this letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterDemand {
    pub letter: Letter,
    pub words: usize,
}

impl LetterDemand {
    /// Contribution to a word's weighted score when the word contains this letter
    #[inline]
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.words as f64 * self.letter.ratio()
    }
}

/// Order by how many of `letters` each word contains (most first), then by
/// ascending score
#[must_use]
pub fn try_with_letters<'c>(mut words: Vec<&'c Word>, letters: &[LetterId]) -> Vec<&'c Word> {
    if letters.is_empty() {
        return words;
    }

    words.sort_by_cached_key(|word| (Reverse(word.count_of(letters)), word.score()));
    words
}

/// Order by descending `Σ demand × ratio` over the demanded letters each word
/// contains; ties keep input order
#[must_use]
pub fn try_with_weighted_letters<'c>(
    words: Vec<&'c Word>,
    demands: &[LetterDemand],
) -> Vec<&'c Word> {
    if demands.is_empty() {
        return words;
    }

    let mut weighted: Vec<(f64, &'c Word)> = words
        .into_iter()
        .map(|word| {
            let weight = demands
                .iter()
                .filter(|demand| word.contains(demand.letter.id()))
                .map(LetterDemand::weight)
                .sum();
            (weight, word)
        })
        .collect();

    weighted.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    weighted.into_iter().map(|(_, word)| word).collect()
}

/// Order by how many of `letters` each word contains (fewest first), then by
/// ascending score
#[must_use]
pub fn try_without_letters<'c>(mut words: Vec<&'c Word>, letters: &[LetterId]) -> Vec<&'c Word> {
    if letters.is_empty() {
        return words;
    }

    words.sort_by_cached_key(|word| (word.count_of(letters), word.score()));
    words
}

/// Count, for every letter identity outside `known`, how many of `words`
/// contain it
///
/// Results are sorted by descending count; equal counts keep the order in
/// which the letters were first met scanning the words.
#[must_use]
pub fn new_letters(
    words: &[&Word],
    known: &[LetterId],
    registry: &LetterRegistry,
) -> Vec<LetterDemand> {
    let mut slots: FxHashMap<LetterId, usize> = FxHashMap::default();
    let mut counts: Vec<(LetterId, usize)> = Vec::new();

    for word in words {
        for &letter in word.letters() {
            if known.contains(&letter) {
                continue;
            }

            match slots.get(&letter) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(letter, counts.len());
                    counts.push((letter, 1));
                }
            }
        }
    }

    counts.sort_by_key(|&(_, count)| Reverse(count));
    counts
        .into_iter()
        .map(|(id, words)| LetterDemand {
            letter: registry.letter(id),
            words,
        })
        .collect()
}
