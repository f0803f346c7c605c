//! Suggested first guesses

use crate::core::{Corpus, Word, letter_ids};
use crate::query::{try_with_letters, without_letters};

/// A suggested first guess and why it was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opener<'c> {
    pub word: &'c Word,
    pub reason: &'static str,
}

/// Opening suggestions, best letter score first
///
/// Suggestions whose query leaves no word are omitted.
#[must_use]
pub fn suggested_openers(corpus: &Corpus) -> Vec<Opener<'_>> {
    let best_vowels = |vowels: &str| {
        try_with_letters(corpus.words(), &letter_ids(vowels))
            .first()
            .copied()
    };

    let candidates = [
        (corpus.words().first().copied(), "Highest letter score."),
        (
            without_letters(
                try_with_letters(corpus.words(), &letter_ids("aei")),
                &letter_ids("ou"),
            )
            .first()
            .copied(),
            "Highest letter score, with 'aei', without 'ou'.",
        ),
        (
            best_vowels("aeiou"),
            "Highest letter score, most vowels, without y.",
        ),
        (
            best_vowels("aeiouy"),
            "Highest letter score, most vowels, with y.",
        ),
    ];

    candidates
        .into_iter()
        .filter_map(|(word, reason)| word.map(|word| Opener { word, reason }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_openers_for_a_normal_corpus() {
        let corpus = Corpus::build(["CRANE", "AUDIO", "SASSY", "ABIDE", "OUIJA"]).unwrap();
        let openers = suggested_openers(&corpus);

        assert_eq!(openers.len(), 4);
        assert_eq!(openers[0].word, corpus.words()[0]);
    }

    #[test]
    fn vowel_openers_maximize_vowels() {
        let corpus = Corpus::build(["CRANE", "AUDIO", "SASSY", "ABIDE"]).unwrap();
        let openers = suggested_openers(&corpus);

        assert_eq!(openers[2].word.text(), "AUDIO");
    }

    #[test]
    fn aei_opener_avoids_o_and_u() {
        let corpus = Corpus::build(["AUDIO", "SLOTH", "CRANE"]).unwrap();
        let openers = suggested_openers(&corpus);

        // AUDIO ties CRANE on A, E, I but is dropped for its O and U
        assert_eq!(openers[1].word.text(), "CRANE");
    }

    #[test]
    fn missing_suggestions_are_dropped() {
        // Every word contains O, so the 'without ou' suggestion has nothing left
        let corpus = Corpus::build(["ROBOT", "FLOOR"]).unwrap();
        let openers = suggested_openers(&corpus);

        assert_eq!(openers.len(), 3);
    }
}
