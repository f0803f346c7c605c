//! The word corpus and its one-time statistics pass

use super::letter::{Letter, LetterId, LetterRegistry, letter_ids};
use super::word::{WORD_LENGTH, Word};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Neither the requested word list nor the embedded fallback could be used
    #[error("no usable word list (tried {})", describe_path(.path.as_ref()))]
    NoSource { path: Option<PathBuf> },

    /// The source was read but held no 5-letter words
    #[error("word list contains no 5-letter words")]
    Empty,
}

fn describe_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(
        || "embedded list".to_string(),
        |path| format!("{} and embedded list", path.display()),
    )
}

/// Immutable word set plus its letter statistics
///
/// Words are stored sorted by descending score; equal scores keep the order
/// in which the words were first read.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    registry: LetterRegistry,
}

impl Corpus {
    /// Build a corpus from candidate lines
    ///
    /// Lines are trimmed and uppercased; entries that are not exactly 5 ASCII
    /// letters are skipped, as are repeats of a word already read. Statistics
    /// are computed in order: frequencies while reading, then ratios, ranks,
    /// and finally word scores.
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no line is a usable word.
    pub fn build<I, S>(lines: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = LetterRegistry::new();
        let mut words = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut skipped = 0usize;

        for line in lines {
            let candidate = line.as_ref().trim();
            if candidate.chars().count() != WORD_LENGTH {
                skipped += 1;
                continue;
            }

            if !seen.insert(candidate.to_ascii_uppercase()) {
                debug!("skipping repeated word {candidate}");
                continue;
            }

            match Word::new(candidate, &mut registry) {
                Ok(word) => words.push(word),
                Err(e) => {
                    debug!("skipping {candidate:?}: {e}");
                    skipped += 1;
                }
            }
        }

        if words.is_empty() {
            return Err(CorpusError::Empty);
        }

        let total_slots = registry.frequency_sum();
        registry.finalize_statistics(total_slots);

        for word in &mut words {
            word.set_score(&registry);
        }

        words.sort_by_key(|word| std::cmp::Reverse(word.score()));

        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.text().to_string(), i))
            .collect();

        debug!(
            "built corpus: {} words, {} letter identities, {total_slots} letter slots, {skipped} lines skipped",
            words.len(),
            registry.len()
        );

        Ok(Self {
            words,
            index,
            registry,
        })
    }

    /// Case-insensitive word lookup
    #[must_use]
    pub fn word(&self, text: &str) -> Option<&Word> {
        self.index
            .get(&text.to_ascii_uppercase())
            .map(|&i| &self.words[i])
    }

    /// Statistics for a letter identity; identities absent from the corpus
    /// come back with zero frequency and no rank
    #[must_use]
    pub fn letter(&self, ch: char, occurrence: usize) -> Letter {
        self.registry.letter(LetterId::new(ch, occurrence))
    }

    /// Statistics for every identity [`letter_ids`] expands `chars` into
    #[must_use]
    pub fn letters(&self, chars: &str) -> Vec<Letter> {
        letter_ids(chars)
            .into_iter()
            .map(|id| self.registry.letter(id))
            .collect()
    }

    /// All words ordered by descending score
    #[must_use]
    pub fn words(&self) -> Vec<&Word> {
        self.words.iter().collect()
    }

    /// Every registered letter identity, in registration order
    #[must_use]
    pub fn all_letters(&self) -> &[Letter] {
        self.registry.all_letters()
    }

    #[inline]
    #[must_use]
    pub const fn registry(&self) -> &LetterRegistry {
        &self.registry
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Corpus {
        Corpus::build(["crane", "slate", "geese", "sassy", "audio", "abide", "abase"]).unwrap()
    }

    #[test]
    fn build_skips_wrong_lengths() {
        let corpus = Corpus::build(["crane", "toolong", "abc", "", "slate"]).unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn build_skips_non_letters() {
        let corpus = Corpus::build(["crane", "cr4ne", "sl-te"]).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn build_trims_and_uppercases() {
        let corpus = Corpus::build(["  crane\r", "Slate"]).unwrap();
        assert!(corpus.word("CRANE").is_some());
        assert_eq!(corpus.word("slate").map(Word::text), Some("SLATE"));
    }

    #[test]
    fn build_ignores_repeats() {
        let corpus = Corpus::build(["crane", "CRANE", "crane"]).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.letter('C', 0).frequency(), 1);
    }

    #[test]
    fn build_empty_source_fails() {
        assert!(matches!(
            Corpus::build(Vec::<String>::new()),
            Err(CorpusError::Empty)
        ));
        assert!(matches!(
            Corpus::build(["four", "sixsix"]),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn abide_abase_frequencies() {
        let corpus = Corpus::build(["ABIDE", "ABASE"]).unwrap();

        assert_eq!(corpus.letter('A', 0).frequency(), 2);
        assert_eq!(corpus.letter('B', 0).frequency(), 2);
        assert_eq!(corpus.letter('A', 1).frequency(), 1);
        assert_eq!(corpus.letter('I', 0).frequency(), 1);
    }

    #[test]
    fn ratios_sum_to_one() {
        let corpus = sample();
        let total: f64 = corpus.all_letters().iter().map(Letter::ratio).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn total_slots_is_frequency_sum() {
        let corpus = sample();
        let sum: u32 = corpus.all_letters().iter().map(Letter::frequency).sum();
        assert_eq!(corpus.registry().total_slots(), sum);
        assert_eq!(sum as usize, corpus.len() * WORD_LENGTH);
    }

    #[test]
    fn ranks_are_a_bijection() {
        let corpus = sample();
        let mut ranks: Vec<u32> = corpus
            .all_letters()
            .iter()
            .filter_map(Letter::rank)
            .collect();
        ranks.sort_unstable();

        let expected: Vec<u32> = (1..=corpus.all_letters().len() as u32).collect();
        assert_eq!(ranks, expected);
    }

    #[test]
    fn rank_one_is_most_frequent() {
        let corpus = sample();
        let top = corpus
            .all_letters()
            .iter()
            .find(|l| l.rank() == Some(1))
            .unwrap();

        assert!(
            corpus
                .all_letters()
                .iter()
                .all(|l| top.frequency() >= l.frequency())
        );
    }

    #[test]
    fn words_sorted_by_score_descending() {
        let corpus = sample();
        let scores: Vec<u32> = corpus.words().iter().map(|w| w.score()).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn equal_scores_keep_read_order() {
        // Both words score 8
        let corpus = Corpus::build(["ABIDE", "ABASE"]).unwrap();
        let texts: Vec<&str> = corpus.words().iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["ABIDE", "ABASE"]);
    }

    #[test]
    fn word_lookup_is_case_insensitive() {
        let corpus = sample();
        assert!(corpus.word("sassy").is_some());
        assert!(corpus.word("SaSsY").is_some());
        assert!(corpus.word("zzzzz").is_none());
    }

    #[test]
    fn letter_lookup_creates_unseen() {
        let corpus = sample();
        let z = corpus.letter('z', 0);
        assert_eq!(z.frequency(), 0);
        assert_eq!(z.rank(), None);
    }

    #[test]
    fn letters_expands_text() {
        let corpus = sample();
        let letters = corpus.letters("ss");
        assert_eq!(letters.len(), 2);
        assert_eq!(letters[1].id(), LetterId::new('S', 1));
        assert_eq!(letters[1].frequency(), 1);
    }
}
