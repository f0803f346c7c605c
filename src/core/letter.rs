//! Occurrence-aware letter identities and their corpus statistics
//!
//! A letter is identified by its character *and* by which occurrence of that
//! character it is within a word: the first E of "GEESE" is `E@0`, the second
//! is `E@1`. Each identity carries its own frequency, ratio and rank.

use rustc_hash::FxHashMap;
use std::fmt;

/// A `(character, occurrence)` pair
///
/// Characters are normalized to ASCII uppercase. Occurrence 0 is the first
/// appearance of the character in a word, occurrence 1 the second, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterId {
    ch: char,
    occurrence: usize,
}

impl LetterId {
    /// Create a letter identity, uppercasing the character
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::LetterId;
    ///
    /// let second_e = LetterId::new('e', 1);
    /// assert_eq!(second_e.ch(), 'E');
    /// assert_eq!(second_e.occurrence(), 1);
    /// assert_ne!(second_e, LetterId::new('E', 0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(ch: char, occurrence: usize) -> Self {
        Self {
            ch: ch.to_ascii_uppercase(),
            occurrence,
        }
    }

    #[inline]
    #[must_use]
    pub const fn ch(self) -> char {
        self.ch
    }

    /// Zero-based occurrence index
    #[inline]
    #[must_use]
    pub const fn occurrence(self) -> usize {
        self.occurrence
    }
}

impl fmt::Display for LetterId {
    /// Formats as `E:2` for the second E (occurrence shown 1-based)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ch, self.occurrence + 1)
    }
}

/// Expand free text such as `"aei"` or `"ee"` into letter identities
///
/// A character appearing `k` times in the input yields occurrences `0..k`,
/// grouped by character in order of first appearance. Whitespace is ignored.
///
/// # Examples
/// ```
/// use wordle_helper::core::{LetterId, letter_ids};
///
/// let ids = letter_ids("ebe");
/// assert_eq!(
///     ids,
///     vec![LetterId::new('E', 0), LetterId::new('E', 1), LetterId::new('B', 0)]
/// );
/// ```
#[must_use]
pub fn letter_ids(chars: &str) -> Vec<LetterId> {
    let mut groups: Vec<(char, usize)> = Vec::new();

    for ch in chars.chars().filter(|c| !c.is_whitespace()) {
        let ch = ch.to_ascii_uppercase();
        match groups.iter_mut().find(|(c, _)| *c == ch) {
            Some((_, count)) => *count += 1,
            None => groups.push((ch, 1)),
        }
    }

    groups
        .into_iter()
        .flat_map(|(ch, count)| (0..count).map(move |occurrence| LetterId::new(ch, occurrence)))
        .collect()
}

/// Statistics for one letter identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letter {
    id: LetterId,
    frequency: u32,
    ratio: f64,
    rank: Option<u32>,
}

impl Letter {
    /// A letter with no recorded occurrences
    #[must_use]
    pub const fn unseen(id: LetterId) -> Self {
        Self {
            id,
            frequency: 0,
            ratio: 0.0,
            rank: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> LetterId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn ch(&self) -> char {
        self.id.ch
    }

    #[inline]
    #[must_use]
    pub const fn occurrence(&self) -> usize {
        self.id.occurrence
    }

    /// Number of corpus words holding at least `occurrence + 1` copies of the character
    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Share of all letter slots in the corpus taken by this identity
    #[inline]
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// 1-based rank by descending frequency; `None` for identities never seen in the corpus
    #[inline]
    #[must_use]
    pub const fn rank(&self) -> Option<u32> {
        self.rank
    }
}

/// Canonical store of letter identities and their statistics
///
/// Populated while words are registered, then finalized once with
/// [`LetterRegistry::finalize_statistics`]. Insertion order is kept so that
/// rank ties resolve to the identity registered first.
#[derive(Debug, Clone, Default)]
pub struct LetterRegistry {
    letters: Vec<Letter>,
    index: FxHashMap<LetterId, usize>,
    total_slots: u32,
}

impl LetterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical letter for `id`, creating it on first request
    pub fn get_or_create(&mut self, id: LetterId) -> &mut Letter {
        let slot = match self.index.get(&id) {
            Some(&slot) => slot,
            None => {
                self.letters.push(Letter::unseen(id));
                let slot = self.letters.len() - 1;
                self.index.insert(id, slot);
                slot
            }
        };

        &mut self.letters[slot]
    }

    /// Count one (word, position) touch of `id`
    pub fn register_occurrence(&mut self, id: LetterId) {
        self.get_or_create(id).frequency += 1;
    }

    /// Sum of frequencies over every registered identity
    #[must_use]
    pub fn frequency_sum(&self) -> u32 {
        self.letters.iter().map(|letter| letter.frequency).sum()
    }

    /// Compute ratios against `total_slots`, then assign ranks
    ///
    /// Ranks come from a stable sort on descending frequency, so equal
    /// frequencies keep registration order.
    pub fn finalize_statistics(&mut self, total_slots: u32) {
        self.total_slots = total_slots;

        for letter in &mut self.letters {
            letter.ratio = if total_slots == 0 {
                0.0
            } else {
                f64::from(letter.frequency) / f64::from(total_slots)
            };
        }

        let mut order: Vec<usize> = (0..self.letters.len()).collect();
        order.sort_by_key(|&slot| std::cmp::Reverse(self.letters[slot].frequency));

        for (rank, slot) in (1..).zip(order) {
            self.letters[slot].rank = Some(rank);
        }
    }

    /// Total letter slots used for ratios (0 before finalization)
    #[inline]
    #[must_use]
    pub const fn total_slots(&self) -> u32 {
        self.total_slots
    }

    #[must_use]
    pub fn get(&self, id: LetterId) -> Option<&Letter> {
        self.index.get(&id).map(|&slot| &self.letters[slot])
    }

    /// Statistics for `id`, or an unseen letter when it was never registered
    #[must_use]
    pub fn letter(&self, id: LetterId) -> Letter {
        self.get(id).copied().unwrap_or_else(|| Letter::unseen(id))
    }

    /// Every registered letter, in registration order
    #[inline]
    #[must_use]
    pub fn all_letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_id_uppercases() {
        assert_eq!(LetterId::new('a', 0), LetterId::new('A', 0));
        assert_eq!(LetterId::new('z', 2).ch(), 'Z');
    }

    #[test]
    fn letter_id_occurrence_is_part_of_identity() {
        assert_ne!(LetterId::new('E', 0), LetterId::new('E', 1));
    }

    #[test]
    fn letter_id_display_is_one_based() {
        assert_eq!(LetterId::new('e', 0).to_string(), "E:1");
        assert_eq!(LetterId::new('e', 1).to_string(), "E:2");
    }

    #[test]
    fn letter_ids_expands_repeats() {
        let ids = letter_ids("aea");
        assert_eq!(
            ids,
            vec![
                LetterId::new('A', 0),
                LetterId::new('A', 1),
                LetterId::new('E', 0)
            ]
        );
    }

    #[test]
    fn letter_ids_mixed_case_is_one_group() {
        let ids = letter_ids("aA");
        assert_eq!(ids, vec![LetterId::new('A', 0), LetterId::new('A', 1)]);
    }

    #[test]
    fn letter_ids_empty_and_whitespace() {
        assert!(letter_ids("").is_empty());
        assert_eq!(letter_ids(" o u "), letter_ids("ou"));
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut registry = LetterRegistry::new();
        let id = LetterId::new('S', 1);

        registry.get_or_create(id);
        registry.get_or_create(id);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.letter(id).frequency(), 0);
    }

    #[test]
    fn register_occurrence_counts() {
        let mut registry = LetterRegistry::new();
        let a = LetterId::new('A', 0);

        registry.register_occurrence(a);
        registry.register_occurrence(a);
        registry.register_occurrence(LetterId::new('B', 0));

        assert_eq!(registry.letter(a).frequency(), 2);
        assert_eq!(registry.frequency_sum(), 3);
    }

    #[test]
    fn finalize_assigns_ratio_and_rank() {
        let mut registry = LetterRegistry::new();
        let a = LetterId::new('A', 0);
        let b = LetterId::new('B', 0);
        let c = LetterId::new('C', 0);

        registry.register_occurrence(b);
        registry.register_occurrence(a);
        registry.register_occurrence(a);
        registry.register_occurrence(c);

        registry.finalize_statistics(registry.frequency_sum());

        assert_eq!(registry.total_slots(), 4);
        assert!((registry.letter(a).ratio() - 0.5).abs() < f64::EPSILON);
        assert_eq!(registry.letter(a).rank(), Some(1));
        // B and C tie; B was registered first
        assert_eq!(registry.letter(b).rank(), Some(2));
        assert_eq!(registry.letter(c).rank(), Some(3));
    }

    #[test]
    fn unknown_letter_is_unseen() {
        let registry = LetterRegistry::new();
        let q = registry.letter(LetterId::new('Q', 3));

        assert_eq!(q.frequency(), 0);
        assert_eq!(q.rank(), None);
        assert!(registry.get(LetterId::new('Q', 3)).is_none());
    }
}
