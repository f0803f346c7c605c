//! Constraint accumulation across guess/result rounds

use crate::core::{
    Corpus, Feedback, FeedbackError, FeedbackRow, LetterId, Template, Word, WordError, normalize,
};
use crate::query::{
    matching, new_letters, not_matching, try_with_weighted_letters, with_letters, without_letters,
};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors returned by session transitions; the session is unchanged after any of them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("guess is invalid: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("unknown word {0:?}")]
    UnknownWord(String),
    #[error("{0}")]
    InvalidResult(#[from] FeedbackError),
    #[error("no guess is waiting for a result")]
    NoPendingGuess,
    #[error("the puzzle is already solved")]
    Solved,
}

/// Where the session is in its guess/result cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'c> {
    AwaitingGuess,
    AwaitingResult(&'c Word),
    Solved,
}

/// Outcome of folding one result into the session
#[derive(Debug, Clone)]
pub struct Evaluation<'c> {
    pub guess: &'c Word,
    pub feedback: FeedbackRow,
    /// Words consistent with every result so far, by descending score
    pub possible_words: Vec<&'c Word>,
    /// Every corpus word, most informative first
    pub next_guesses: Vec<&'c Word>,
    pub solved: bool,
}

impl<'c> Evaluation<'c> {
    #[must_use]
    pub fn top_possible(&self, n: usize) -> &[&'c Word] {
        &self.possible_words[..n.min(self.possible_words.len())]
    }

    #[must_use]
    pub fn top_next_guesses(&self, n: usize) -> &[&'c Word] {
        &self.next_guesses[..n.min(self.next_guesses.len())]
    }
}

/// An interactive solving session over one corpus
///
/// Constraints only ever grow. Contradictory feedback is accepted as given
/// and simply narrows the candidates to nothing.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    corpus: &'c Corpus,
    phase: Phase<'c>,
    has_letters: FxHashSet<LetterId>,
    does_not_have_letters: FxHashSet<LetterId>,
    matching_pattern: Template,
    not_matching_patterns: BTreeSet<Template>,
    rounds: usize,
}

impl<'c> Session<'c> {
    #[must_use]
    pub fn new(corpus: &'c Corpus) -> Self {
        Self {
            corpus,
            phase: Phase::AwaitingGuess,
            has_letters: FxHashSet::default(),
            does_not_have_letters: FxHashSet::default(),
            matching_pattern: Template::wildcard(),
            not_matching_patterns: BTreeSet::new(),
            rounds: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase<'c> {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    /// Number of results folded in so far
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn has_letters(&self) -> &FxHashSet<LetterId> {
        &self.has_letters
    }

    #[must_use]
    pub const fn does_not_have_letters(&self) -> &FxHashSet<LetterId> {
        &self.does_not_have_letters
    }

    #[must_use]
    pub const fn matching_pattern(&self) -> &Template {
        &self.matching_pattern
    }

    #[must_use]
    pub const fn not_matching_patterns(&self) -> &BTreeSet<Template> {
        &self.not_matching_patterns
    }

    /// Accept a guess, waiting for its result
    ///
    /// A guess made while another is still waiting for its result replaces it.
    ///
    /// # Errors
    /// - `InvalidGuess` if `text` is not 5 ASCII letters
    /// - `UnknownWord` if the corpus has no such word
    /// - `Solved` once the session has finished
    pub fn submit_guess(&mut self, text: &str) -> Result<&'c Word, SessionError> {
        if self.phase == Phase::Solved {
            return Err(SessionError::Solved);
        }

        let normalized = normalize(text)?;
        let word = self
            .corpus
            .word(&normalized)
            .ok_or(SessionError::UnknownWord(normalized))?;

        self.phase = Phase::AwaitingResult(word);
        Ok(word)
    }

    /// Parse a result line (`g`/`y`/`b` per position) and fold it in
    ///
    /// # Errors
    /// - `InvalidResult` if the line is not 5 valid codes
    /// - `NoPendingGuess` if no guess is waiting
    /// - `Solved` once the session has finished
    pub fn submit_result(&mut self, codes: &str) -> Result<Evaluation<'c>, SessionError> {
        self.pending_guess()?;
        let feedback = FeedbackRow::parse(codes)?;
        self.submit_feedback(feedback)
    }

    /// Fold already-parsed feedback for the pending guess
    ///
    /// # Errors
    /// - `NoPendingGuess` if no guess is waiting
    /// - `Solved` once the session has finished
    pub fn submit_feedback(&mut self, feedback: FeedbackRow) -> Result<Evaluation<'c>, SessionError> {
        let guess = self.pending_guess()?;

        for (position, (&letter, &code)) in guess.letters().iter().zip(feedback.codes()).enumerate()
        {
            match code {
                Feedback::Green => {
                    self.has_letters.insert(letter);
                    self.matching_pattern.fix(position, letter.ch());
                }
                Feedback::Yellow => {
                    self.has_letters.insert(letter);
                    self.not_matching_patterns
                        .insert(Template::only(position, letter.ch()));
                }
                Feedback::Black => {
                    self.does_not_have_letters.insert(letter);
                }
            }
        }
        self.rounds += 1;

        if !self.has_letters.is_disjoint(&self.does_not_have_letters) {
            warn!(
                "feedback marks {} both present and absent; no word can satisfy it",
                self.has_letters
                    .intersection(&self.does_not_have_letters)
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let possible_words = self.possible_words();
        let next_guesses = self.next_guesses(&possible_words);
        let solved = feedback.is_solved() || possible_words.len() <= 1;

        debug!(
            "round {}: {guess} {feedback} -> {} possible words, pattern {}",
            self.rounds,
            possible_words.len(),
            self.matching_pattern
        );

        self.phase = if solved {
            Phase::Solved
        } else {
            Phase::AwaitingGuess
        };

        Ok(Evaluation {
            guess,
            feedback,
            possible_words,
            next_guesses,
            solved,
        })
    }

    /// Words consistent with every constraint gathered so far
    #[must_use]
    pub fn possible_words(&self) -> Vec<&'c Word> {
        let has: Vec<LetterId> = self.has_letters.iter().copied().collect();
        let does_not_have: Vec<LetterId> = self.does_not_have_letters.iter().copied().collect();
        let excluded: Vec<Template> = self.not_matching_patterns.iter().copied().collect();

        not_matching(
            matching(
                without_letters(with_letters(self.corpus.words(), &has), &does_not_have),
                Some(&self.matching_pattern),
            ),
            &excluded,
        )
    }

    /// Every corpus word ordered by how much it would reveal about `possible_words`
    #[must_use]
    pub fn next_guesses(&self, possible_words: &[&'c Word]) -> Vec<&'c Word> {
        let known: Vec<LetterId> = self
            .has_letters
            .union(&self.does_not_have_letters)
            .copied()
            .collect();

        let demands = new_letters(possible_words, &known, self.corpus.registry());
        try_with_weighted_letters(self.corpus.words(), &demands)
    }

    fn pending_guess(&self) -> Result<&'c Word, SessionError> {
        match self.phase {
            Phase::AwaitingResult(word) => Ok(word),
            Phase::AwaitingGuess => Err(SessionError::NoPendingGuess),
            Phase::Solved => Err(SessionError::Solved),
        }
    }
}
