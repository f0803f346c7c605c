//! Word solving command
//!
//! Plays a game against a known answer, feeding the computed feedback back
//! into a session until the answer is found or the guesses run out.

use super::CommandError;
use crate::core::{Corpus, FeedbackRow, Word};
use crate::session::{Phase, Session, SessionError};
use log::debug;

/// Guesses allowed in a game
pub const MAX_GUESSES: usize = 6;

/// Candidate count at which the helper stops probing and guesses outright
const ENDGAME_CANDIDATES: usize = 2;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: FeedbackRow,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve the corpus word named by `config.target`
///
/// # Errors
///
/// Returns `CommandError::UnknownWord` if the target is not in the corpus.
pub fn solve_word(corpus: &Corpus, config: &SolveConfig) -> Result<SolveResult, CommandError> {
    let target = corpus
        .word(&config.target)
        .ok_or_else(|| CommandError::UnknownWord(config.target.to_ascii_uppercase()))?;

    Ok(simulate(corpus, target, config.max_guesses)?)
}

/// Play a session against `answer` for at most `max_guesses` rounds
///
/// While more than two candidates remain the helper guesses its top
/// informative word, afterwards the top candidate. A word is never guessed
/// twice.
///
/// # Errors
///
/// Propagates a `SessionError` if the session rejects a guess, which only
/// happens when `answer` belongs to a different corpus.
pub fn simulate<'c>(
    corpus: &'c Corpus,
    answer: &Word,
    max_guesses: usize,
) -> Result<SolveResult, SessionError> {
    let mut session = Session::new(corpus);
    let mut possible = corpus.words();
    let mut informative = corpus.words();
    let mut guessed: Vec<&'c Word> = Vec::new();
    let mut guesses = Vec::new();

    while guesses.len() < max_guesses {
        let Some(guess) = choose_guess(&possible, &informative, &guessed) else {
            debug!("no candidates left for {answer}");
            break;
        };
        guessed.push(guess);

        let feedback = FeedbackRow::calculate(guess, answer);
        let candidates_before = possible.len();

        if session.phase() == Phase::Solved {
            // Session has narrowed to a single candidate; only confirm it
            possible.retain(|word| feedback.is_solved() && *word == guess);
        } else {
            session.submit_guess(guess.text())?;
            let evaluation = session.submit_feedback(feedback)?;
            possible = evaluation.possible_words;
            informative = evaluation.next_guesses;
        }

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: possible.len(),
        });

        if feedback.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: answer.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: answer.text().to_string(),
    })
}

fn choose_guess<'c>(
    possible: &[&'c Word],
    informative: &[&'c Word],
    guessed: &[&'c Word],
) -> Option<&'c Word> {
    if possible.is_empty() {
        return None;
    }

    let fresh = |words: &[&'c Word]| words.iter().copied().find(|word| !guessed.contains(word));

    if possible.len() <= ENDGAME_CANDIDATES {
        fresh(possible)
    } else {
        fresh(informative).or_else(|| fresh(possible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_top_word_in_one() {
        let corpus = Corpus::build(["ABIDE", "ABASH", "CRANE", "PLUMB"]).unwrap();
        let top = corpus.words()[0].text().to_string();

        let result = solve_word(&corpus, &SolveConfig::new(top.clone())).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].word, top);
        assert!(result.guesses[0].feedback.is_solved());
    }

    #[test]
    fn solve_confirms_last_candidate() {
        // ABIDE and ABASH tie on score, ABIDE keeps the earlier slot
        let corpus = Corpus::build(["ABIDE", "ABASH"]).unwrap();
        let result = solve_word(&corpus, &SolveConfig::new("abash".to_string())).unwrap();

        assert!(result.success);
        assert_eq!(result.target, "ABASH");
        assert_eq!(result.guesses.len(), 2);
        assert_eq!(result.guesses[0].word, "ABIDE");
        assert_eq!(result.guesses[0].feedback.to_string(), "GGBBB");
        assert_eq!(result.guesses[0].candidates_after, 1);
        assert_eq!(result.guesses[1].word, "ABASH");
    }

    #[test]
    fn solve_unknown_target_is_error() {
        let corpus = Corpus::build(["ABIDE", "ABASH"]).unwrap();
        let result = solve_word(&corpus, &SolveConfig::new("zzzzz".to_string()));

        assert!(matches!(result, Err(CommandError::UnknownWord(word)) if word == "ZZZZZ"));
    }

    #[test]
    fn solve_respects_max_guesses() {
        let (corpus, _) = crate::wordlists::load_corpus(None).unwrap();
        let mut config = SolveConfig::new("sassy".to_string());
        config.max_guesses = 2;

        let result = solve_word(&corpus, &config).unwrap();
        assert!(result.guesses.len() <= 2);
    }

    #[test]
    fn solve_never_repeats_or_grows() {
        let (corpus, _) = crate::wordlists::load_corpus(None).unwrap();

        for answer in corpus.words().into_iter().step_by(97) {
            let result = simulate(&corpus, answer, 6).unwrap();

            let mut words: Vec<_> = result.guesses.iter().map(|step| &step.word).collect();
            words.sort();
            words.dedup();
            assert_eq!(words.len(), result.guesses.len());

            for step in &result.guesses {
                assert!(step.candidates_after <= step.candidates_before);
            }
            if result.success {
                assert!(result.guesses.last().unwrap().feedback.is_solved());
            }
        }
    }

    #[test]
    fn repeated_letter_feedback_can_eliminate_answer() {
        // LEDGE and RIFLE tie on score, LEDGE is guessed first. Against RIFLE
        // its first E is black and its second green, which rules out the
        // first E and so drops RIFLE itself.
        let corpus = Corpus::build(["LEDGE", "RIFLE"]).unwrap();
        let result = solve_word(&corpus, &SolveConfig::new("rifle".to_string())).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].word, "LEDGE");
        assert_eq!(result.guesses[0].feedback.to_string(), "YBBBG");
        assert_eq!(result.guesses[0].candidates_before, 2);
        assert_eq!(result.guesses[0].candidates_after, 0);
    }

    #[test]
    fn choose_guess_prefers_candidates_in_endgame() {
        let corpus = Corpus::build(["CRANE", "SLATE", "PLUMB"]).unwrap();
        let crane = corpus.word("crane").unwrap();
        let slate = corpus.word("slate").unwrap();
        let plumb = corpus.word("plumb").unwrap();

        let picked = choose_guess(&[slate, crane], &[plumb], &[]);
        assert_eq!(picked, Some(slate));

        let picked = choose_guess(&[slate, crane], &[plumb], &[slate]);
        assert_eq!(picked, Some(crane));

        let picked = choose_guess(&[slate, crane, plumb], &[plumb, crane], &[plumb]);
        assert_eq!(picked, Some(crane));

        assert_eq!(choose_guess(&[], &[plumb], &[]), None);
    }
}
