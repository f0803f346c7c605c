//! Command implementations

pub mod benchmark;
pub mod find;
pub mod letter;
pub mod play;
pub mod solve;

use crate::session::SessionError;
use thiserror::Error;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use find::{FindOptions, find_words};
pub use letter::{LetterReport, letter_ranking, letter_report, parse_letter_spec};
pub use play::run_play;
pub use solve::{GuessStep, MAX_GUESSES, SolveConfig, SolveResult, simulate, solve_word};

/// Errors reported by commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid letter {0:?}; use a letter with an optional occurrence such as 'e' or 'e2'")]
    InvalidLetter(String),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("unknown word {0:?}")]
    UnknownWord(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}
