//! Wordle Helper
//!
//! Letter statistics, word queries and a guess/result session that narrows a
//! Wordle game down to its answer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::Corpus;
//! use wordle_helper::session::Session;
//!
//! let corpus = Corpus::build(["crane", "slate", "plumb"]).unwrap();
//! let mut session = Session::new(&corpus);
//!
//! session.submit_guess("crane").unwrap();
//! let evaluation = session.submit_result("bbgbg").unwrap();
//! assert_eq!(evaluation.possible_words[0].text(), "SLATE");
//! ```

// Core domain types
pub mod core;

// Word filters and orderings
pub mod query;

// Guess/result sessions
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
