//! Core domain types for the Wordle helper
//!
//! Letter identities, corpus words, the corpus itself, positional templates
//! and guess feedback. Everything here is immutable once the corpus is built.

mod corpus;
mod feedback;
mod letter;
mod template;
mod word;

pub use corpus::{Corpus, CorpusError};
pub use feedback::{Feedback, FeedbackError, FeedbackRow};
pub use letter::{Letter, LetterId, LetterRegistry, letter_ids};
pub use template::{Template, TemplateError, WordMatcher, compile_pattern};
pub use word::{WORD_LENGTH, Word, WordError, decompose, normalize};
