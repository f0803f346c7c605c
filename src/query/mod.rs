//! Composable filters and orderings over corpus words
//!
//! Each operation takes and returns a `Vec<&Word>` borrowed from the corpus,
//! so pipelines compose as plain function calls:
//!
//! ```
//! use wordle_helper::core::{Corpus, letter_ids};
//! use wordle_helper::query::{try_with_letters, with_letters, without_letters};
//!
//! let corpus = Corpus::build(["crane", "audio", "sassy", "abide"]).unwrap();
//! let words = try_with_letters(
//!     without_letters(with_letters(corpus.words(), &letter_ids("a")), &letter_ids("s")),
//!     &letter_ids("io"),
//! );
//! assert_eq!(words[0].text(), "AUDIO");
//! ```

mod filter;
mod rank;

pub use filter::{matching, not_matching, with_letters, without_letters};
pub use rank::{
    LetterDemand, new_letters, try_with_letters, try_with_weighted_letters, try_without_letters,
};
