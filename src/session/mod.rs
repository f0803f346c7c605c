//! Interactive constraint session
//!
//! Folds guess/result feedback into growing letter and position constraints
//! and reports the remaining answers and the most informative next guesses.

mod openers;
mod state;

pub use openers::{Opener, suggested_openers};
pub use state::{Evaluation, Phase, Session, SessionError};
