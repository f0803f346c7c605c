//! Terminal output formatting
//!
//! Display utilities for command results, written to any `io::Write`.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_evaluation, print_letter_ranking, print_letter_report,
    print_openers, print_solve_result, print_words,
};
