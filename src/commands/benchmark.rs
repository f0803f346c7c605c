//! Benchmark command
//!
//! Simulates a game for every corpus word (or the first `limit`) and reports
//! how many guesses the helper needed.

use super::solve::simulate;
use crate::core::Corpus;
use crate::session::SessionError;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses spent on solved words
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of words solved in that many guesses
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run the benchmark over the best-scoring `limit` words of the corpus
///
/// # Errors
///
/// Propagates a `SessionError` from a simulated game.
pub fn run_benchmark(
    corpus: &Corpus,
    limit: Option<usize>,
    max_guesses: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, SessionError> {
    let targets: Vec<_> = corpus
        .words()
        .into_iter()
        .take(limit.unwrap_or(corpus.len()))
        .collect();

    let pb = progress_bar(targets.len(), show_progress);
    let start = Instant::now();

    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for (idx, &target) in targets.iter().enumerate() {
        let result = simulate(corpus, target, max_guesses)?;

        if result.success {
            let guesses = result.guesses.len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses_seen = max_guesses_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(result.target);
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed: failures.len(),
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses: max_guesses_seen,
        distribution,
        failures,
        duration,
        words_per_second: if duration.is_zero() {
            0.0
        } else {
            total_words as f64 / duration.as_secs_f64()
        },
    })
}
