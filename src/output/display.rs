//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, letter_line, word_list};
use crate::commands::{BenchmarkResult, LetterReport, SolveResult};
use crate::core::{Letter, Word};
use crate::session::{Evaluation, Opener};
use colored::Colorize;
use std::io::{self, Write};

/// Print the opening suggestions
pub fn print_openers(out: &mut impl Write, openers: &[Opener<'_>]) -> io::Result<()> {
    writeln!(out, "{}", "Suggested first guesses:".bright_cyan().bold())?;
    for opener in openers {
        writeln!(
            out,
            "  {}  {}",
            opener.word.text().bright_yellow().bold(),
            opener.reason
        )?;
    }
    writeln!(out)
}

/// Print what a result narrowed the game down to
pub fn print_evaluation(
    out: &mut impl Write,
    evaluation: &Evaluation<'_>,
    top: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        evaluation.guess.text().bright_white().bold(),
        feedback_to_emoji(evaluation.feedback)
    )?;

    if evaluation.possible_words.is_empty() {
        writeln!(
            out,
            "{}",
            "No words match; a result may have been entered wrong.".red()
        )?;
    }

    writeln!(
        out,
        "Possible words: {} ({})",
        evaluation.possible_words.len().to_string().bright_cyan(),
        word_list(evaluation.top_possible(top))
    )?;
    writeln!(
        out,
        "Next guesses: {} ({})",
        evaluation.next_guesses.len().to_string().bright_cyan(),
        word_list(evaluation.top_next_guesses(top))
    )
}

/// Print a single letter's statistics and top words
pub fn print_letter_report(out: &mut impl Write, report: &LetterReport<'_>) -> io::Result<()> {
    writeln!(out, "{}", letter_line(&report.letter, report.word_count))?;
    if !report.top_words.is_empty() {
        writeln!(out, "Top words: {}", word_list(&report.top_words))?;
    }
    Ok(())
}

/// Print every letter identity in rank order
pub fn print_letter_ranking(out: &mut impl Write, letters: &[Letter]) -> io::Result<()> {
    for letter in letters {
        writeln!(out, "{}", letter_line(letter, letter.frequency() as usize))?;
    }
    Ok(())
}

/// Print the first `limit` words of a query result
pub fn print_words(out: &mut impl Write, words: &[&Word], limit: usize) -> io::Result<()> {
    writeln!(
        out,
        "{} matching words",
        words.len().to_string().bright_cyan().bold()
    )?;
    for (i, word) in words.iter().take(limit).enumerate() {
        writeln!(out, "{:3}. {}  {}", i + 1, word.text(), word.score())?;
    }
    Ok(())
}

/// Print the result of solving a word
pub fn print_solve_result(
    out: &mut impl Write,
    result: &SolveResult,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(out, "Solving: {}", result.target.bright_yellow().bold())?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.guesses.iter().enumerate() {
        writeln!(
            out,
            "\nTurn {}: {} {}",
            i + 1,
            step.word,
            feedback_to_emoji(step.feedback)
        )?;

        if verbose {
            writeln!(
                out,
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            )?;
        }
    }

    writeln!(out)?;
    let guesses = result.guesses.len();
    if result.success {
        writeln!(
            out,
            "{}",
            format!("Solved in {guesses} guesses!").green().bold()
        )
    } else {
        writeln!(
            out,
            "{}",
            format!("Failed to solve in {guesses} guesses").red().bold()
        )
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(out: &mut impl Write, result: &BenchmarkResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "BENCHMARK RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n{}", "Performance:".bright_cyan().bold())?;
    writeln!(out, "   Words tested:     {}", result.total_words)?;
    writeln!(out, "   Solved:           {}", result.solved.to_string().green())?;
    if result.failed > 0 {
        writeln!(out, "   Failed:           {}", result.failed.to_string().red())?;
    }
    writeln!(
        out,
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    )?;
    writeln!(out, "   Best case:        {}", result.min_guesses.to_string().green())?;
    writeln!(out, "   Worst case:       {}", result.max_guesses.to_string().yellow())?;
    writeln!(out, "   Time taken:       {:.2}s", result.duration.as_secs_f64())?;
    writeln!(out, "   Words/second:     {:.1}", result.words_per_second)?;

    writeln!(out, "\n{}", "Distribution:".bright_cyan().bold())?;
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (&guesses, &count) in counts {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        writeln!(out, "   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green())?;
    }

    if !result.failures.is_empty() {
        writeln!(out, "\n{}", "Unsolved:".red().bold())?;
        writeln!(out, "   {}", result.failures.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{SolveConfig, letter_report, solve_word};
    use crate::core::Corpus;
    use crate::session::suggested_openers;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn corpus() -> Corpus {
        Corpus::build(["ABIDE", "ABASH", "CRANE", "AUDIO"]).unwrap()
    }

    #[test]
    fn openers_list_words_and_reasons() {
        let corpus = corpus();
        let openers = suggested_openers(&corpus);
        let text = render(|out| print_openers(out, &openers));

        assert!(text.contains("Highest letter score."));
        assert!(text.contains(openers[0].word.text()));
    }

    #[test]
    fn letter_report_shows_top_words() {
        let corpus = corpus();
        let report = letter_report(&corpus, "a2", 5).unwrap();
        let text = render(|out| print_letter_report(out, &report));

        assert!(text.contains("A:2"));
        assert!(text.contains("Top words: ABASH"));
    }

    #[test]
    fn words_are_numbered() {
        let corpus = corpus();
        let words = corpus.words();
        let text = render(|out| print_words(out, &words, 2));

        assert!(text.starts_with("4 matching words"));
        assert!(text.contains("  1. "));
        assert!(text.contains("  2. "));
        assert!(!text.contains("  3. "));
    }

    #[test]
    fn solve_result_reports_success() {
        let corpus = corpus();
        let result = solve_word(&corpus, &SolveConfig::new("abash".to_string())).unwrap();
        let text = render(|out| print_solve_result(out, &result, true));

        assert!(text.contains("Solving: ABASH"));
        assert!(text.contains("Candidates:"));
        assert!(text.contains(&format!("Solved in {} guesses!", result.guesses.len())));
    }
}
