//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackRow, Letter, Word};

/// Format a feedback row as an emoji string
#[must_use]
pub fn feedback_to_emoji(row: FeedbackRow) -> String {
    row.codes()
        .iter()
        .map(|feedback| match feedback {
            Feedback::Green => '🟩',
            Feedback::Yellow => '🟨',
            Feedback::Black => '⬜',
        })
        .collect()
}

/// Format a count with comma thousands separators
#[must_use]
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// One line of a letter table: rank, identity, share, frequency and word count
#[must_use]
pub fn letter_line(letter: &Letter, words: usize) -> String {
    let rank = letter
        .rank()
        .map_or_else(|| "--".to_string(), |rank| format!("{rank:02}"));

    format!(
        "{rank}. {}:{}, Percent: {:.3}%, Frequency: {}, Words: {}",
        letter.id().ch(),
        letter.id().occurrence() + 1,
        letter.ratio() * 100.0,
        with_thousands(u64::from(letter.frequency())),
        with_thousands(words as u64),
    )
}

/// Comma-separated word texts
#[must_use]
pub fn word_list(words: &[&Word]) -> String {
    words
        .iter()
        .map(|word| word.text())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
