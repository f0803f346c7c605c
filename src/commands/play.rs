//! Interactive play mode
//!
//! Line-based: the player enters a guess, then the colours Wordle showed for
//! it, and gets back the remaining candidates and the next best guesses.

use crate::core::Corpus;
use crate::output::display::{print_evaluation, print_openers};
use crate::session::{Session, suggested_openers};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Read one trimmed line; `None` at end of input or on a quit command
fn read_command(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim();
    if matches!(line.to_ascii_lowercase().as_str(), "quit" | "exit" | "q") {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}

fn prompt(output: &mut impl Write, text: &str) -> io::Result<()> {
    write!(output, "{text}: ")?;
    output.flush()
}

/// Run one game until it is solved or the player quits
///
/// Invalid guesses and results are reported and asked for again; a bad
/// result returns to the guess prompt.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run_play(
    corpus: &Corpus,
    top: usize,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "Enter 'quit' to exit.\n")?;
    print_openers(&mut output, &suggested_openers(corpus))?;

    let mut session = Session::new(corpus);

    loop {
        prompt(&mut output, "Input your guess")?;
        let Some(guess) = read_command(&mut input)? else {
            break;
        };
        if let Err(e) = session.submit_guess(&guess) {
            writeln!(output, "{}", e.to_string().red())?;
            continue;
        }

        prompt(
            &mut output,
            "What was the result? (g = green, y = yellow, b = black)",
        )?;
        let Some(result) = read_command(&mut input)? else {
            break;
        };

        match session.submit_result(&result) {
            Ok(evaluation) => {
                print_evaluation(&mut output, &evaluation, top)?;
                if evaluation.solved {
                    let rounds = session.rounds();
                    let summary = format!(
                        "Game complete in {rounds} {}! Congrats.",
                        if rounds == 1 { "round" } else { "rounds" }
                    );
                    writeln!(output, "\n{}", summary.green().bold())?;
                    return Ok(());
                }
            }
            Err(e) => writeln!(output, "{}", e.to_string().red())?,
        }
    }

    writeln!(output, "\nBye.")
}
