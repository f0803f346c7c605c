//! Wordle Helper - CLI
//!
//! Letter statistics, word queries and an interactive guess/result helper.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use wordle_helper::{
    commands::{
        FindOptions, MAX_GUESSES, SolveConfig, find_words, letter_ranking, letter_report,
        run_benchmark, run_play, solve_word,
    },
    core::Corpus,
    output::{
        formatters::with_thousands, print_benchmark_result, print_letter_ranking,
        print_letter_report, print_solve_result, print_words,
    },
    wordlists::load_corpus,
};

const GAME_TOP: usize = 5;
const LISTING_TOP: usize = 10;

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper: letter statistics, word queries and guess suggestions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (the built-in list is used if it cannot be read)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Number of entries to show (default: 5 in the game, 10 in listings)
    #[arg(short = 'n', long, global = true)]
    top: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper (default): enter guesses and results, get suggestions
    Play,

    /// Statistics for one letter, e.g. 'e' or 'e2' for the second E
    Letter {
        /// Letter with optional 1-based occurrence
        spec: String,
    },

    /// All letters ranked by frequency
    Rank,

    /// Query words by letters and patterns
    Word(WordArgs),

    /// Simulate a game against a known answer
    Solve {
        /// The answer to solve for
        word: String,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate games for the best-scoring words
    Benchmark {
        /// Number of words to simulate (default: the whole list)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Args)]
struct WordArgs {
    /// Letters every word must contain; repeats name later occurrences ("ee")
    #[arg(long)]
    with: Option<String>,

    /// Letters no word may contain
    #[arg(long)]
    without: Option<String>,

    /// Regular expression words must match
    #[arg(long)]
    matching: Option<String>,

    /// Comma-separated regular expressions words must not match
    #[arg(long)]
    not_matching: Option<String>,

    /// Letters to prefer: words holding more of them come first
    #[arg(long)]
    try_with: Option<String>,

    /// Letters to avoid: words holding fewer of them come first
    #[arg(long)]
    try_without: Option<String>,
}

impl From<WordArgs> for FindOptions {
    fn from(args: WordArgs) -> Self {
        Self {
            with: args.with,
            without: args.without,
            matching: args.matching,
            not_matching: args.not_matching,
            try_with: args.try_with,
            try_without: args.try_without,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (corpus, source) =
        load_corpus(cli.wordlist.as_deref()).context("failed to load a word list")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "Loaded {} words from {source}.\n",
        with_thousands(corpus.len() as u64)
    )?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(&corpus, cli.top.unwrap_or(GAME_TOP), io::stdin().lock(), &mut out)?;
        }
        Commands::Letter { spec } => {
            let report = letter_report(&corpus, &spec, cli.top.unwrap_or(LISTING_TOP))?;
            print_letter_report(&mut out, &report)?;
        }
        Commands::Rank => {
            let mut letters = letter_ranking(&corpus);
            if let Some(top) = cli.top {
                letters.truncate(top);
            }
            print_letter_ranking(&mut out, &letters)?;
        }
        Commands::Word(args) => {
            let words = find_words(&corpus, &args.into())?;
            print_words(&mut out, &words, cli.top.unwrap_or(LISTING_TOP))?;
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(&corpus, &SolveConfig::new(word))?;
            print_solve_result(&mut out, &result, verbose)?;
        }
        Commands::Benchmark { limit } => benchmark_command(&corpus, limit, &mut out)?,
    }

    Ok(())
}

fn benchmark_command(corpus: &Corpus, limit: Option<usize>, out: &mut impl Write) -> Result<()> {
    let count = limit.map_or(corpus.len(), |limit| limit.min(corpus.len()));
    writeln!(out, "Running benchmark on {count} words...")?;

    let result = run_benchmark(corpus, limit, MAX_GUESSES, true)?;
    print_benchmark_result(out, &result)?;
    Ok(())
}
