//! Word list loading
//!
//! A corpus comes from a user-supplied file when one is readable, otherwise
//! from the embedded list.

use super::WORDS;
use crate::core::{Corpus, CorpusError};
use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a corpus was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Custom(PathBuf),
    Embedded,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(path) => write!(f, "custom dictionary {}", path.display()),
            Self::Embedded => write!(f, "internal dictionary"),
        }
    }
}

/// Read raw lines from a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::read_lines;
///
/// let lines = read_lines("words.txt").unwrap();
/// println!("Read {} lines", lines.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Build a corpus from `path`, falling back to the embedded list when the
/// path is absent or unreadable
///
/// # Errors
///
/// Returns `CorpusError::NoSource` when the file is unusable and the embedded
/// list is empty, or `CorpusError::Empty` when the chosen source holds no
/// 5-letter words.
pub fn load_corpus(path: Option<&Path>) -> Result<(Corpus, Source), CorpusError> {
    load_corpus_with_fallback(path, WORDS)
}

fn load_corpus_with_fallback(
    path: Option<&Path>,
    fallback: &[&str],
) -> Result<(Corpus, Source), CorpusError> {
    if let Some(path) = path {
        match read_lines(path) {
            Ok(lines) => {
                let corpus = Corpus::build(&lines)?;
                let source = Source::Custom(path.to_path_buf());
                info!("loaded {} words from {source}", corpus.len());
                return Ok((corpus, source));
            }
            Err(e) => warn!(
                "cannot read word list {}: {e}; using internal dictionary",
                path.display()
            ),
        }
    }

    if fallback.is_empty() {
        return Err(CorpusError::NoSource {
            path: path.map(Path::to_path_buf),
        });
    }

    let corpus = Corpus::build(fallback)?;
    info!("loaded {} words from {}", corpus.len(), Source::Embedded);
    Ok((corpus, Source::Embedded))
}
