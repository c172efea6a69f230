//! # Wordle Aid
//!
//! An interactive Wordle solving aid that ranks candidate guesses by expected
//! information gain.
//!
//! For each candidate guess, the solver partitions the remaining words by the
//! feedback pattern the guess would produce against them and scores the guess
//! by the Shannon entropy of that partition. The guess with the highest
//! entropy discriminates best among the remaining candidates.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub mod cache;
pub mod feedback;
pub mod session;
pub mod solver;

pub use cache::{word_list_digest, EntropyCache};
pub use feedback::{Feedback, FeedbackPattern};
pub use session::{Session, SessionState};
pub use solver::{entropy, filter_candidates, rank_best};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Load the dictionary from a file with one five-letter word per line.
///
/// Words are lowercased and sorted lexicographically; duplicate lines are
/// kept. Lines that are not exactly five characters long are skipped.
pub fn load_dictionary(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read dictionary file {}", path.display()))?;

    let mut words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.len() == WORD_LENGTH)
        .map(|line| line.to_lowercase())
        .collect();
    words.sort();

    Ok(words)
}
