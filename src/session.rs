//! Game session state machine.
//!
//! One `Session` is one game: it owns the narrowing candidate list and the
//! entropy cache, and advances through explicit states driven by two events,
//! a guess being computed and user feedback being recorded. This keeps the
//! control flow testable without simulating console I/O.

use anyhow::{bail, Result};

use crate::cache::EntropyCache;
use crate::feedback::FeedbackPattern;
use crate::solver::{filter_candidates, rank_best};

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// The next guess has not been computed yet.
    AwaitingGuess,
    /// A guess was recommended; feedback for it is outstanding.
    AwaitingFeedback { guess: String, entropy: f64 },
    /// At most one candidate remains. `answer` is `None` when the feedback
    /// was inconsistent with the dictionary and no candidate survived.
    Complete { answer: Option<String> },
}

/// A single game against one dictionary.
pub struct Session {
    candidates: Vec<String>,
    cache: EntropyCache,
    state: SessionState,
}

impl Session {
    pub fn new(candidates: Vec<String>, cache: EntropyCache) -> Self {
        let state = Self::settle(&candidates);
        Self {
            candidates,
            cache,
            state,
        }
    }

    // State implied by the candidate count alone.
    fn settle(candidates: &[String]) -> SessionState {
        match candidates {
            [] => SessionState::Complete { answer: None },
            [only] => SessionState::Complete {
                answer: Some(only.clone()),
            },
            _ => SessionState::AwaitingGuess,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Rank the remaining candidates and move to `AwaitingFeedback`.
    pub fn compute_guess(&mut self) -> Result<(String, f64)> {
        if self.state != SessionState::AwaitingGuess {
            bail!("not awaiting a guess computation");
        }

        let (guess, entropy) = rank_best(&self.candidates, &mut self.cache)?;
        self.state = SessionState::AwaitingFeedback {
            guess: guess.clone(),
            entropy,
        };
        Ok((guess, entropy))
    }

    /// Record the user's feedback for the outstanding guess, narrowing the
    /// candidate list, and move to `AwaitingGuess` or `Complete`.
    pub fn record_feedback(&mut self, pattern: FeedbackPattern) -> Result<&SessionState> {
        let guess = match &self.state {
            SessionState::AwaitingFeedback { guess, .. } => guess.clone(),
            _ => bail!("no guess is awaiting feedback"),
        };

        let candidates = std::mem::take(&mut self.candidates);
        self.candidates = filter_candidates(candidates, &guess, pattern);
        self.state = Self::settle(&self.candidates);
        Ok(&self.state)
    }
}
