//! Feedback classification for Wordle guesses.
//!
//! This module handles classifying each letter of a guess against a target
//! word, and packing the five per-position classifications into a single
//! feedback pattern.
//!
//! Classification is purely positional: a letter is a hit when it sits at the
//! same position in the target, present when it occurs anywhere else in the
//! target, and a miss when it does not occur at all. There is no
//! duplicate-letter accounting as in the official game rules.

use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position ('t')
    Hit,
    /// Letter in the word but at a different position ('o')
    Present,
    /// Letter not in the word ('x')
    Miss,
}

impl Feedback {
    /// Whether `word` is consistent with this classification of `letter`
    /// at `pos`.
    ///
    /// For any (word, letter, pos) exactly one of the three variants admits
    /// the word. `Miss` ignores the position on purpose: it asks whether the
    /// letter occurs anywhere in the word.
    pub fn admits(self, word: &str, letter: u8, pos: usize) -> bool {
        let word = word.as_bytes();
        match self {
            Feedback::Hit => word[pos] == letter,
            Feedback::Present => word[pos] != letter && word.contains(&letter),
            Feedback::Miss => !word.contains(&letter),
        }
    }

    /// Convert to the character used in constraint strings
    pub fn to_char(self) -> char {
        match self {
            Feedback::Hit => 't',
            Feedback::Present => 'o',
            Feedback::Miss => 'x',
        }
    }

    /// Parse from a constraint character (t=hit, o=present, x=miss)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            't' => Some(Feedback::Hit),
            'o' => Some(Feedback::Present),
            'x' => Some(Feedback::Miss),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242) for efficiency.
/// Each position can be 0 (miss), 1 (present), or 2 (hit).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating all hits (candidate equals the guess)
    pub const ALL_HITS: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Miss => 0,
                Feedback::Present => 1,
                Feedback::Hit => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Classify a guess against a target word, position by position.
    ///
    /// Exactly one classification holds per position, so every (guess,
    /// target) pair maps to a single pattern.
    pub fn classify(guess: &str, target: &str) -> Self {
        let guess_bytes = guess.as_bytes();
        let target_bytes = target.as_bytes();

        debug_assert_eq!(guess_bytes.len(), WORD_LENGTH);
        debug_assert_eq!(target_bytes.len(), WORD_LENGTH);

        let mut feedback = [Feedback::Miss; WORD_LENGTH];
        for (i, fb) in feedback.iter_mut().enumerate() {
            *fb = if target_bytes[i] == guess_bytes[i] {
                Feedback::Hit
            } else if target_bytes.contains(&guess_bytes[i]) {
                Feedback::Present
            } else {
                Feedback::Miss
            };
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Miss; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Miss,
                1 => Feedback::Present,
                2 => Feedback::Hit,
                _ => unreachable!(),
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Whether `word` is consistent with this pattern having been reported
    /// for `guess`.
    pub fn matches(self, guess: &str, word: &str) -> bool {
        let guess_bytes = guess.as_bytes();
        self.to_feedbacks()
            .into_iter()
            .enumerate()
            .all(|(i, fb)| fb.admits(word, guess_bytes[i], i))
    }

    /// Check if this pattern identifies the guess as the answer (all hits)
    pub fn is_solved(self) -> bool {
        self == Self::ALL_HITS
    }

    /// Parse a constraint string like "xoxtx".
    ///
    /// Must be exactly five characters, each one of t/o/x
    /// (case-insensitive); anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let feedbacks: Option<Vec<_>> = s.chars().map(Feedback::from_char).collect();
        let arr: [Feedback; WORD_LENGTH] = feedbacks?.try_into().ok()?;
        Some(Self::new(arr))
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fb in self.to_feedbacks() {
            write!(f, "{}", fb.to_char())?;
        }
        Ok(())
    }
}
