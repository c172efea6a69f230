//! Entropy scoring, guess ranking, and candidate filtering.
//!
//! A guess is scored by the Shannon entropy of the distribution of feedback
//! patterns it would produce across the remaining candidates. A guess that
//! splits the candidates into many near-equal buckets scores high (more
//! expected information); one that leaves most candidates in a single bucket
//! scores low.

use anyhow::{bail, Result};

use crate::cache::{word_list_digest, EntropyCache};
use crate::feedback::FeedbackPattern;

/// How often the ranker persists the cache, counted in processed words.
const PERSIST_STRIDE: usize = 10;

/// Base-2 Shannon entropy of the feedback-pattern distribution `guess`
/// induces over `candidates`.
///
/// Each candidate falls into exactly one of the 243 pattern buckets, so the
/// bucket sizes over len(candidates) form a probability distribution. Uses
/// the convention 0*log2(0) = 0. Invariant under reordering of `candidates`;
/// ranges from 0 (no discrimination) to log2(243) bits.
pub fn entropy(guess: &str, candidates: &[String]) -> f64 {
    let n = candidates.len() as f64;
    let mut pattern_counts = [0u32; FeedbackPattern::NUM_PATTERNS];

    for target in candidates {
        let pattern = FeedbackPattern::classify(guess, target);
        pattern_counts[pattern.0 as usize] += 1;
    }

    let mut entropy = 0.0;
    for &count in &pattern_counts {
        if count > 0 {
            let p = count as f64 / n;
            entropy -= p * p.log2();
        }
    }

    entropy
}

/// Score every candidate as a guess and return the one with maximum entropy.
///
/// Candidates are scored in list order (sorted dictionary order), and ties go
/// to the earliest word, so the result is deterministic. A single remaining
/// candidate is returned directly with entropy 0.0, without invoking the
/// scorer; an empty list is an error.
///
/// The cache is consulted and updated only when its digest matches
/// `candidates`, so scores computed against one list are never reused for
/// another. While scoring against a matching cache, the cache is persisted
/// every [`PERSIST_STRIDE`] processed words (cache hits included) and once
/// more at the end; persist failures never abort the ranking.
pub fn rank_best(candidates: &[String], cache: &mut EntropyCache) -> Result<(String, f64)> {
    match candidates {
        [] => bail!("no remaining candidates; the feedback may be inconsistent"),
        [only] => return Ok((only.clone(), 0.0)),
        _ => {}
    }

    let use_cache = word_list_digest(candidates) == cache.digest();

    let mut scores = Vec::with_capacity(candidates.len());
    for (processed, word) in candidates.iter().enumerate() {
        let score = match cache.get(word).filter(|_| use_cache) {
            Some(score) => score,
            None => {
                let score = entropy(word, candidates);
                if use_cache {
                    cache.insert(word.clone(), score);
                }
                score
            }
        };
        scores.push(score);

        if use_cache && (processed + 1) % PERSIST_STRIDE == 0 {
            cache.persist().ok();
        }
    }
    if use_cache {
        cache.persist().ok();
    }

    let mut best = 0;
    for i in 1..scores.len() {
        if scores[i] > scores[best] {
            best = i;
        }
    }

    Ok((candidates[best].clone(), scores[best]))
}

/// Narrow `candidates` to the words consistent with `pattern` having been
/// reported for `guess`.
///
/// Takes ownership of the list and returns the narrowed one; applying the
/// same constraint again is a no-op.
pub fn filter_candidates(
    candidates: Vec<String>,
    guess: &str,
    pattern: FeedbackPattern,
) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|word| pattern.matches(guess, word))
        .collect()
}
