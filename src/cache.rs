//! Persisted entropy cache.
//!
//! Ranking the full dictionary is the expensive first step of every game, and
//! its scores are identical across games and process restarts. The cache
//! stores word -> entropy scores on disk together with a digest of the word
//! list they were computed against, so stale scores are never reused for a
//! narrower candidate list.
//!
//! The on-disk format is an opaque bincode dump, read and written wholesale.
//! It is a local performance cache, never a source of truth: a missing,
//! corrupt, or digest-mismatched file simply loads as empty. The file is not
//! protected by any locking, so concurrent processes must not share one.

use std::collections::BTreeMap;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Digest identifying a candidate word list.
///
/// FxHasher is deterministic across runs, which the persisted digest relies
/// on; std's DefaultHasher makes no such guarantee.
pub fn word_list_digest(words: &[String]) -> u64 {
    let mut hasher = FxHasher::default();
    words.len().hash(&mut hasher);
    for word in words {
        word.hash(&mut hasher);
    }
    hasher.finish()
}

#[derive(Deserialize)]
struct CacheFile {
    digest: u64,
    scores: BTreeMap<String, f64>,
}

// Borrowed view for writing, bincode-compatible with CacheFile.
#[derive(Serialize)]
struct CacheFileRef<'a> {
    digest: u64,
    scores: &'a BTreeMap<String, f64>,
}

/// Word -> entropy memo for one specific candidate list, with an optional
/// on-disk backing file.
#[derive(Debug, Clone)]
pub struct EntropyCache {
    path: Option<PathBuf>,
    digest: u64,
    scores: BTreeMap<String, f64>,
}

impl EntropyCache {
    /// Load the cache backing `path`, keeping its scores only if they were
    /// computed against a word list with the given digest.
    ///
    /// Read failures of any kind are treated as a cache miss.
    pub fn load(path: impl Into<PathBuf>, digest: u64) -> Self {
        let path = path.into();
        let scores = File::open(&path)
            .ok()
            .map(BufReader::new)
            .and_then(|reader| bincode::deserialize_from::<_, CacheFile>(reader).ok())
            .filter(|file| file.digest == digest)
            .map(|file| file.scores)
            .unwrap_or_default();

        Self {
            path: Some(path),
            digest,
            scores,
        }
    }

    /// A cache that never touches the filesystem.
    pub fn in_memory(digest: u64) -> Self {
        Self {
            path: None,
            digest,
            scores: BTreeMap::new(),
        }
    }

    /// Digest of the word list this cache is valid for.
    pub fn digest(&self) -> u64 {
        self.digest
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn insert(&mut self, word: String, score: f64) {
        self.scores.insert(word, score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Write the whole cache to its backing file, overwriting the previous
    /// version. A no-op for in-memory caches.
    pub fn persist(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path,
            None => return Ok(()),
        };

        let file = File::create(path)
            .with_context(|| format!("cannot write cache file {}", path.display()))?;
        let record = CacheFileRef {
            digest: self.digest,
            scores: &self.scores,
        };
        bincode::serialize_into(BufWriter::new(file), &record)
            .with_context(|| format!("cannot serialize cache to {}", path.display()))?;

        Ok(())
    }
}
