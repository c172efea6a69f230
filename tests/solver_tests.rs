use wordle_aid::{
    entropy, filter_candidates, rank_best, word_list_digest, EntropyCache, FeedbackPattern,
    Session, SessionState,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn get_test_words() -> Vec<String> {
    words(&["abaci", "backs", "crane", "slate", "stove"])
}

#[test]
fn test_entropy_of_singleton_is_zero() {
    let list = words(&["stove"]);
    assert_eq!(entropy("stove", &list), 0.0);
    assert_eq!(entropy("crane", &list), 0.0);
}

#[test]
fn test_entropy_bounds() {
    let list = get_test_words();
    for word in &list {
        let e = entropy(word, &list);
        assert!(e >= 0.0);
        assert!(e <= (FeedbackPattern::NUM_PATTERNS as f64).log2());
    }
}

#[test]
fn test_entropy_permutation_invariant() {
    let list = get_test_words();
    let mut reversed = list.clone();
    reversed.reverse();
    for word in &list {
        let a = entropy(word, &list);
        let b = entropy(word, &reversed);
        assert!((a - b).abs() < 1e-12, "{}: {} != {}", word, a, b);
    }
}

#[test]
fn test_discriminating_guess_scores_higher() {
    let list = get_test_words();
    // A guess sharing no letters with any candidate puts everything in the
    // all-miss bucket and learns nothing.
    assert_eq!(entropy("zzzzz", &list), 0.0);
    assert!(entropy("crane", &list) > entropy("zzzzz", &list));
    assert!(entropy("slate", &list) > entropy("zzzzz", &list));
}

#[test]
fn test_rank_best_finds_maximal_entropy() {
    let list = get_test_words();
    let mut cache = EntropyCache::in_memory(word_list_digest(&list));
    let (best, best_entropy) = rank_best(&list, &mut cache).unwrap();

    // On this list the best guess splits all five words into distinct
    // buckets, and several words tie at log2(5); ties go to the first in
    // sorted order.
    assert!((best_entropy - 5f64.log2()).abs() < 1e-9);
    assert_eq!(best, "abaci");
    for word in &list {
        assert!(entropy(word, &list) <= best_entropy + 1e-9);
    }
}

#[test]
fn test_rank_best_empty_list_errors() {
    let mut cache = EntropyCache::in_memory(0);
    let err = rank_best(&[], &mut cache).unwrap_err();
    assert!(err.to_string().contains("no remaining candidates"));
}

#[test]
fn test_rank_best_singleton_short_circuits() {
    let list = words(&["stove"]);
    let mut cache = EntropyCache::in_memory(word_list_digest(&list));
    let (best, e) = rank_best(&list, &mut cache).unwrap();
    assert_eq!(best, "stove");
    assert_eq!(e, 0.0);
    // The scorer was never invoked, so nothing was memoized.
    assert!(cache.is_empty());
}

#[test]
fn test_rank_best_honors_matching_cache() {
    let list = get_test_words();
    let mut cache = EntropyCache::in_memory(word_list_digest(&list));
    cache.insert("backs".to_string(), 99.0);

    let (best, e) = rank_best(&list, &mut cache).unwrap();
    assert_eq!(best, "backs");
    assert_eq!(e, 99.0);
    // The remaining words were scored and memoized.
    assert_eq!(cache.len(), list.len());
}

#[test]
fn test_rank_best_ignores_mismatched_cache() {
    let list = get_test_words();
    let mut stale = EntropyCache::in_memory(word_list_digest(&list).wrapping_add(1));
    stale.insert("backs".to_string(), 99.0);

    let (_, e) = rank_best(&list, &mut stale).unwrap();
    assert!(e < 99.0);
    // Scores for a different list are never written into a stale cache.
    assert_eq!(stale.len(), 1);
}

#[test]
fn test_filter_all_misses_removes_shared_letters() {
    // "xxxxx" against "crane" removes every word containing c, r, a, n or e.
    let pattern = FeedbackPattern::parse("xxxxx").unwrap();
    let narrowed = filter_candidates(get_test_words(), "crane", pattern);
    assert!(narrowed.is_empty());

    let narrowed = filter_candidates(words(&["skids", "slate"]), "crane", pattern);
    assert_eq!(narrowed, words(&["skids"]));
}

#[test]
fn test_filter_all_hits_keeps_only_the_guess() {
    let pattern = FeedbackPattern::parse("ttttt").unwrap();
    let narrowed = filter_candidates(get_test_words(), "crane", pattern);
    assert_eq!(narrowed, words(&["crane"]));
}

#[test]
fn test_filter_is_idempotent() {
    let pattern = FeedbackPattern::classify("crane", "slate");
    let once = filter_candidates(get_test_words(), "crane", pattern);
    let twice = filter_candidates(once.clone(), "crane", pattern);
    assert_eq!(once, twice);
    assert!(once.contains(&"slate".to_string()));
}

#[test]
fn test_filter_preserves_duplicates() {
    let list = words(&["crane", "crane", "slate"]);
    let pattern = FeedbackPattern::parse("ttttt").unwrap();
    let narrowed = filter_candidates(list, "crane", pattern);
    assert_eq!(narrowed, words(&["crane", "crane"]));
}

#[test]
fn test_session_narrows_to_the_target() {
    let list = get_test_words();
    let cache = EntropyCache::in_memory(word_list_digest(&list));
    let mut session = Session::new(list, cache);

    for _ in 0..6 {
        if let SessionState::Complete { .. } = session.state() {
            break;
        }
        let (guess, _) = session.compute_guess().unwrap();
        let pattern = FeedbackPattern::classify(&guess, "stove");
        session.record_feedback(pattern).unwrap();
    }

    assert_eq!(
        session.state(),
        &SessionState::Complete {
            answer: Some("stove".to_string())
        }
    );
}

#[test]
fn test_session_reports_inconsistent_feedback() {
    let list = words(&["crane", "slate", "stove"]);
    let cache = EntropyCache::in_memory(word_list_digest(&list));
    let mut session = Session::new(list, cache);

    let (guess, _) = session.compute_guess().unwrap();
    assert_eq!(guess, "crane");

    // Every remaining word shares a letter with "crane", so all-miss
    // feedback is contradictory.
    let state = session
        .record_feedback(FeedbackPattern::parse("xxxxx").unwrap())
        .unwrap();
    assert_eq!(state, &SessionState::Complete { answer: None });
    assert_eq!(session.remaining_count(), 0);
}

#[test]
fn test_session_singleton_completes_immediately() {
    let list = words(&["stove"]);
    let cache = EntropyCache::in_memory(word_list_digest(&list));
    let session = Session::new(list, cache);
    assert_eq!(
        session.state(),
        &SessionState::Complete {
            answer: Some("stove".to_string())
        }
    );
}

#[test]
fn test_session_rejects_out_of_order_events() {
    let list = get_test_words();
    let cache = EntropyCache::in_memory(word_list_digest(&list));
    let mut session = Session::new(list, cache);

    // Feedback before any guess was computed.
    assert!(session
        .record_feedback(FeedbackPattern::parse("xxxxx").unwrap())
        .is_err());

    session.compute_guess().unwrap();
    // A second computation while feedback is outstanding.
    assert!(session.compute_guess().is_err());
}
